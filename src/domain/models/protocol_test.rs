use anyhow::bail;
use anyhow::Result;
use serde_json::json;
use test_utils::config_fixture;
use test_utils::server_info_fixture;

use super::InboundMessage;
use super::OutboundMessage;

#[test]
fn it_serializes_request_info() -> Result<()> {
    let res = OutboundMessage::request_info(true).to_json()?;
    assert_eq!(res, r#"{"type":"requestInfo","arguments":[true]}"#);
    return Ok(());
}

#[test]
fn it_serializes_unit_requests() -> Result<()> {
    assert_eq!(
        OutboundMessage::RequestConfig.to_json()?,
        r#"{"type":"requestConfig"}"#
    );
    assert_eq!(
        OutboundMessage::GetThemesList.to_json()?,
        r#"{"type":"getThemesList"}"#
    );
    assert_eq!(
        OutboundMessage::TerminateServers.to_json()?,
        r#"{"type":"terminateServers"}"#
    );
    return Ok(());
}

#[test]
fn it_serializes_stdin_input() -> Result<()> {
    let msg = OutboundMessage::StdinInput {
        server_name: "alpha".to_string(),
        value: "say hi".to_string(),
    };
    assert_eq!(
        msg.to_json()?,
        r#"{"type":"stdinInput","server_name":"alpha","value":"say hi"}"#
    );
    return Ok(());
}

#[test]
fn it_serializes_config_change_with_camel_case_field() -> Result<()> {
    let msg = OutboundMessage::ConfigChange {
        updated_config: json!({"port": "8080"}),
    };
    let value: serde_json::Value = serde_json::from_str(&msg.to_json()?)?;
    assert_eq!(value["type"], "configChange");
    assert_eq!(value["updatedConfig"]["port"], "8080");
    return Ok(());
}

#[test]
fn it_serializes_theme_css_request() -> Result<()> {
    let msg = OutboundMessage::GetThemeCss {
        theme_name: "Dracula".to_string(),
    };
    assert_eq!(
        msg.to_json()?,
        r#"{"type":"getThemeCSS","theme_name":"Dracula"}"#
    );
    return Ok(());
}

#[test]
fn it_decodes_server_info() -> Result<()> {
    let msg = InboundMessage::from_value(server_info_fixture())?;
    match msg {
        Some(InboundMessage::ServerInfo { servers, config }) => {
            assert_eq!(servers.len(), 3);
            assert_eq!(servers[0].name, "alpha");
            assert!(servers[0].active);
            assert_eq!(servers[1].specialization, Some("Minecraft".to_string()));
            assert!(servers[1].specialized_info.is_some());
            assert!(servers[2].specialized_info.is_none());
            assert_eq!(config, Some(config_fixture()));
        }
        _ => bail!("Wrong enum"),
    }
    return Ok(());
}

#[test]
fn it_decodes_server_output() -> Result<()> {
    let msg = InboundMessage::from_json(
        r#"{"type":"ServerOutput","server_name":"alpha","output":"x<br/>y<br/>","server_type":null}"#,
    )?;
    assert_eq!(
        msg,
        Some(InboundMessage::ServerOutput {
            server_name: "alpha".to_string(),
            output: "x<br/>y<br/>".to_string(),
            server_type: None,
        })
    );
    return Ok(());
}

#[test]
fn it_decodes_theme_messages() -> Result<()> {
    let list = InboundMessage::from_json(r#"{"type":"themesList","themes":["Dark","Light"]}"#)?;
    assert_eq!(
        list,
        Some(InboundMessage::ThemesList {
            themes: vec!["Dark".to_string(), "Light".to_string()],
        })
    );

    let css = InboundMessage::from_json(
        r#"{"type":"themeCSS","theme_name":"Dark","css":":root {}"}"#,
    )?;
    assert_eq!(
        css,
        Some(InboundMessage::ThemeCss {
            theme_name: "Dark".to_string(),
            css: ":root {}".to_string(),
        })
    );
    return Ok(());
}

#[test]
fn it_decodes_messagepack_frames() -> Result<()> {
    let payload = json!({
        "type": "ServerOutput",
        "server_name": "alpha",
        "output": "hello\r\n",
    });
    let bytes = rmp_serde::to_vec_named(&payload)?;
    let msg = InboundMessage::from_msgpack(&bytes)?;
    assert_eq!(
        msg,
        Some(InboundMessage::ServerOutput {
            server_name: "alpha".to_string(),
            output: "hello\r\n".to_string(),
            server_type: None,
        })
    );
    return Ok(());
}

#[test]
fn it_ignores_unknown_types() -> Result<()> {
    let msg = InboundMessage::from_json(r#"{"type":"slaveHello","arguments":[]}"#)?;
    assert!(msg.is_none());
    return Ok(());
}

#[test]
fn it_fails_on_plain_text_errors() {
    let res = InboundMessage::from_json("Error parsing configChange message");
    assert!(res.is_err());
}

#[test]
fn it_fails_on_known_type_with_missing_fields() {
    let res = InboundMessage::from_json(r#"{"type":"ServerOutput"}"#);
    assert!(res.is_err());
}
