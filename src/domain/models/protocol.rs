#[cfg(test)]
#[path = "protocol_test.rs"]
mod tests;

use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

const INBOUND_TYPES: [&str; 5] = [
    "ServerInfo",
    "ConfigInfo",
    "ServerOutput",
    "themesList",
    "themeCSS",
];

/// One server's state inside a `ServerInfo` message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub specialized_info: Option<Value>,
}

impl ServerSnapshot {
    #[cfg(test)]
    pub fn new(name: &str, active: bool, output: &str) -> ServerSnapshot {
        return ServerSnapshot {
            name: name.to_string(),
            active,
            output: output.to_string(),
            specialization: None,
            specialized_info: None,
        };
    }
}

/// Messages sent to the backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "requestInfo")]
    RequestInfo { arguments: Vec<bool> },
    #[serde(rename = "requestConfig")]
    RequestConfig,
    #[serde(rename = "getThemesList")]
    GetThemesList,
    #[serde(rename = "getThemeCSS")]
    GetThemeCss { theme_name: String },
    #[serde(rename = "stdinInput")]
    StdinInput { server_name: String, value: String },
    #[serde(rename = "configChange")]
    ConfigChange {
        #[serde(rename = "updatedConfig")]
        updated_config: Value,
    },
    #[serde(rename = "terminateServers")]
    TerminateServers,
}

impl OutboundMessage {
    pub fn request_info(full: bool) -> OutboundMessage {
        return OutboundMessage::RequestInfo {
            arguments: vec![full],
        };
    }

    pub fn to_json(&self) -> Result<String> {
        return Ok(serde_json::to_string(self)?);
    }
}

/// Messages pushed by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    ServerInfo {
        servers: Vec<ServerSnapshot>,
        #[serde(default)]
        config: Option<Value>,
    },
    ConfigInfo {
        config: Value,
    },
    ServerOutput {
        server_name: String,
        output: String,
        #[serde(default)]
        server_type: Option<String>,
    },
    #[serde(rename = "themesList")]
    ThemesList { themes: Vec<String> },
    #[serde(rename = "themeCSS")]
    ThemeCss { theme_name: String, css: String },
}

impl InboundMessage {
    /// Decodes a JSON document. Returns `None` for well-formed documents with a
    /// message type this client does not handle.
    pub fn from_value(value: Value) -> Result<Option<InboundMessage>> {
        let msg_type = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if !INBOUND_TYPES.contains(&msg_type) {
            tracing::debug!(msg_type, "Ignoring unhandled message type");
            return Ok(None);
        }

        return Ok(Some(serde_json::from_value(value)?));
    }

    pub fn from_json(text: &str) -> Result<Option<InboundMessage>> {
        let value: Value = serde_json::from_str(text)?;
        return InboundMessage::from_value(value);
    }

    /// Binary frames carry the same document encoded as MessagePack with
    /// named fields.
    pub fn from_msgpack(bytes: &[u8]) -> Result<Option<InboundMessage>> {
        let value: Value = rmp_serde::from_slice(bytes)?;
        return InboundMessage::from_value(value);
    }
}
