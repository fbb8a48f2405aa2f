use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(doc["url"].as_str(), Some("http://localhost:8080/"));
    assert_eq!(doc["line-delimiter"].as_str(), Some("crlf"));
    assert_eq!(doc["full-output"].as_bool(), Some(true));
    assert_eq!(doc["refresh-interval"].as_integer(), Some(200));
    assert_eq!(doc["specialization-interval"].as_integer(), Some(250));
    assert!(doc.get("config-file").is_none());
    assert!(res.contains("[possible values: crlf, br, lf]"));

    return Ok(());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["servdeck", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Url), "http://10.0.0.2:8080/");
    assert_eq!(Config::get(ConfigKey::LineDelimiter), "br");
    assert_eq!(Config::get(ConfigKey::FullOutput), "false");
    assert_eq!(Config::get(ConfigKey::HealthCheckMaxInterval), "8000");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["servdeck", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[test]
fn it_defaults_to_local_dashboard() {
    assert_eq!(Config::default(ConfigKey::Url), "http://localhost:8080/");
    assert_eq!(Config::default(ConfigKey::HealthCheckInterval), "1000");
    assert!(Config::default(ConfigKey::StateFile).ends_with("state.yaml"));
}
