use anyhow::bail;
use anyhow::Result;
use serde_json::json;
use test_utils::config_fixture;
use tui_textarea::Input;
use tui_textarea::Key;

use super::ConfigEditor;
use crate::domain::models::OutboundMessage;
use crate::domain::models::TextArea;

#[test]
fn it_loads_remote_config_into_editor() -> Result<()> {
    let mut editor = ConfigEditor::default();
    assert!(editor.apply_remote(config_fixture())?);

    assert_eq!(editor.cached(), Some(&config_fixture()));
    assert_eq!(editor.text(), serde_json::to_string_pretty(&config_fixture())?);
    return Ok(());
}

#[test]
fn it_keeps_editor_for_identical_config() -> Result<()> {
    let mut editor = ConfigEditor::default();
    editor.apply_remote(config_fixture())?;
    editor.textarea.input(Input {
        key: Key::Char('x'),
        ctrl: false,
        alt: false,
    });
    let typed = editor.text();

    assert!(!editor.apply_remote(config_fixture())?);
    assert_eq!(editor.text(), typed);
    return Ok(());
}

#[test]
fn it_rejects_malformed_json() -> Result<()> {
    let mut editor = ConfigEditor::default();
    editor.apply_remote(config_fixture())?;
    editor.textarea = TextArea::config_editor("{\"port\": ");

    let res = editor.save();
    assert!(res.is_err());
    assert_eq!(editor.cached(), Some(&config_fixture()));
    return Ok(());
}

#[test]
fn it_skips_unchanged_config() -> Result<()> {
    let mut editor = ConfigEditor::default();
    editor.apply_remote(config_fixture())?;
    assert!(editor.save()?.is_none());
    return Ok(());
}

#[test]
fn it_round_trips_config_changes() -> Result<()> {
    let mut editor = ConfigEditor::default();
    editor.apply_remote(config_fixture())?;

    let mut changed = config_fixture();
    changed["port"] = json!("9090");
    editor.textarea = TextArea::config_editor(&serde_json::to_string_pretty(&changed)?);

    let updated = match editor.save()? {
        Some(OutboundMessage::ConfigChange { updated_config }) => updated_config,
        _ => bail!("Wrong enum"),
    };
    assert_eq!(updated, changed);

    // Backend echoes it back through ConfigInfo.
    assert!(editor.apply_remote(updated)?);
    assert_eq!(editor.cached(), Some(&changed));
    assert!(editor.save()?.is_none());
    return Ok(());
}
