#[cfg(test)]
#[path = "config_editor_test.rs"]
mod tests;

use anyhow::Context;
use anyhow::Result;
use serde_json::Value;

use crate::domain::models::OutboundMessage;
use crate::domain::models::TextArea;

/// Local copy of the backend configuration plus the editor showing it.
pub struct ConfigEditor<'a> {
    cached: Option<Value>,
    pub textarea: tui_textarea::TextArea<'a>,
}

impl<'a> Default for ConfigEditor<'a> {
    fn default() -> ConfigEditor<'a> {
        return ConfigEditor {
            cached: None,
            textarea: TextArea::config_editor(""),
        };
    }
}

impl<'a> ConfigEditor<'a> {
    pub fn cached(&self) -> Option<&Value> {
        return self.cached.as_ref();
    }

    pub fn text(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    /// Takes a configuration pushed by the backend. The editor is only reset
    /// when the document differs from the cached one, so an unchanged
    /// broadcast doesn't throw away what the operator is typing.
    pub fn apply_remote(&mut self, config: Value) -> Result<bool> {
        if self.cached.as_ref() == Some(&config) {
            return Ok(false);
        }

        let pretty = serde_json::to_string_pretty(&config)?;
        self.textarea = TextArea::config_editor(&pretty);
        self.cached = Some(config);

        return Ok(true);
    }

    /// Parses the editor contents. Malformed JSON is an error and nothing is
    /// sent; `None` means the document matches what the backend already has.
    pub fn save(&self) -> Result<Option<OutboundMessage>> {
        let updated: Value =
            serde_json::from_str(&self.text()).context("Configuration is not valid JSON")?;

        if self.cached.as_ref() == Some(&updated) {
            return Ok(None);
        }

        return Ok(Some(OutboundMessage::ConfigChange {
            updated_config: updated,
        }));
    }
}
