#[cfg(test)]
#[path = "specialization_test.rs"]
mod tests;

use anyhow::Result;
use serde_derive::Deserialize;
use serde_json::Value;
use strum::EnumIter;
use strum::IntoEnumIterator;

/// Game server kinds the backend knows how to parse. Their status line is
/// built from the structured `specialized_info` instead of active/inactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
pub enum Specialization {
    Minecraft,
    Terraria,
    #[strum(serialize = "Vintage Story")]
    VintageStory,
}

#[derive(Debug, Deserialize)]
struct PlayerInfo {
    player_count: i64,
    max_players: u64,
    #[serde(default)]
    ready: Option<bool>,
}

impl Specialization {
    pub fn parse(text: &str) -> Option<Specialization> {
        let normalized = text.replace([' ', '_', '-'], "").to_lowercase();
        return Specialization::iter().find(|e| {
            return e.to_string().replace(' ', "").to_lowercase() == normalized;
        });
    }

    /// Builds the status title for a server of this kind. Fails when the
    /// backend sent something that doesn't look like player info.
    pub fn title(&self, name: &str, info: &Value) -> Result<String> {
        let players: PlayerInfo = serde_json::from_value(info.clone())?;
        let count = players.player_count.max(0);
        let max = players.max_players;

        if *self == Specialization::Minecraft {
            let readiness = if players.ready.unwrap_or(false) {
                "ready"
            } else {
                "starting"
            };
            return Ok(format!("{name} - {count}/{max} ({readiness})"));
        }

        return Ok(format!("{name} - {count}/{max}"));
    }
}
