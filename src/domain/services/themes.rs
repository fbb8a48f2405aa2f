#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::Palette;

/// Theme choice kept on disk between runs so the palette can be applied before
/// the backend answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    #[serde(rename = "theme-name", default)]
    pub theme_name: Option<String>,
    #[serde(rename = "theme-css", default)]
    pub theme_css: Option<String>,
}

pub struct Themes {
    state_file: path::PathBuf,
    pub available: Vec<String>,
    pub selected: usize,
    pub state: ThemeState,
    pub palette: Palette,
}

impl Themes {
    pub fn new(state_file: path::PathBuf) -> Themes {
        return Themes {
            state_file,
            available: vec![],
            selected: 0,
            state: ThemeState::default(),
            palette: Palette::default(),
        };
    }

    /// Reads the persisted theme, if any. A missing file is a fresh install.
    pub async fn load(state_file: path::PathBuf) -> Result<Themes> {
        let mut themes = Themes::new(state_file);
        if !themes.state_file.exists() {
            return Ok(themes);
        }

        let payload = fs::read_to_string(&themes.state_file).await?;
        themes.state = serde_yaml::from_str(&payload)?;
        if let Some(css) = &themes.state.theme_css {
            themes.palette = Palette::from_css(css);
        }

        return Ok(themes);
    }

    async fn save(&self) -> Result<()> {
        let payload = serde_yaml::to_string(&self.state)?;

        if let Some(parent) = self.state_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.state_file).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }

    pub fn set_available(&mut self, themes: Vec<String>) {
        self.selected = self
            .state
            .theme_name
            .as_ref()
            .and_then(|name| return themes.iter().position(|e| return e == name))
            .unwrap_or(0);
        self.available = themes;
    }

    pub fn select_next(&mut self) {
        if self.available.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.available.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_name(&self) -> Option<&str> {
        return self.available.get(self.selected).map(|e| return e.as_str());
    }

    /// Replaces the active stylesheet and persists it.
    pub async fn apply(&mut self, theme_name: &str, css: &str) -> Result<()> {
        self.state = ThemeState {
            theme_name: Some(theme_name.to_string()),
            theme_css: Some(css.to_string()),
        };
        self.palette = Palette::from_css(css);

        return self.save().await;
    }
}
