#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use serde_json::Value;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::ConfigEditor;
use super::Roster;
use super::RosterEntry;
use super::Themes;
use super::STARTING_PLACEHOLDER;
use crate::domain::models::Action;
use crate::domain::models::ConnectionState;
use crate::domain::models::Event;
use crate::domain::models::InboundMessage;
use crate::domain::models::LineDelimiter;
use crate::domain::models::OutboundMessage;
use crate::domain::models::Page;
use crate::domain::models::TextArea;

pub const NOT_CONNECTED_BANNER: &str = "Not connected to the backend";

/// Everything the client knows about the current backend session. Owned by
/// the UI loop; the connection task only talks to it through events.
pub struct AppState<'a> {
    pub banner: Option<String>,
    pub config_editor: ConfigEditor<'a>,
    pub connection: ConnectionState,
    pub delimiter: LineDelimiter,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub page: Page,
    pub roster: Roster,
    pub selected: usize,
    pub stdin: tui_textarea::TextArea<'a>,
    pub terminate_armed: bool,
    pub themes: Themes,
}

impl<'a> AppState<'a> {
    pub fn new(delimiter: LineDelimiter, themes: Themes) -> AppState<'a> {
        return AppState {
            banner: None,
            config_editor: ConfigEditor::default(),
            connection: ConnectionState::Connecting,
            delimiter,
            last_known_height: 0,
            last_known_width: 0,
            page: Page::default(),
            roster: Roster::default(),
            selected: 0,
            stdin: TextArea::stdin(""),
            terminate_armed: false,
            themes,
        };
    }

    pub fn selected_entry(&self) -> Option<&RosterEntry> {
        return self.roster.entries().get(self.selected);
    }

    fn selected_entry_mut(&mut self) -> Option<&mut RosterEntry> {
        return self.roster.get_index_mut(self.selected);
    }

    fn selected_name(&self) -> String {
        return self
            .selected_entry()
            .map(|e| return e.name.to_string())
            .unwrap_or_default();
    }

    /// Handles one event to completion. Returns `true` when the operator asked
    /// to quit.
    pub async fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        if !matches!(
            event,
            Event::KeyboardCTRLT() | Event::Inbound(_) | Event::UISpecializationTick()
        ) && self.terminate_armed
        {
            self.terminate_armed = false;
            self.banner = None;
        }

        match event {
            Event::ConnectionOpened() => {
                self.connection = ConnectionState::Connected;
                self.banner = None;
                if let Some(theme_name) = &self.themes.state.theme_name {
                    tx.send(Action::Send(OutboundMessage::GetThemeCss {
                        theme_name: theme_name.to_string(),
                    }))?;
                }
            }
            Event::ConnectionLost(reason) => {
                self.connection = ConnectionState::Degraded;
                self.banner = Some(format!("Connection lost: {reason}"));
            }
            Event::ConnectionReload() => {
                self.reset();
            }
            Event::Inbound(msg) => {
                self.handle_inbound(msg).await;
            }
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::KeyboardCTRLN() => {
                self.select_server(true);
            }
            Event::KeyboardCTRLP() => {
                self.select_server(false);
            }
            Event::KeyboardCTRLS() => {
                if self.page == Page::Config {
                    self.save_config(tx)?;
                }
            }
            Event::KeyboardCTRLT() => {
                if !self.ensure_connected() {
                    self.terminate_armed = false;
                } else if self.terminate_armed {
                    tx.send(Action::Send(OutboundMessage::TerminateServers))?;
                    self.terminate_armed = false;
                    self.banner = Some("Terminating all servers".to_string());
                } else {
                    self.terminate_armed = true;
                    self.banner = Some("Press Ctrl+T again to terminate all servers".to_string());
                }
            }
            Event::KeyboardEnter() => match self.page {
                Page::Servers => self.submit_stdin(tx)?,
                Page::Config => {
                    self.config_editor.textarea.input(Input {
                        key: Key::Enter,
                        ctrl: false,
                        alt: false,
                    });
                }
                Page::Themes => {
                    if !self.ensure_connected() {
                        return Ok(false);
                    }
                    if let Some(theme_name) = self.themes.selected_name() {
                        tx.send(Action::Send(OutboundMessage::GetThemeCss {
                            theme_name: theme_name.to_string(),
                        }))?;
                    }
                }
            },
            Event::KeyboardCharInput(input) => {
                self.handle_input(input);
            }
            Event::KeyboardPaste(text) => {
                for char in text.chars() {
                    let key = match char {
                        '\r' => continue,
                        '\n' if self.page == Page::Servers => {
                            if self.connection != ConnectionState::Connected {
                                Key::Char(' ')
                            } else {
                                self.submit_stdin(tx)?;
                                continue;
                            }
                        }
                        '\n' if self.page != Page::Config => continue,
                        '\n' => Key::Enter,
                        _ => Key::Char(char),
                    };
                    self.handle_input(Input {
                        key,
                        ctrl: false,
                        alt: false,
                    });
                }
            }
            Event::UIPage(page) => {
                self.page = page;
            }
            Event::UIScrollDown() => {
                if let Some(entry) = self.selected_entry_mut() {
                    entry.console.scroll.down();
                }
            }
            Event::UIScrollUp() => {
                if let Some(entry) = self.selected_entry_mut() {
                    entry.console.scroll.up();
                }
            }
            Event::UIScrollPageDown() => {
                if let Some(entry) = self.selected_entry_mut() {
                    entry.console.scroll.down_page();
                }
            }
            Event::UIScrollPageUp() => {
                if let Some(entry) = self.selected_entry_mut() {
                    entry.console.scroll.up_page();
                }
            }
            Event::UISpecializationTick() => {
                self.roster.refresh_titles();
            }
        }

        return Ok(false);
    }

    pub async fn handle_inbound(&mut self, msg: InboundMessage) {
        match msg {
            InboundMessage::ServerInfo { servers, config } => {
                let was_empty = self.roster.is_empty();
                self.roster.apply_snapshot(&servers, self.delimiter);
                if was_empty && !self.roster.is_empty() {
                    self.stdin = TextArea::stdin(&self.selected_name());
                }
                self.sync_dependants();

                if let Some(config) = config {
                    self.apply_config(config);
                }
            }
            InboundMessage::ConfigInfo { config } => {
                self.apply_config(config);
            }
            InboundMessage::ServerOutput {
                server_name,
                output,
                ..
            } => {
                if let Err(err) = self
                    .roster
                    .append_output(&server_name, &output, self.delimiter)
                {
                    tracing::warn!(error = ?err, "Dropping server output");
                }
            }
            InboundMessage::ThemesList { themes } => {
                self.themes.set_available(themes);
            }
            InboundMessage::ThemeCss { theme_name, css } => {
                if let Err(err) = self.themes.apply(&theme_name, &css).await {
                    tracing::warn!(error = ?err, theme = theme_name, "Failed to persist theme");
                    self.banner = Some(format!("Unable to save theme {theme_name}: {err}"));
                }
            }
        }
    }

    /// Size of the console panel, borders included.
    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        let viewport_length = self.last_known_height.saturating_sub(2);
        for idx in 0..self.roster.len() {
            if let Some(entry) = self.roster.get_index_mut(idx) {
                entry.console.set_viewport(viewport_length);
            }
        }
    }

    fn apply_config(&mut self, config: Value) {
        match self.config_editor.apply_remote(config) {
            Ok(true) => tracing::debug!("Configuration updated from backend"),
            Ok(false) => {}
            Err(err) => tracing::warn!(error = ?err, "Unable to show configuration"),
        }
    }

    /// Sets the not connected banner when there is no live socket to send on.
    fn ensure_connected(&mut self) -> bool {
        if self.connection == ConnectionState::Connected {
            return true;
        }

        self.banner = Some(NOT_CONNECTED_BANNER.to_string());
        return false;
    }

    fn save_config(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if !self.ensure_connected() {
            return Ok(());
        }
        if self.config_editor.cached().is_none() {
            self.banner = Some("Configuration has not been received yet".to_string());
            return Ok(());
        }

        match self.config_editor.save() {
            Ok(Some(msg)) => {
                tx.send(Action::Send(msg))?;
                self.banner = Some("Configuration saved".to_string());
            }
            Ok(None) => {
                self.banner = Some("Configuration unchanged".to_string());
            }
            Err(err) => {
                self.banner = Some(format!("{err:#}"));
            }
        }

        return Ok(());
    }

    fn select_server(&mut self, forward: bool) {
        let count = self.roster.len();
        if count == 0 {
            return;
        }

        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        self.stdin = TextArea::stdin(&self.selected_name());
    }

    fn handle_input(&mut self, input: Input) {
        match self.page {
            Page::Servers => self.handle_stdin_input(input),
            Page::Config => {
                self.config_editor.textarea.input(input);
            }
            Page::Themes => match input.key {
                Key::Up => self.themes.select_prev(),
                Key::Down => self.themes.select_next(),
                _ => {}
            },
        }
    }

    fn handle_stdin_input(&mut self, input: Input) {
        let name = self.selected_name();
        let entry = match self.roster.get_index_mut(self.selected) {
            Some(entry) => entry,
            None => return,
        };

        match input.key {
            Key::Up => {
                if let Some(command) = entry.history.older() {
                    self.stdin = TextArea::stdin_with_value(&name, command);
                }
            }
            Key::Down => {
                self.stdin = match entry.history.newer() {
                    Some(command) => TextArea::stdin_with_value(&name, command),
                    None => TextArea::stdin(&name),
                };
            }
            _ => {
                self.stdin.input(input);
            }
        }
    }

    fn submit_stdin(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let value = self.stdin.lines().join("\n");
        if value.is_empty() {
            return Ok(());
        }

        if !self.ensure_connected() {
            return Ok(());
        }

        let entry = match self.roster.get_index_mut(self.selected) {
            Some(entry) => entry,
            None => return Ok(()),
        };

        entry.history.push(&value);
        if entry.inactive && value.trim().eq_ignore_ascii_case("start") {
            entry.console.show_placeholder(STARTING_PLACEHOLDER);
        }

        let server_name = entry.name.to_string();
        self.stdin = TextArea::stdin(&server_name);
        tx.send(Action::Send(OutboundMessage::StdinInput { server_name, value }))?;

        return Ok(());
    }

    /// Drops everything learned from the previous session. The persisted theme
    /// stays applied.
    fn reset(&mut self) {
        self.banner = None;
        self.config_editor = ConfigEditor::default();
        self.connection = ConnectionState::Connecting;
        self.roster = Roster::default();
        self.selected = 0;
        self.stdin = TextArea::stdin("");
        self.terminate_armed = false;
        self.themes.set_available(vec![]);
    }
}
