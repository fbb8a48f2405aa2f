#[cfg(test)]
#[path = "roster_test.rs"]
mod tests;

use std::collections::HashMap;

use anyhow::bail;
use anyhow::Result;
use serde_json::Value;

use super::CommandHistory;
use super::Console;
use crate::domain::models::LineDelimiter;
use crate::domain::models::ServerSnapshot;
use crate::domain::models::Specialization;

pub const INACTIVE_SUFFIX: &str = " (inactive)";

/// Client-side state of one backend server. Created the first time a snapshot
/// names the server, and kept for the rest of the session.
pub struct RosterEntry {
    pub name: String,
    pub title: String,
    pub inactive: bool,
    pub console: Console,
    pub history: CommandHistory,
    pub specialization: Option<Specialization>,
    specialized_info: Option<Value>,
}

impl RosterEntry {
    fn new(snapshot: &ServerSnapshot) -> RosterEntry {
        let mut entry = RosterEntry {
            name: snapshot.name.to_string(),
            title: snapshot.name.to_string(),
            inactive: false,
            console: Console::default(),
            history: CommandHistory::default(),
            specialization: None,
            specialized_info: None,
        };
        entry.set_active(snapshot.active);

        return entry;
    }

    fn generic_title(&self) -> String {
        if self.inactive {
            return format!("{}{INACTIVE_SUFFIX}", self.name);
        }
        return self.name.to_string();
    }

    /// Returns whether anything changed. Re-applying the current state is a
    /// no-op.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.inactive != active {
            return false;
        }

        self.inactive = !active;
        self.title = self.generic_title();

        return true;
    }

    fn set_specialization(&mut self, snapshot: &ServerSnapshot) {
        self.specialization = snapshot
            .specialization
            .as_deref()
            .and_then(Specialization::parse);
        self.specialized_info = snapshot.specialized_info.clone();
    }

    /// Rebuilds the title from specialization info. Malformed info falls back
    /// to the plain active/inactive title.
    pub fn refresh_title(&mut self) {
        let kind = match self.specialization {
            Some(kind) if !self.inactive => kind,
            _ => {
                self.title = self.generic_title();
                return;
            }
        };

        let res = match &self.specialized_info {
            Some(info) => kind.title(&self.name, info),
            None => {
                self.title = self.generic_title();
                return;
            }
        };

        match res {
            Ok(title) => self.title = title,
            Err(err) => {
                tracing::debug!(server = self.name, error = ?err, "Malformed specialization info");
                self.title = self.generic_title();
            }
        }
    }
}

/// Known servers in the order they were first seen.
#[derive(Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn entries(&self) -> &[RosterEntry] {
        return &self.entries;
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        return self.index.get(name).map(|idx| return &self.entries[*idx]);
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RosterEntry> {
        return self
            .index
            .get(name)
            .map(|idx| return &mut self.entries[*idx]);
    }

    pub fn get_index_mut(&mut self, idx: usize) -> Option<&mut RosterEntry> {
        return self.entries.get_mut(idx);
    }

    /// Reconciles the roster against a `ServerInfo` snapshot. Unknown names get
    /// exactly one new entry; known ones have their state and console updated.
    pub fn apply_snapshot(&mut self, servers: &[ServerSnapshot], delimiter: LineDelimiter) {
        for snapshot in servers {
            let idx = match self.index.get(&snapshot.name) {
                Some(idx) => *idx,
                None => {
                    tracing::debug!(server = snapshot.name, "Adding server to roster");
                    self.entries.push(RosterEntry::new(snapshot));
                    let idx = self.entries.len() - 1;
                    self.index.insert(snapshot.name.to_string(), idx);
                    idx
                }
            };

            let entry = &mut self.entries[idx];
            if entry.set_active(snapshot.active) {
                tracing::debug!(
                    server = entry.name,
                    active = snapshot.active,
                    "Server changed state"
                );
            }
            entry.set_specialization(snapshot);
            entry
                .console
                .append_snapshot(&snapshot.output, delimiter);
        }
    }

    /// Appends a pushed `ServerOutput` delta to the named server's console.
    pub fn append_output(
        &mut self,
        server_name: &str,
        output: &str,
        delimiter: LineDelimiter,
    ) -> Result<usize> {
        let entry = match self.get_mut(server_name) {
            Some(entry) => entry,
            None => bail!(format!("No console for server {server_name}")),
        };

        return Ok(entry.console.append_delta(output, delimiter));
    }

    pub fn refresh_titles(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.refresh_title();
        }
    }
}
