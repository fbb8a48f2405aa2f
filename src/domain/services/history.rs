#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 25;

/// Recently submitted stdin lines for one server. The cursor counts steps back
/// from the newest entry; `0` means "not browsing", which shows an empty input.
#[derive(Default)]
pub struct CommandHistory {
    commands: VecDeque<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn push(&mut self, command: &str) {
        self.commands.push_back(command.to_string());
        while self.commands.len() > HISTORY_LIMIT {
            self.commands.pop_front();
        }
        self.cursor = 0;
    }

    fn current(&self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        return self
            .commands
            .get(self.commands.len() - self.cursor)
            .map(|e| return e.as_str());
    }

    /// Up arrow. Stops at the oldest entry.
    pub fn older(&mut self) -> Option<&str> {
        self.cursor = (self.cursor + 1).min(self.commands.len());
        return self.current();
    }

    /// Down arrow. Returns `None` once back past the newest entry.
    pub fn newer(&mut self) -> Option<&str> {
        self.cursor = self.cursor.saturating_sub(1);
        return self.current();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        return self.commands.len();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        return self.commands.is_empty();
    }
}
