#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

use super::markup;
use super::Scroll;
use crate::domain::models::LineDelimiter;

pub const STARTING_PLACEHOLDER: &str = "Starting server...";

/// Lines kept per console. Older lines are dropped from the front so the
/// scroll offset always fits the `u16` the renderer takes.
pub const CONSOLE_LINE_LIMIT: usize = 10_000;

/// Rendered console output of one server.
///
/// `watermark` is the number of snapshot lines already shown. Snapshots always
/// carry the whole (tail of the) output, so only lines at or past the watermark
/// are new. It never decreases, even when the panel is cleared.
#[derive(Default)]
pub struct Console {
    lines: Vec<String>,
    watermark: usize,
    pub scroll: Scroll,
}

impl Console {
    pub fn lines(&self) -> &[String] {
        return &self.lines;
    }

    #[cfg(test)]
    pub fn watermark(&self) -> usize {
        return self.watermark;
    }

    /// Appends the part of a full snapshot that hasn't been shown yet.
    /// Returns the number of lines added.
    pub fn append_snapshot(&mut self, output: &str, delimiter: LineDelimiter) -> usize {
        let lines = delimiter.split(output);
        if lines.len() <= self.watermark {
            return 0;
        }

        let appended = self.append_lines(&lines[self.watermark..]);
        self.watermark = lines.len();

        return appended;
    }

    /// Appends a pushed delta. Deltas are always new output.
    pub fn append_delta(&mut self, output: &str, delimiter: LineDelimiter) -> usize {
        return self.append_lines(&delimiter.split(output));
    }

    /// Replaces everything on screen with a single notice.
    pub fn show_placeholder(&mut self, text: &str) {
        self.lines = vec![text.to_string()];
        self.sync_scroll(true);
    }

    pub fn set_viewport(&mut self, viewport_length: u16) {
        let follow = self.scroll.is_at_bottom();
        self.scroll.set_state(self.line_count(), viewport_length);
        if follow {
            self.scroll.last();
        }
    }

    fn line_count(&self) -> u16 {
        return self.lines.len().min(u16::MAX as usize) as u16;
    }

    fn append_lines(&mut self, lines: &[String]) -> usize {
        let follow = self.scroll.is_at_bottom();

        let before = self.lines.len();
        self.lines.extend(
            lines
                .iter()
                .map(|line| return markup::to_plain_text(line))
                .filter(|line| return !line.trim().is_empty()),
        );
        let appended = self.lines.len() - before;

        if self.lines.len() > CONSOLE_LINE_LIMIT {
            let dropped = self.lines.len() - CONSOLE_LINE_LIMIT;
            self.lines.drain(..dropped);
            self.scroll.position = self
                .scroll
                .position
                .saturating_sub(dropped.min(u16::MAX as usize) as u16);
        }

        if appended > 0 {
            self.sync_scroll(follow);
        }

        return appended;
    }

    fn sync_scroll(&mut self, follow: bool) {
        let viewport_length = self.scroll.viewport_length();
        self.scroll.set_state(self.line_count(), viewport_length);
        if follow {
            self.scroll.last();
        }
    }
}
