#[cfg(test)]
#[path = "delimiter_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

const BR_VARIANTS: [&str; 3] = ["<br />", "<br/>", "<br>"];

/// Separator used by the backend between console lines. Older backends send
/// `\r\n`, newer ones send HTML with `<br/>`, so it has to be picked
/// explicitly rather than sniffed from the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LineDelimiter {
    #[default]
    Crlf,
    Br,
    Lf,
}

impl LineDelimiter {
    pub fn parse(text: &str) -> Option<LineDelimiter> {
        return LineDelimiter::iter().find(|e| return e.to_string() == text);
    }

    /// Splits an output blob into lines. A single trailing empty segment left
    /// behind by a terminating delimiter is not counted as a line, so
    /// `"a\r\nb\r\n"` and `"a\r\nb"` both have two lines.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        let mut lines: Vec<String> = match self {
            LineDelimiter::Crlf => text.split("\r\n").map(|e| return e.to_string()).collect(),
            LineDelimiter::Lf => text
                .split('\n')
                .map(|e| return e.trim_end_matches('\r').to_string())
                .collect(),
            LineDelimiter::Br => {
                let mut normalized = text.to_string();
                for variant in BR_VARIANTS {
                    normalized = normalized.replace(variant, "\n");
                }
                normalized
                    .split('\n')
                    .map(|e| return e.to_string())
                    .collect()
            }
        };

        if lines.last().map(|e| return e.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        return lines;
    }
}
