use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::ConnectionState;
use super::Palette;

/// Placeholder shown in the console area while there is nothing to display.
pub struct Loading {
    text: String,
}

impl Loading {
    pub fn new(connection: ConnectionState, server_count: usize) -> Loading {
        let text = match connection {
            ConnectionState::Connecting => "Connecting...".to_string(),
            ConnectionState::Degraded => {
                "Lost connection to the backend, waiting for it to come back...".to_string()
            }
            ConnectionState::Connected if server_count == 0 => {
                "No servers configured on the backend.".to_string()
            }
            ConnectionState::Connected => "Loading...".to_string(),
        };

        return Loading { text };
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, palette: &Palette) {
        frame.render_widget(
            Paragraph::new(self.text())
                .style(Style::default().fg(palette.text_muted))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(palette.border))
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Center),
            rect,
        );
    }
}
