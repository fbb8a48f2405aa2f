use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::CursorMove;

pub struct TextArea {}

impl<'a> TextArea {
    fn with_title(title: &str, lines: Vec<String>) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn stdin(server_name: &str) -> tui_textarea::TextArea<'a> {
        return TextArea::with_title(&format!("stdin > {server_name}"), vec![String::new()]);
    }

    /// Stdin box pre-filled with a command recalled from history.
    pub fn stdin_with_value(server_name: &str, value: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea =
            TextArea::with_title(&format!("stdin > {server_name}"), vec![value.to_string()]);
        textarea.move_cursor(CursorMove::End);

        return textarea;
    }

    pub fn config_editor(text: &str) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();

        return TextArea::with_title("Configuration (Ctrl+S to save)", lines);
    }
}
