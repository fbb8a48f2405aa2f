use std::io;
use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::ConnectionState;
use crate::domain::models::Event;
use crate::domain::models::LineDelimiter;
use crate::domain::models::Loading;
use crate::domain::models::Page;
use crate::domain::models::Palette;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Themes;

const ROSTER_WIDTH: u16 = 32;

fn block<'a>(title: &str, palette: &Palette, focused: bool) -> Block<'a> {
    let border_color = if focused {
        palette.highlight
    } else {
        palette.border
    };

    return Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(border_color))
        .title(title.to_string())
        .padding(Padding::new(1, 1, 0, 0));
}

fn render_roster<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = &app_state.themes.palette;
    let items = app_state
        .roster
        .entries()
        .iter()
        .map(|entry| {
            let color = if entry.inactive {
                palette.text_muted
            } else {
                palette.text
            };
            return ListItem::new(entry.title.to_string()).style(Style::default().fg(color));
        })
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    if !app_state.roster.is_empty() {
        state.select(Some(app_state.selected));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(block("Servers", palette, false))
            .highlight_style(
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> "),
        rect,
        &mut state,
    );
}

fn render_console<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let palette = app_state.themes.palette;
    let connection = app_state.connection;
    let server_count = app_state.roster.len();
    let selected = app_state.selected;

    let entry = match app_state.roster.get_index_mut(selected) {
        Some(entry) => entry,
        None => {
            Loading::new(connection, server_count).render(frame, rect, &palette);
            return;
        }
    };

    let lines = entry
        .console
        .lines()
        .iter()
        .map(|line| return Line::from(line.as_str()))
        .collect::<Vec<Line>>();

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(palette.text))
            .block(block(&entry.title, &palette, true))
            .scroll((entry.console.scroll.position, 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut entry.console.scroll.scrollbar_state,
    );
}

fn render_themes<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = &app_state.themes.palette;
    let active = app_state.themes.state.theme_name.as_deref();

    let items = app_state
        .themes
        .available
        .iter()
        .map(|name| {
            if Some(name.as_str()) == active {
                return ListItem::new(format!("{name} (active)"))
                    .style(Style::default().fg(palette.success));
            }
            return ListItem::new(name.to_string()).style(Style::default().fg(palette.text));
        })
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    if !app_state.themes.available.is_empty() {
        state.select(Some(app_state.themes.selected));
    }

    frame.render_stateful_widget(
        List::new(items)
            .block(block("Themes (Enter to apply)", palette, true))
            .highlight_style(
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> "),
        rect,
        &mut state,
    );
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let palette = &app_state.themes.palette;
    let connection_color = match app_state.connection {
        ConnectionState::Connected => palette.success,
        ConnectionState::Connecting => palette.warning,
        ConnectionState::Degraded => palette.danger,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app_state.connection),
            Style::default()
                .fg(connection_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("| {} servers | F1 Servers  F2 Config  F3 Themes ", app_state.roster.len()),
            Style::default().fg(palette.text_muted),
        ),
    ];
    if let Some(banner) = &app_state.banner {
        let color = if app_state.terminate_armed {
            palette.warning
        } else {
            palette.danger
        };
        spans.push(Span::styled(format!("| {banner}"), Style::default().fg(color)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background)),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    events: &mut EventsService,
    tx: mpsc::UnboundedSender<Action>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
                .split(frame.size());

            match app_state.page {
                Page::Servers => {
                    let body = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints(vec![Constraint::Min(1), Constraint::Length(3)])
                        .split(layout[0]);
                    let panes = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints(vec![Constraint::Length(ROSTER_WIDTH), Constraint::Min(1)])
                        .split(body[0]);

                    if panes[1].width != app_state.last_known_width
                        || panes[1].height != app_state.last_known_height
                    {
                        app_state.set_rect(panes[1]);
                    }

                    render_roster(frame, panes[0], app_state);
                    render_console(frame, panes[1], app_state);
                    frame.render_widget(app_state.stdin.widget(), body[1]);
                }
                Page::Config => {
                    frame.render_widget(app_state.config_editor.textarea.widget(), layout[0]);
                }
                Page::Themes => {
                    render_themes(frame, layout[0], app_state);
                }
            }

            render_status(frame, layout[1], app_state);
        })?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx).await? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let delimiter = match LineDelimiter::parse(&Config::get(ConfigKey::LineDelimiter)) {
        Some(delimiter) => delimiter,
        None => bail!(format!(
            "Unknown line delimiter {}",
            Config::get(ConfigKey::LineDelimiter)
        )),
    };
    let specialization_interval =
        Duration::from_millis(Config::get(ConfigKey::SpecializationInterval).parse::<u64>()?);
    let themes = Themes::load(path::PathBuf::from(Config::get(ConfigKey::StateFile))).await?;

    let mut app_state = AppState::new(delimiter, themes);
    let mut events = EventsService::new(rx, specialization_interval);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, &mut events, tx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
