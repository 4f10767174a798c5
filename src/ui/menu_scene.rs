//! Game selection screen.

use crate::config::Config;
use crate::games::{GameKind, GameMenu};
use crate::ui::game_common::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &GameMenu, config: &Config) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pick a game",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let mut lines = Vec::new();
    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(kind.name(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            kind.description(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "{}s rounds · score {} to win",
            config.round_seconds, config.win_threshold
        ),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    render_status_bar(
        frame,
        chunks[2],
        "",
        Color::White,
        &[("[↑/↓]", "Choose"), ("[Enter]", "Play"), ("[Q]", "Quit")],
    );
}
