//! UI rendering for Flappy Dodger.

use crate::core::constants::{BIRD_HEIGHT, BIRD_WIDTH, BIRD_X};
use crate::core::scene::{score_text, time_text};
use crate::core::ScenePhase;
use crate::games::flappy::FlappyGame;
use crate::games::GameKind;
use crate::ui::game_common::{
    create_game_layout, info_line, progress_bar, render_forfeit_status_bar,
    render_info_panel_frame, render_results_overlay, render_start_overlay, render_status_bar,
};
use crate::ui::playfield::Playfield;
use crate::ui::sprites::{Sprite, SpriteSheet};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Flappy Dodger scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame, sheet: &SpriteSheet) {
    // Results overlay takes priority
    if let Some(results) = game.results() {
        render_results_overlay(frame, area, &results);
        return;
    }

    let title = format!(" {} ", FlappyGame::NAME);
    let layout = create_game_layout(frame, area, &title, Color::Cyan, 10, 24);

    render_play_area(frame, layout.content, game, sheet);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.phase == ScenePhase::WaitingToStart {
        render_start_overlay(
            frame,
            layout.content,
            FlappyGame::NAME,
            GameKind::Flappy.description(),
            "[Space]",
        );
    }
}

/// Render the play area with bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame, sheet: &SpriteSheet) {
    let mut field = Playfield::new(area, sheet.get("bg"));

    let pipe = sheet.get("pipe");
    for p in &game.pipes {
        for column in p.columns() {
            if column.height > 0.0 {
                field.fill(column, pipe);
            }
        }
    }

    let bird = sheet.get("bird");
    let glyph = if game.bird_vy < -100.0 {
        '▲' // Flapping up
    } else if game.bird_vy > 250.0 {
        '▼' // Falling fast
    } else {
        bird.glyph
    };
    field.plot(
        BIRD_X + BIRD_WIDTH / 2.0,
        game.bird_y + BIRD_HEIGHT / 2.0,
        Sprite { glyph, ..bird },
    );

    field.render(frame, area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    let hud = format!("{}    {}", time_text(&game.countdown), score_text(game.score));
    render_status_bar(
        frame,
        area,
        &hud,
        Color::Green,
        &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Forfeit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let threshold = game.settings.win_threshold;
    let bar_width = (inner.width as usize).saturating_sub(2);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", FlappyGame::NAME),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Pipes", game.score.to_string(), Color::White),
        info_line("Goal", threshold.to_string(), Color::Yellow),
        info_line(
            "Time",
            format!("{}s", game.countdown.display_seconds()),
            Color::Cyan,
        ),
        Line::from(""),
        Line::from(Span::styled(" Goal:", Style::default().fg(Color::DarkGray))),
        progress_bar(game.score as f64 / threshold as f64, bar_width, Color::Green),
        Line::from(Span::styled(" Time:", Style::default().fg(Color::DarkGray))),
        progress_bar(1.0 - game.countdown.progress(), bar_width, Color::Cyan),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
