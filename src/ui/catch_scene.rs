//! UI rendering for Fruit Catcher and Coin Catcher.

use crate::core::scene::{score_text, time_text};
use crate::core::ScenePhase;
use crate::games::catch::{CatchGame, CatchVariant};
use crate::games::GameKind;
use crate::ui::game_common::{
    create_game_layout, info_line, progress_bar, render_forfeit_status_bar,
    render_info_panel_frame, render_results_overlay, render_start_overlay, render_status_bar,
};
use crate::ui::playfield::Playfield;
use crate::ui::sprites::SpriteSheet;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render a catch scene.
pub fn render_catch(frame: &mut Frame, area: Rect, game: &CatchGame, sheet: &SpriteSheet) {
    if let Some(results) = game.results() {
        render_results_overlay(frame, area, &results);
        return;
    }

    let border = match game.variant {
        CatchVariant::Fruit => Color::Red,
        CatchVariant::Coin => Color::Yellow,
    };
    let title = format!(" {} ", game.variant.name());
    let layout = create_game_layout(frame, area, &title, border, 10, 24);

    render_play_area(frame, layout.content, game, sheet);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.phase == ScenePhase::WaitingToStart {
        let kind = match game.variant {
            CatchVariant::Fruit => GameKind::Fruit,
            CatchVariant::Coin => GameKind::Coin,
        };
        render_start_overlay(
            frame,
            layout.content,
            game.variant.name(),
            kind.description(),
            "[Space]",
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &CatchGame, sheet: &SpriteSheet) {
    let mut field = Playfield::new(area, sheet.get("bg"));

    let target_key = match game.variant {
        CatchVariant::Fruit => "apple",
        CatchVariant::Coin => "coin",
    };
    let target_sprite = sheet.get(target_key);
    for target in &game.targets {
        field.fill(target.bounds(), target_sprite);
    }

    field.fill(game.player_bounds(), sheet.get("basket"));
    field.fill(game.player_hitbox(), sheet.get("basket_rim"));

    let money = sheet.get("money");
    for p in &game.emitter.particles {
        field.plot(p.x, p.y, money);
    }

    field.render(frame, area);
}

/// HUD: remaining time and score, plus controls.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &CatchGame) {
    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    let hud = format!("{}    {}", time_text(&game.countdown), score_text(game.score));
    render_status_bar(
        frame,
        area,
        &hud,
        Color::White,
        &[("[←/→]", "Move"), ("[Esc]", "Forfeit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &CatchGame) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let threshold = game.settings.win_threshold;
    let bar_width = (inner.width as usize).saturating_sub(2);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", game.variant.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", game.score.to_string(), Color::White),
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
        Line::from(""),
        info_line("On screen", game.targets.len().to_string(), Color::White),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
