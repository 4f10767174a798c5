//! Terminal rendering for the menu and the game scenes.

pub mod catch_scene;
pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod playfield;
pub mod sprites;

use crate::config::Config;
use crate::games::{ActiveGame, GameMenu};
use ratatui::{layout::Rect, Frame};
use sprites::SpriteSheet;

/// Smallest area the scenes are laid out for.
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

/// Center a playable area inside the terminal, keeping the field roughly
/// square (terminal cells are about twice as tall as they are wide).
fn game_area(area: Rect) -> Rect {
    let height = area.height.min(30).max(MIN_HEIGHT.min(area.height));
    let width = area.width.min(height * 2 + 26).max(MIN_WIDTH.min(area.width));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn draw_menu(frame: &mut Frame, menu: &GameMenu, config: &Config) {
    let area = game_area(frame.size());
    menu_scene::render_menu(frame, area, menu, config);
}

pub fn draw_game(frame: &mut Frame, game: &ActiveGame, sheet: &SpriteSheet) {
    let area = game_area(frame.size());
    match game {
        ActiveGame::Catch(g) => catch_scene::render_catch(frame, area, g, sheet),
        ActiveGame::Flappy(g) => flappy_scene::render_flappy(frame, area, g, sheet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_area_fits_inside_terminal() {
        for (w, h) in [(200, 60), (80, 24), (40, 10)] {
            let outer = Rect::new(0, 0, w, h);
            let area = game_area(outer);
            assert!(area.width <= w);
            assert!(area.height <= h);
            assert!(area.x + area.width <= w);
            assert!(area.y + area.height <= h);
        }
    }

    #[test]
    fn test_game_area_caps_size() {
        let area = game_area(Rect::new(0, 0, 300, 100));
        assert_eq!(area.height, 30);
        assert_eq!(area.width, 86);
    }
}
