//! Game selection menu state.

use super::GameKind;

/// Cursor over the list of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMenu {
    pub selected: usize,
}

impl GameMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the cursor on `kind`.
    pub fn with_selected(kind: GameKind) -> Self {
        let selected = GameKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        Self { selected }
    }

    pub fn navigate_up(&mut self) {
        let len = GameKind::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn navigate_down(&mut self) {
        self.selected = (self.selected + 1) % GameKind::ALL.len();
    }

    pub fn selected_kind(&self) -> GameKind {
        GameKind::from_index(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut menu = GameMenu::new();
        assert_eq!(menu.selected_kind(), GameKind::Fruit);

        menu.navigate_up();
        assert_eq!(menu.selected_kind(), GameKind::Coin);

        menu.navigate_down();
        menu.navigate_down();
        assert_eq!(menu.selected_kind(), GameKind::Flappy);
    }

    #[test]
    fn test_with_selected() {
        let menu = GameMenu::with_selected(GameKind::Coin);
        assert_eq!(menu.selected, 2);
    }
}
