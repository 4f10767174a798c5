//! Glyph sprite sheets. Each scene preloads the sprites it draws by key.

use crate::games::GameKind;
use ratatui::style::Color;

/// A named glyph with its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub key: &'static str,
    pub glyph: char,
    pub color: Color,
}

const BG: Sprite = Sprite {
    key: "bg",
    glyph: '·',
    color: Color::DarkGray,
};
const BASKET: Sprite = Sprite {
    key: "basket",
    glyph: '▒',
    color: Color::Rgb(181, 123, 63),
};
const BASKET_RIM: Sprite = Sprite {
    key: "basket_rim",
    glyph: '▀',
    color: Color::Rgb(222, 170, 100),
};
const APPLE: Sprite = Sprite {
    key: "apple",
    glyph: '●',
    color: Color::Red,
};
const COIN: Sprite = Sprite {
    key: "coin",
    glyph: '◎',
    color: Color::Yellow,
};
const MONEY: Sprite = Sprite {
    key: "money",
    glyph: '$',
    color: Color::LightGreen,
};
const BIRD: Sprite = Sprite {
    key: "bird",
    glyph: '►',
    color: Color::Yellow,
};
const PIPE: Sprite = Sprite {
    key: "pipe",
    glyph: '█',
    color: Color::Green,
};

/// The sprites a scene loaded during preload.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
}

impl SpriteSheet {
    /// Look up a sprite by key. Unknown keys draw as a magenta `?` so a
    /// missing asset is visible rather than fatal.
    pub fn get(&self, key: &str) -> Sprite {
        self.sprites
            .iter()
            .copied()
            .find(|s| s.key == key)
            .unwrap_or(Sprite {
                key: "missing",
                glyph: '?',
                color: Color::Magenta,
            })
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }
}

/// Load the sprite sheet for a scene.
pub fn preload(kind: GameKind) -> SpriteSheet {
    let sprites = match kind {
        GameKind::Fruit => vec![BG, BASKET, BASKET_RIM, APPLE, MONEY],
        GameKind::Coin => vec![BG, BASKET, BASKET_RIM, COIN, MONEY],
        GameKind::Flappy => vec![BG, BIRD, PIPE],
    };
    SpriteSheet { sprites }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preload_has_scene_sprites() {
        let sheet = preload(GameKind::Fruit);
        assert_eq!(sheet.get("apple").glyph, '●');
        assert_eq!(sheet.get("basket").key, "basket");

        let sheet = preload(GameKind::Flappy);
        assert_eq!(sheet.get("pipe").glyph, '█');
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn test_missing_sprite_is_visible() {
        let sheet = preload(GameKind::Flappy);
        assert_eq!(sheet.get("apple").glyph, '?');
    }
}
