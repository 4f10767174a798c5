//! Axis-aligned boxes and sprite hitboxes.

use super::constants::{BASKET_HEIGHT, BASKET_WIDTH};

/// An axis-aligned rectangle in world pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict intersection test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A physics body smaller than the drawn sprite, placed relative to the
/// sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Body {
    /// A body covering the whole sprite.
    pub fn full(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// World-space hitbox for a sprite whose origin sits at `(x, y)`.
    pub fn at(&self, x: f64, y: f64) -> Rect {
        Rect::new(x + self.offset_x, y + self.offset_y, self.width, self.height)
    }
}

/// The basket only catches with a thin strip across its rim.
pub fn basket_body() -> Body {
    let w = BASKET_WIDTH;
    let h = BASKET_HEIGHT;
    Body {
        width: w - w / 4.0,
        height: h / 6.0,
        offset_x: w / 10.0,
        offset_y: h - h / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_basket_body_dimensions() {
        let body = basket_body();
        assert!((body.width - 75.0).abs() < 1e-9);
        assert!((body.height - 100.0 / 6.0).abs() < 1e-9);
        assert!((body.offset_x - 10.0).abs() < 1e-9);
        assert!((body.offset_y - 90.0).abs() < 1e-9);

        let hitbox = body.at(20.0, 400.0);
        assert!((hitbox.x - 30.0).abs() < 1e-9);
        assert!((hitbox.y - 490.0).abs() < 1e-9);
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), (25.0, 40.0));
    }
}
