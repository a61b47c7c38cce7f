//! Axis-aligned rectangle type

use super::{Dimensions, Position};

/// Axis-aligned rectangle covering a card on the board
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create from origin and dimensions
    #[inline]
    pub fn from_origin(origin: Position, size: Dimensions) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect::from_origin(Position::new(100.0, 100.0), Dimensions::new(300.0, 200.0));
        assert!(r.contains(Position::new(100.0, 100.0)));
        assert!(r.contains(Position::new(399.0, 299.0)));
        assert!(!r.contains(Position::new(400.0, 150.0)));
        assert!(!r.contains(Position::new(150.0, 99.0)));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!((r.right() - 40.0).abs() < 0.001);
        assert!((r.bottom() - 60.0).abs() < 0.001);
    }
}
