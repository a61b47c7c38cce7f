//! Board position type for card origins and pointer coordinates

use serde::{Deserialize, Serialize};

/// Pixel offset in board coordinates
///
/// Used both for a card's top-left corner and for pointer positions,
/// so that `pointer - origin` yields the drag anchor directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Board origin
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    /// Create a new position
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Position;
    #[inline]
    fn sub(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }
}
