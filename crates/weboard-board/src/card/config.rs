//! Card configuration for creation

use super::CardKind;
use crate::input::{DimensionsCallback, PositionCallback};
use crate::math::{Dimensions, Position};

/// Configuration for creating a card
#[derive(Clone, Debug, Default)]
pub struct CardConfig {
    /// Card title shown in the header
    pub title: String,
    /// Hosted app
    pub kind: CardKind,
    /// Initial position (None = auto-cascade)
    pub position: Option<Position>,
    /// Initial size (None = board default)
    pub size: Option<Dimensions>,
    /// Minimum size constraint (None = board minimum)
    pub min_size: Option<Dimensions>,
}

/// Persistence callbacks for one card
///
/// Both default to no-ops, so a card can be mounted before the host wires
/// up persistence.
pub struct CardCallbacks {
    /// Called synchronously on every drag move
    pub on_position_change: PositionCallback,
    /// Called at most once per animation frame during a resize
    pub on_dimensions_change: DimensionsCallback,
}

impl Default for CardCallbacks {
    fn default() -> Self {
        Self {
            on_position_change: Box::new(|_| {}),
            on_dimensions_change: Box::new(|_| {}),
        }
    }
}

impl CardCallbacks {
    /// Replace the position callback
    pub fn on_position_change(mut self, callback: impl FnMut(Position) + 'static) -> Self {
        self.on_position_change = Box::new(callback);
        self
    }

    /// Replace the dimensions callback
    pub fn on_dimensions_change(mut self, callback: impl FnMut(Dimensions) + 'static) -> Self {
        self.on_dimensions_change = Box::new(callback);
        self
    }
}
