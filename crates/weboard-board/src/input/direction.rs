//! Resize directions and their per-axis rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// How one axis responds to pointer movement during a resize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRule {
    /// Size grows with positive delta (east edge, south edge)
    Increase,
    /// Size grows with negative delta (west edge, north edge)
    Decrease,
    /// Axis is not affected by this handle
    Unchanged,
}

impl AxisRule {
    /// Apply the rule to one axis, clamping to `min` when the axis moves
    #[inline]
    pub fn apply(self, start: f64, delta: f64, min: f64) -> f64 {
        match self {
            AxisRule::Increase => (start + delta).max(min),
            AxisRule::Decrease => (start - delta).max(min),
            AxisRule::Unchanged => start,
        }
    }
}

/// Compass direction of a resize handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    /// Every direction, in tag order
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    /// `(horizontal, vertical)` rule pair for this handle
    pub fn axis_rules(self) -> (AxisRule, AxisRule) {
        use AxisRule::{Decrease, Increase, Unchanged};

        match self {
            ResizeDirection::N => (Unchanged, Decrease),
            ResizeDirection::S => (Unchanged, Increase),
            ResizeDirection::E => (Increase, Unchanged),
            ResizeDirection::W => (Decrease, Unchanged),
            ResizeDirection::NE => (Increase, Decrease),
            ResizeDirection::NW => (Decrease, Decrease),
            ResizeDirection::SE => (Increase, Increase),
            ResizeDirection::SW => (Decrease, Increase),
        }
    }

    /// Short tag as used by the host (`"nw"`, `"se"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::N => "n",
            ResizeDirection::S => "s",
            ResizeDirection::E => "e",
            ResizeDirection::W => "w",
            ResizeDirection::NE => "ne",
            ResizeDirection::NW => "nw",
            ResizeDirection::SE => "se",
            ResizeDirection::SW => "sw",
        }
    }

    /// CSS cursor shown on the document body while resizing
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::N => "n-resize",
            ResizeDirection::S => "s-resize",
            ResizeDirection::E => "e-resize",
            ResizeDirection::W => "w-resize",
            ResizeDirection::NE => "ne-resize",
            ResizeDirection::NW => "nw-resize",
            ResizeDirection::SE => "se-resize",
            ResizeDirection::SW => "sw-resize",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = GestureError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ResizeDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == tag)
            .ok_or_else(|| GestureError::InvalidDirection(tag.to_string()))
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
