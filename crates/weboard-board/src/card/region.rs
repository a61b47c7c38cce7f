//! Card region for hit testing

use crate::input::ResizeDirection;
use crate::math::{Position, Rect};

/// Region of a card under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRegion {
    /// Header strip (starts a drag)
    Header,
    /// Hosted app content
    Body,
    /// Corner resize handle
    Resize(ResizeDirection),
}

impl CardRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            CardRegion::Header => "move",
            CardRegion::Body => "default",
            CardRegion::Resize(direction) => direction.cursor(),
        }
    }
}

/// Hit test a card rectangle
///
/// Corner handles win over the header so the top corners stay grabbable.
pub fn hit_test(rect: Rect, pos: Position, header_height: f64, handle_size: f64) -> Option<CardRegion> {
    if !rect.contains(pos) {
        return None;
    }

    if let Some(direction) = hit_test_corners(rect, pos, handle_size) {
        return Some(CardRegion::Resize(direction));
    }

    if pos.y < rect.y + header_height {
        return Some(CardRegion::Header);
    }

    Some(CardRegion::Body)
}

/// Hit test the four corner handles
fn hit_test_corners(rect: Rect, pos: Position, handle_size: f64) -> Option<ResizeDirection> {
    let in_left = pos.x < rect.x + handle_size;
    let in_right = pos.x >= rect.right() - handle_size;
    let in_top = pos.y < rect.y + handle_size;
    let in_bottom = pos.y >= rect.bottom() - handle_size;

    match (in_top, in_bottom, in_left, in_right) {
        (true, _, true, _) => Some(ResizeDirection::NW),
        (true, _, _, true) => Some(ResizeDirection::NE),
        (_, true, true, _) => Some(ResizeDirection::SW),
        (_, true, _, true) => Some(ResizeDirection::SE),
        _ => None,
    }
}
