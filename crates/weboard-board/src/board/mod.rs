//! Board engine coordinating cards and input
//!
//! This module is split into focused submodules:
//! - `cards`: Card lifecycle, focus and external sync
//! - `input`: Pointer event routing and frame ticks
//! - `layout`: Snapshot export and restore

mod cards;
mod input;
mod layout;

use std::collections::BTreeMap;

use crate::card::{Card, CardId};
use crate::config::BoardConfig;
use crate::input::InputSurface;

/// Board engine coordinating all cards
///
/// This is the main entry point for board operations, managing:
/// - Cards (mount, unmount, focus, z-order)
/// - Input surface (window listeners, cursor override, animation frames)
/// - Routing of pointer events to the card holding a gesture
pub struct Board {
    /// Board-wide tunables
    pub(crate) config: BoardConfig,
    /// Mounted cards by ID
    pub(crate) cards: BTreeMap<CardId, Card>,
    /// Window-level input resources
    pub(crate) surface: InputSurface,
    /// Next card ID
    pub(crate) next_id: CardId,
    /// Next z-order value
    pub(crate) next_z: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cards: BTreeMap::new(),
            surface: InputSurface::new(),
            next_id: 1,
            next_z: 1,
        }
    }

    /// Board configuration
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Window-level input resources
    #[inline]
    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }

    /// Body cursor override requested by an active resize
    #[inline]
    pub fn cursor(&self) -> Option<&'static str> {
        self.surface.cursor()
    }

    /// Check if any card holds a gesture
    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.surface.listener_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardCallbacks, CardConfig};
    use crate::math::{Dimensions, Position};

    #[test]
    fn test_board_starts_empty() {
        let board = Board::default();

        assert_eq!(board.card_count(), 0);
        assert!(!board.is_capturing());
        assert_eq!(board.cursor(), None);
    }

    #[test]
    fn test_board_uses_config_defaults() {
        let config = BoardConfig {
            default_card_size: Dimensions::new(320.0, 240.0),
            ..Default::default()
        };
        let mut board = Board::new(config);

        let id = board.create_card(
            CardConfig {
                position: Some(Position::new(0.0, 0.0)),
                ..Default::default()
            },
            CardCallbacks::default(),
        );

        assert_eq!(board.card(id).unwrap().dimensions(), Dimensions::new(320.0, 240.0));
    }
}
