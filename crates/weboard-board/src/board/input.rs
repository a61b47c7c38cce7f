//! Pointer event routing and frame ticks

use tracing::{trace, warn};

use super::Board;
use crate::card::{CardId, CardRegion};
use crate::error::{GestureError, Result};
use crate::input::{InputResult, PointerButton, ResizeDirection};
use crate::math::Position;

impl Board {
    /// Handle a pointer-down on the board
    ///
    /// The topmost card under the pointer is focused; its header starts a
    /// drag and its corner handles start a resize.
    pub fn handle_pointer_down(&mut self, pos: Position, button: PointerButton) -> InputResult {
        if !button.is_primary() {
            return InputResult::Unhandled;
        }

        let (id, region) = match self.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };
        self.focus_card(id);

        let card = match self.cards.get_mut(&id) {
            Some(card) => card,
            None => return InputResult::Unhandled,
        };
        match region {
            CardRegion::Header => card.begin_drag(&mut self.surface, pos, button),
            CardRegion::Resize(direction) => card.begin_resize(&mut self.surface, pos, direction),
            CardRegion::Body => InputResult::Handled,
        }
    }

    /// Start a drag on a specific card
    pub fn begin_drag(&mut self, id: CardId, pos: Position, button: PointerButton) -> Result<InputResult> {
        let card = self.cards.get_mut(&id).ok_or(GestureError::UnknownCard(id))?;
        Ok(card.begin_drag(&mut self.surface, pos, button))
    }

    /// Start a resize on a specific card from a direction tag
    ///
    /// Fails fast on anything but the eight compass tags.
    pub fn begin_resize(&mut self, id: CardId, direction: &str, pos: Position) -> Result<InputResult> {
        let direction: ResizeDirection = direction.parse().inspect_err(|err| {
            warn!(card = id, %err, "rejected resize direction");
        })?;
        let card = self.cards.get_mut(&id).ok_or(GestureError::UnknownCard(id))?;
        Ok(card.begin_resize(&mut self.surface, pos, direction))
    }

    /// Handle a window-level pointer-move
    pub fn handle_pointer_move(&mut self, pos: Position) -> InputResult {
        let mut result = InputResult::Unhandled;
        for id in self.surface.capturing_cards() {
            if let Some(card) = self.cards.get_mut(&id) {
                if card.pointer_move(&mut self.surface, pos).is_handled() {
                    result = InputResult::Handled;
                }
            }
        }
        result
    }

    /// Handle a window-level pointer-up
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let mut result = InputResult::Unhandled;
        for id in self.surface.capturing_cards() {
            if let Some(card) = self.cards.get_mut(&id) {
                if card.pointer_up(&mut self.surface).is_handled() {
                    result = InputResult::Handled;
                }
            }
        }
        result
    }

    /// Run one display refresh tick
    ///
    /// Drains the frame scheduler and commits each due resize. Frames owned
    /// by unmounted cards are dropped. Returns the number of commits.
    pub fn tick_frame(&mut self) -> usize {
        let due = self.surface.frames_mut().drain();
        let mut committed = 0;
        for (handle, owner) in due {
            if let Some(card) = self.cards.get_mut(&owner) {
                if card.commit_frame(handle) {
                    committed += 1;
                }
            }
        }
        if committed > 0 {
            trace!(committed, "frame committed");
        }
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardCallbacks, CardConfig};
    use crate::math::Dimensions;

    fn create_test_board() -> (Board, CardId) {
        let mut board = Board::default();
        let id = board.create_card(
            CardConfig {
                title: "Test Card".to_string(),
                position: Some(Position::new(100.0, 100.0)),
                size: Some(Dimensions::new(300.0, 200.0)),
                ..Default::default()
            },
            CardCallbacks::default(),
        );
        (board, id)
    }

    #[test]
    fn test_pointer_down_on_header_starts_drag() {
        let (mut board, id) = create_test_board();

        let result = board.handle_pointer_down(Position::new(200.0, 110.0), PointerButton::Primary);

        assert!(result.is_captured());
        assert!(board.card(id).unwrap().is_dragging());
    }

    #[test]
    fn test_pointer_down_on_handle_starts_resize() {
        let (mut board, id) = create_test_board();

        let result = board.handle_pointer_down(Position::new(395.0, 295.0), PointerButton::Primary);

        assert_eq!(
            result,
            InputResult::Captured {
                prevent_default: true,
                stop_propagation: true
            }
        );
        assert!(board.card(id).unwrap().is_resizing());
        assert_eq!(board.cursor(), Some("se-resize"));
    }

    #[test]
    fn test_pointer_down_on_body_only_focuses() {
        let (mut board, id) = create_test_board();

        let result = board.handle_pointer_down(Position::new(200.0, 200.0), PointerButton::Primary);

        assert_eq!(result, InputResult::Handled);
        assert!(!board.card(id).unwrap().is_dragging());
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_pointer_down_on_empty_area_unhandled() {
        let (mut board, _) = create_test_board();

        let result = board.handle_pointer_down(Position::new(10.0, 10.0), PointerButton::Primary);

        assert_eq!(result, InputResult::Unhandled);
    }

    #[test]
    fn test_pointer_down_secondary_unhandled() {
        let (mut board, _) = create_test_board();

        let result = board.handle_pointer_down(Position::new(200.0, 110.0), PointerButton::Secondary);

        assert_eq!(result, InputResult::Unhandled);
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_pointer_up_without_gesture_unhandled() {
        let (mut board, _) = create_test_board();

        assert_eq!(board.handle_pointer_up(), InputResult::Unhandled);
        assert_eq!(board.handle_pointer_move(Position::ZERO), InputResult::Unhandled);
    }

    #[test]
    fn test_begin_resize_directions() {
        for tag in ["n", "s", "e", "w", "ne", "nw", "se", "sw"] {
            let (mut board, id) = create_test_board();

            let result = board.begin_resize(id, tag, Position::new(250.0, 250.0)).unwrap();
            assert!(result.is_captured(), "Failed to start resize for direction: {}", tag);
            assert_eq!(board.cursor(), Some(format!("{tag}-resize").as_str()));
            board.handle_pointer_up();
        }
    }

    #[test]
    fn test_invalid_resize_direction_fails_fast() {
        let (mut board, id) = create_test_board();

        let err = board.begin_resize(id, "invalid", Position::ZERO).unwrap_err();

        assert!(matches!(err, GestureError::InvalidDirection(ref tag) if tag == "invalid"));
        assert!(!board.is_capturing());
    }

    #[test]
    fn test_begin_on_unknown_card() {
        let (mut board, _) = create_test_board();

        assert!(matches!(
            board.begin_drag(99, Position::ZERO, PointerButton::Primary),
            Err(GestureError::UnknownCard(99))
        ));
        assert!(matches!(
            board.begin_resize(99, "se", Position::ZERO),
            Err(GestureError::UnknownCard(99))
        ));
    }

    #[test]
    fn test_tick_without_frames() {
        let (mut board, _) = create_test_board();
        assert_eq!(board.tick_frame(), 0);
    }
}
