//! Drag-to-move controller
//!
//! Tracks a pointer-down on a card header through window-level moves until
//! pointer-up, turning pointer positions into card positions with a fixed
//! anchor. Every intermediate position is reported synchronously.

use tracing::{debug, trace};

use super::{CaptureKind, CaptureLease, InputResult, InputSurface, PointerButton};
use crate::card::CardId;
use crate::math::Position;

/// Callback receiving every position produced by a drag
pub type PositionCallback = Box<dyn FnMut(Position)>;

/// Active drag gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    /// Offset from card origin to pointer, fixed at gesture start
    pub anchor: Position,
}

/// Per-card drag state machine
pub struct DragController {
    owner: CardId,
    position: Position,
    gesture: Option<DragGesture>,
    lease: Option<CaptureLease>,
    mounted: bool,
    on_position_change: PositionCallback,
}

impl DragController {
    /// Create an idle controller at `initial`
    pub fn new(owner: CardId, initial: Position, on_position_change: PositionCallback) -> Self {
        Self {
            owner,
            position: initial,
            gesture: None,
            lease: None,
            mounted: true,
            on_position_change,
        }
    }

    /// Current local position
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Anchor of the active gesture
    #[inline]
    pub fn anchor(&self) -> Option<Position> {
        self.gesture.map(|gesture| gesture.anchor)
    }

    /// Start a drag from a pointer-down at `pointer`
    ///
    /// `current` is the card position the caller renders; the anchor is the
    /// pointer's offset from it. Non-primary buttons are ignored.
    pub fn begin_drag(
        &mut self,
        surface: &mut InputSurface,
        pointer: Position,
        button: PointerButton,
        current: Position,
    ) -> InputResult {
        if !self.mounted || !button.is_primary() {
            return InputResult::Unhandled;
        }

        if let Some(lease) = self.lease.take() {
            surface.release(lease);
        }

        let anchor = pointer - current;
        self.position = current;
        self.gesture = Some(DragGesture { anchor });
        self.lease = Some(surface.acquire(self.owner, CaptureKind::Drag));
        debug!(card = self.owner, anchor_x = anchor.x, anchor_y = anchor.y, "drag started");

        InputResult::Captured {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    /// Handle a window pointer-move
    pub fn pointer_move(&mut self, pointer: Position) -> InputResult {
        let gesture = match self.gesture {
            Some(gesture) if self.mounted => gesture,
            _ => return InputResult::Unhandled,
        };

        self.position = pointer - gesture.anchor;
        trace!(card = self.owner, x = self.position.x, y = self.position.y, "drag moved");
        (self.on_position_change)(self.position);
        InputResult::Handled
    }

    /// Handle a window pointer-up
    pub fn pointer_up(&mut self, surface: &mut InputSurface) -> InputResult {
        if self.end(surface) {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// End the gesture and release the window listeners
    ///
    /// Returns `false` if no gesture was active.
    pub fn end(&mut self, surface: &mut InputSurface) -> bool {
        if let Some(lease) = self.lease.take() {
            surface.release(lease);
        }
        if self.gesture.take().is_none() {
            return false;
        }
        debug!(card = self.owner, x = self.position.x, y = self.position.y, "drag ended");
        true
    }

    /// Adopt an externally supplied position
    ///
    /// Ignored while a drag is active; the gesture owns the position until
    /// it ends.
    pub fn sync_position(&mut self, position: Position) {
        if !self.is_active() {
            self.position = position;
        }
    }

    /// Release everything and stop reacting to events
    pub fn teardown(&mut self, surface: &mut InputSurface) {
        self.end(surface);
        self.mounted = false;
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("owner", &self.owner)
            .field("position", &self.position)
            .field("gesture", &self.gesture)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
