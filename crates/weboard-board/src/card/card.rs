//! Card composing one drag and one resize controller

use super::{hit_test, CardCallbacks, CardId, CardKind, CardRegion};
use crate::input::{
    DragController, FrameHandle, InputResult, InputSurface, PointerButton, ResizeController,
    ResizeDirection,
};
use crate::math::{Dimensions, Position, Rect};

/// A positioned, resizable card on the board
///
/// Position lives in the drag controller and dimensions in the resize
/// controller; the card enforces that at most one of them runs a gesture.
#[derive(Debug)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,
    /// Hosted app
    pub kind: CardKind,
    /// Header title
    pub title: String,
    /// Stacking order (higher = on top)
    pub z_order: u32,
    drag: DragController,
    resize: ResizeController,
}

impl Card {
    /// Create an idle card
    pub fn new(
        id: CardId,
        kind: CardKind,
        title: String,
        position: Position,
        dimensions: Dimensions,
        min_size: Dimensions,
        callbacks: CardCallbacks,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            z_order: 0,
            drag: DragController::new(id, position, callbacks.on_position_change),
            resize: ResizeController::new(id, dimensions, min_size, callbacks.on_dimensions_change),
        }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Position {
        self.drag.position()
    }

    /// Last committed dimensions
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.resize.dimensions()
    }

    /// Minimum size enforced while resizing
    #[inline]
    pub fn min_size(&self) -> Dimensions {
        self.resize.min_size()
    }

    /// Board rectangle covered by the card
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin(self.position(), self.dimensions())
    }

    /// Drag controller
    #[inline]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Resize controller
    #[inline]
    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Check if a resize is in progress
    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    /// Region under `pos`, if the card covers it
    pub fn region_at(&self, pos: Position, header_height: f64, handle_size: f64) -> Option<CardRegion> {
        hit_test(self.rect(), pos, header_height, handle_size)
    }

    /// Start dragging, ending a resize in progress
    pub fn begin_drag(&mut self, surface: &mut InputSurface, pointer: Position, button: PointerButton) -> InputResult {
        if !button.is_primary() {
            return InputResult::Unhandled;
        }
        self.resize.end(surface);
        let current = self.drag.position();
        self.drag.begin_drag(surface, pointer, button, current)
    }

    /// Start resizing, ending a drag in progress
    pub fn begin_resize(
        &mut self,
        surface: &mut InputSurface,
        pointer: Position,
        direction: ResizeDirection,
    ) -> InputResult {
        self.drag.end(surface);
        let current = self.resize.dimensions();
        self.resize.begin_resize(surface, pointer, direction, current)
    }

    /// Route a window pointer-move to the active gesture
    pub fn pointer_move(&mut self, surface: &mut InputSurface, pointer: Position) -> InputResult {
        if self.drag.is_active() {
            self.drag.pointer_move(pointer)
        } else if self.resize.is_active() {
            self.resize.pointer_move(surface, pointer)
        } else {
            InputResult::Unhandled
        }
    }

    /// Route a window pointer-up to the active gesture
    pub fn pointer_up(&mut self, surface: &mut InputSurface) -> InputResult {
        if self.drag.is_active() {
            self.drag.pointer_up(surface)
        } else {
            self.resize.pointer_up(surface)
        }
    }

    /// Commit a fired animation frame
    #[inline]
    pub fn commit_frame(&mut self, handle: FrameHandle) -> bool {
        self.resize.commit_frame(handle)
    }

    /// Adopt an externally loaded position
    pub fn sync_position(&mut self, position: Position) {
        self.drag.sync_position(position);
    }

    /// Adopt externally loaded dimensions
    pub fn sync_dimensions(&mut self, dimensions: Dimensions) {
        self.resize.sync_dimensions(dimensions);
    }

    /// Release listeners, cursor and frames held by either controller
    pub fn teardown(&mut self, surface: &mut InputSurface) {
        self.drag.teardown(surface);
        self.resize.teardown(surface);
    }
}
