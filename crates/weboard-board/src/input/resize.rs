//! Corner-handle resize controller
//!
//! Dimensions are recomputed on every window pointer-move but only
//! committed on animation frames: each move replaces the pending frame
//! instead of queueing another one, so the dimensions callback fires at most
//! once per refresh no matter how fast pointer events arrive.

use tracing::{debug, trace};

use super::{CaptureKind, CaptureLease, FrameHandle, InputResult, InputSurface, ResizeDirection};
use crate::card::CardId;
use crate::math::{Dimensions, Position};

/// Callback receiving frame-committed dimensions
pub type DimensionsCallback = Box<dyn FnMut(Dimensions)>;

/// Calculate dimensions for a resize handle dragged by `delta`
///
/// Only the axes named by `direction` change; each moving axis is clamped
/// to `min` independently.
pub fn calculate_resize(
    direction: ResizeDirection,
    start: Dimensions,
    delta: Position,
    min: Dimensions,
) -> Dimensions {
    let (horizontal, vertical) = direction.axis_rules();
    Dimensions::new(
        horizontal.apply(start.width, delta.x, min.width),
        vertical.apply(start.height, delta.y, min.height),
    )
}

/// Active resize gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeGesture {
    /// Handle being dragged
    pub direction: ResizeDirection,
    /// Pointer position at gesture start
    pub start_pointer: Position,
    /// Card dimensions at gesture start
    pub start_dimensions: Dimensions,
}

/// Dimensions waiting for their animation frame
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingFrame {
    handle: FrameHandle,
    dimensions: Dimensions,
}

/// Per-card resize state machine
pub struct ResizeController {
    owner: CardId,
    dimensions: Dimensions,
    min_size: Dimensions,
    gesture: Option<ResizeGesture>,
    pending: Option<PendingFrame>,
    lease: Option<CaptureLease>,
    mounted: bool,
    on_dimensions_change: DimensionsCallback,
}

impl ResizeController {
    /// Create an idle controller
    pub fn new(
        owner: CardId,
        initial: Dimensions,
        min_size: Dimensions,
        on_dimensions_change: DimensionsCallback,
    ) -> Self {
        Self {
            owner,
            dimensions: initial.at_least(min_size),
            min_size,
            gesture: None,
            pending: None,
            lease: None,
            mounted: true,
            on_dimensions_change,
        }
    }

    /// Last committed dimensions
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Minimum size enforced by this controller
    #[inline]
    pub fn min_size(&self) -> Dimensions {
        self.min_size
    }

    /// Check if a resize is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Active gesture, if any
    #[inline]
    pub fn gesture(&self) -> Option<&ResizeGesture> {
        self.gesture.as_ref()
    }

    /// Frame handle waiting to commit, if any
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending.map(|pending| pending.handle)
    }

    /// Start a resize from a pointer-down on a handle
    pub fn begin_resize(
        &mut self,
        surface: &mut InputSurface,
        pointer: Position,
        direction: ResizeDirection,
        current: Dimensions,
    ) -> InputResult {
        if !self.mounted {
            return InputResult::Unhandled;
        }

        self.end(surface);

        self.dimensions = current.at_least(self.min_size);
        self.gesture = Some(ResizeGesture {
            direction,
            start_pointer: pointer,
            start_dimensions: self.dimensions,
        });
        surface.set_cursor(self.owner, direction.cursor());
        self.lease = Some(surface.acquire(self.owner, CaptureKind::Resize));
        debug!(card = self.owner, %direction, "resize started");

        InputResult::Captured {
            prevent_default: true,
            stop_propagation: true,
        }
    }

    /// Handle a window pointer-move
    ///
    /// Replaces any pending frame with one carrying the new dimensions.
    pub fn pointer_move(&mut self, surface: &mut InputSurface, pointer: Position) -> InputResult {
        let gesture = match self.gesture {
            Some(gesture) if self.mounted => gesture,
            _ => return InputResult::Unhandled,
        };

        let delta = pointer - gesture.start_pointer;
        let dimensions = calculate_resize(gesture.direction, gesture.start_dimensions, delta, self.min_size);

        if let Some(previous) = self.pending.take() {
            surface.frames_mut().cancel(previous.handle);
        }
        let handle = surface.frames_mut().request(self.owner);
        self.pending = Some(PendingFrame { handle, dimensions });

        InputResult::Handled
    }

    /// Commit the pending dimensions when their frame fires
    ///
    /// Stale handles (superseded, cancelled, or fired after teardown) are
    /// ignored. Returns whether anything was committed.
    pub fn commit_frame(&mut self, handle: FrameHandle) -> bool {
        if !self.mounted {
            return false;
        }
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                self.commit(pending.dimensions);
                true
            }
            _ => false,
        }
    }

    /// Handle a window pointer-up
    ///
    /// Dimensions from the last move that has not reached its frame yet are
    /// committed now, then the frame is cancelled.
    pub fn pointer_up(&mut self, surface: &mut InputSurface) -> InputResult {
        if !self.is_active() {
            return InputResult::Unhandled;
        }
        if let Some(pending) = self.pending.take() {
            surface.frames_mut().cancel(pending.handle);
            self.commit(pending.dimensions);
        }
        self.end(surface);
        InputResult::Handled
    }

    /// End the gesture, dropping any uncommitted frame
    ///
    /// Returns `false` if no gesture was active.
    pub fn end(&mut self, surface: &mut InputSurface) -> bool {
        if let Some(pending) = self.pending.take() {
            surface.frames_mut().cancel(pending.handle);
        }
        if let Some(lease) = self.lease.take() {
            surface.release(lease);
        }
        surface.clear_cursor(self.owner);

        if self.gesture.take().is_none() {
            return false;
        }
        debug!(
            card = self.owner,
            width = self.dimensions.width,
            height = self.dimensions.height,
            "resize ended"
        );
        true
    }

    /// Adopt externally supplied dimensions
    ///
    /// Ignored while a resize is active: the gesture keeps working from its
    /// start snapshot.
    pub fn sync_dimensions(&mut self, dimensions: Dimensions) {
        if !self.is_active() {
            self.dimensions = dimensions.at_least(self.min_size);
        }
    }

    /// Release everything and stop reacting to events
    ///
    /// The card keeps its last committed dimensions.
    pub fn teardown(&mut self, surface: &mut InputSurface) {
        self.end(surface);
        self.mounted = false;
    }

    fn commit(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        trace!(card = self.owner, width = dimensions.width, height = dimensions.height, "resize committed");
        (self.on_dimensions_change)(dimensions);
    }
}

impl std::fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeController")
            .field("owner", &self.owner)
            .field("dimensions", &self.dimensions)
            .field("min_size", &self.min_size)
            .field("gesture", &self.gesture)
            .field("pending", &self.pending)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
