//! Pointer gesture handling
//!
//! Provides the drag and resize state machines and the shared window-level
//! resources they acquire while a gesture runs.

mod direction;
mod drag;
mod frame;
mod pointer;
mod resize;
mod result;
mod surface;

pub use direction::{AxisRule, ResizeDirection};
pub use drag::{DragController, DragGesture, PositionCallback};
pub use frame::{FrameHandle, FrameScheduler};
pub use pointer::PointerButton;
pub use resize::{calculate_resize, DimensionsCallback, ResizeController, ResizeGesture};
pub use result::InputResult;
pub use surface::{CaptureKind, CaptureLease, InputSurface};
