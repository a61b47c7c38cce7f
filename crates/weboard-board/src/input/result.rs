//! Input result type

use serde::Serialize;

/// Result of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A gesture started and took the window listeners
    #[serde(rename_all = "camelCase")]
    Captured {
        /// Host must suppress the browser's default behaviour
        prevent_default: bool,
        /// Host must not let the event reach enclosing handlers
        stop_propagation: bool,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Captured { .. })
    }

    /// Check if a gesture was started
    #[inline]
    pub fn is_captured(&self) -> bool {
        matches!(self, InputResult::Captured { .. })
    }
}
