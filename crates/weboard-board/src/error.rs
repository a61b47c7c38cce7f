//! Error type for board and gesture operations

use thiserror::Error;

use crate::card::CardId;

/// Errors surfaced by fallible board operations
///
/// Late or redundant pointer events are never errors; they are absorbed by
/// the controllers. Only programming errors and malformed external input
/// end up here.
#[derive(Debug, Error)]
pub enum GestureError {
    /// Resize direction tag outside the eight compass directions
    #[error("invalid resize direction `{0}` (expected one of n, s, e, w, ne, nw, se, sw)")]
    InvalidDirection(String),

    /// Card kind tag not known to the board
    #[error("unknown card kind `{0}`")]
    UnknownKind(String),

    /// No card with this id is mounted
    #[error("no card with id {0}")]
    UnknownCard(CardId),

    /// Board configuration could not be parsed
    #[error("invalid board config: {0}")]
    Config(#[source] serde_json::Error),

    /// Layout snapshot could not be parsed
    #[error("invalid board snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// Layout snapshot parsed but cannot be restored
    #[error("rejected board snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result alias for board operations
pub type Result<T> = std::result::Result<T, GestureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_direction_message() {
        let err = GestureError::InvalidDirection("up".to_string());
        assert!(err.to_string().contains("`up`"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GestureError::Config(source);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_snapshot_message() {
        let err = GestureError::InvalidSnapshot("duplicate card id 3".to_string());
        assert_eq!(err.to_string(), "rejected board snapshot: duplicate card id 3");
    }
}
