//! Board configuration

use serde::{Deserialize, Serialize};

use crate::error::{GestureError, Result};
use crate::math::Dimensions;

/// Tunables shared by every card on a board
///
/// Parsed from the host's JSON settings; missing fields fall back to the
/// defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Lower bound for resize gestures
    pub min_card_size: Dimensions,
    /// Size of a card created without an explicit size
    pub default_card_size: Dimensions,
    /// Height of the header strip that starts a drag
    pub header_height: f64,
    /// Edge length of the square corner resize handles
    pub handle_size: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_card_size: Dimensions::DEFAULT_MIN,
            default_card_size: Dimensions::new(300.0, 200.0),
            header_height: 40.0,
            handle_size: 16.0,
        }
    }
}

impl BoardConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GestureError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.min_card_size, Dimensions::new(200.0, 100.0));
        assert!((config.header_height - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_config_partial_json() {
        let config = BoardConfig::from_json(r#"{"headerHeight": 32, "minCardSize": {"width": 120, "height": 80}}"#)
            .unwrap();
        assert!((config.header_height - 32.0).abs() < 0.001);
        assert_eq!(config.min_card_size, Dimensions::new(120.0, 80.0));
        assert!((config.handle_size - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_config_empty_json_is_default() {
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_config_malformed_json() {
        let err = BoardConfig::from_json("{\"headerHeight\": \"tall\"}").unwrap_err();
        assert!(matches!(err, GestureError::Config(_)));
    }
}
