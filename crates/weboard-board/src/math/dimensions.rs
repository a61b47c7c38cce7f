//! Card dimensions type

use serde::{Deserialize, Serialize};

/// Pixel width and height of a card
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Smallest card a resize gesture may produce unless configured otherwise
    pub const DEFAULT_MIN: Dimensions = Dimensions {
        width: 200.0,
        height: 100.0,
    };

    /// Create new dimensions
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each axis to at least the matching axis of `min`
    #[inline]
    pub fn at_least(self, min: Dimensions) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_at_least() {
        let d = Dimensions::new(50.0, 500.0).at_least(Dimensions::DEFAULT_MIN);
        assert!((d.width - 200.0).abs() < 0.001);
        assert!((d.height - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_dimensions_json_shape() {
        let d: Dimensions = serde_json::from_str(r#"{"width":300,"height":200}"#).unwrap();
        assert_eq!(d, Dimensions::new(300.0, 200.0));
    }
}
