//! Pointer button decoding

/// Pointer button that initiated a pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, pen contact or primary touch
    Primary,
    /// Middle mouse button
    Auxiliary,
    /// Right mouse button
    Secondary,
    /// Any other button code
    Other(u8),
}

impl PointerButton {
    /// Only the primary button starts gestures
    #[inline]
    pub fn is_primary(self) -> bool {
        self == PointerButton::Primary
    }
}

impl From<u8> for PointerButton {
    /// Decode a DOM `PointerEvent.button` code
    fn from(code: u8) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_codes() {
        assert_eq!(PointerButton::from(0), PointerButton::Primary);
        assert_eq!(PointerButton::from(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from(4), PointerButton::Other(4));
    }

    #[test]
    fn test_only_primary_is_primary() {
        assert!(PointerButton::Primary.is_primary());
        assert!(!PointerButton::Secondary.is_primary());
        assert!(!PointerButton::Other(0).is_primary());
    }
}
