//! Held-key tracking
//!
//! Hosts feed raw key names from their event loop; the session only ever
//! asks whether a direction is held.

use super::InputSource;

/// Held state of the two movement directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a key press. Returns true if the key is a movement key.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Record a key release. Returns true if the key is a movement key.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        match key {
            "ArrowLeft" => self.left = held,
            "ArrowRight" => self.right = held,
            _ => return false,
        }
        true
    }
}

impl InputSource for HeldKeys {
    fn is_left_held(&self) -> bool {
        self.left
    }

    fn is_right_held(&self) -> bool {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_toggle_directions() {
        let mut keys = HeldKeys::default();
        assert!(keys.key_down("ArrowLeft"));
        assert!(keys.is_left_held());
        assert!(!keys.is_right_held());

        assert!(keys.key_down("ArrowRight"));
        assert!(keys.key_up("ArrowLeft"));
        assert!(!keys.is_left_held());
        assert!(keys.is_right_held());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut keys = HeldKeys::default();
        assert!(!keys.key_down("a"));
        assert!(!keys.key_down(" "));
        assert_eq!(keys, HeldKeys::default());
    }

    #[test]
    fn test_clear_releases_all() {
        let mut keys = HeldKeys {
            left: true,
            right: true,
        };
        keys.clear();
        assert_eq!(keys, HeldKeys::default());
    }
}
