// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracks the numeric key held while pointer events happen.
//!
//! Key-down of `"1"` through `"9"` records the digit; any key-up clears it.
//! Other keys leave the current digit untouched on key-down.

/// The digit key (1–9) currently held, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    digit: Option<u8>,
}

impl KeyState {
    /// Handles a key-down with the platform key name (e.g. `"7"`, `"Shift"`).
    pub fn key_down(&mut self, key: &str) {
        if let Some(digit) = parse_digit(key) {
            self.digit = Some(digit);
        }
    }

    /// Handles any key-up.
    pub fn key_up(&mut self) {
        self.digit = None;
    }

    /// The held digit.
    #[must_use]
    pub fn digit(&self) -> Option<u8> {
        self.digit
    }
}

fn parse_digit(key: &str) -> Option<u8> {
    key.parse::<u8>().ok().filter(|d| (1..=9).contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_one_to_nine_are_tracked() {
        let mut keys = KeyState::default();
        keys.key_down("4");
        assert_eq!(keys.digit(), Some(4));
        keys.key_down("9");
        assert_eq!(keys.digit(), Some(9));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut keys = KeyState::default();
        for key in ["0", "10", "a", "Shift", ""] {
            keys.key_down(key);
        }
        assert_eq!(keys.digit(), None);

        keys.key_down("2");
        keys.key_down("Control");
        assert_eq!(keys.digit(), Some(2));
    }

    #[test]
    fn any_key_up_clears() {
        let mut keys = KeyState::default();
        keys.key_down("3");
        keys.key_up();
        assert_eq!(keys.digit(), None);
    }
}
