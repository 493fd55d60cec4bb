//! Symbolic key codes accepted by the game

use std::fmt;

/// A keystroke the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Lowercase ASCII letter
    Letter(u8),
    Enter,
    Delete,
}

impl Key {
    /// Parse a symbolic code: a single letter, `"enter"` or `"delete"`
    ///
    /// Matching is ASCII case-insensitive. Anything else yields `None`, which the
    /// game treats as a key to ignore.
    ///
    /// # Examples
    /// ```
    /// use worddd::game::Key;
    ///
    /// assert_eq!(Key::from_code("Q"), Some(Key::Letter(b'q')));
    /// assert_eq!(Key::from_code("enter"), Some(Key::Enter));
    /// assert_eq!(Key::from_code("tab"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("enter") {
            return Some(Self::Enter);
        }
        if code.eq_ignore_ascii_case("delete") {
            return Some(Self::Delete);
        }

        match code.as_bytes() {
            [b] if b.is_ascii_alphabetic() => Some(Self::Letter(b.to_ascii_lowercase())),
            _ => None,
        }
    }

    /// Symbolic code for this key, the inverse of [`Key::from_code`]
    #[must_use]
    pub fn code(self) -> String {
        match self {
            Self::Letter(b) => char::from(b).to_string(),
            Self::Enter => "enter".to_string(),
            Self::Delete => "delete".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&[Key]; 3] = [
    &[
        Key::Letter(b'q'),
        Key::Letter(b'w'),
        Key::Letter(b'e'),
        Key::Letter(b'r'),
        Key::Letter(b't'),
        Key::Letter(b'y'),
        Key::Letter(b'u'),
        Key::Letter(b'i'),
        Key::Letter(b'o'),
        Key::Letter(b'p'),
    ],
    &[
        Key::Letter(b'a'),
        Key::Letter(b's'),
        Key::Letter(b'd'),
        Key::Letter(b'f'),
        Key::Letter(b'g'),
        Key::Letter(b'h'),
        Key::Letter(b'j'),
        Key::Letter(b'k'),
        Key::Letter(b'l'),
    ],
    &[
        Key::Enter,
        Key::Letter(b'z'),
        Key::Letter(b'x'),
        Key::Letter(b'c'),
        Key::Letter(b'v'),
        Key::Letter(b'b'),
        Key::Letter(b'n'),
        Key::Letter(b'm'),
        Key::Delete,
    ],
];
