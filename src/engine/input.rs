//! Player input and operation outcomes

/// A key press the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ASCII letter in either case
    Letter(char),
    /// Remove the last typed letter
    Delete,
    /// Score the current row
    Submit,
}

impl Key {
    /// Map a key name to a `Key`
    ///
    /// `"Backspace"` (or `"Delete"`) and `"Enter"` are the control keys; any
    /// single ASCII letter is a letter key. Everything else (digits, `"Shift"`,
    /// `"F1"`, multi-letter strings) is not a game key.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::engine::Key;
    ///
    /// assert_eq!(Key::parse("S"), Some(Key::Letter('S')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Submit));
    /// assert_eq!(Key::parse("Tab"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Backspace" | "Delete" => Some(Self::Delete),
            "Enter" => Some(Self::Submit),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Letter key for an ASCII letter
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c))
        } else {
            None
        }
    }
}

/// What an engine operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Preconditions not met; nothing changed
    Ignored,
    /// A letter was typed or deleted
    Edited,
    /// The row was scored and the game goes on
    Scored,
    /// The row was scored and matched the secret
    Won,
    /// The last row was scored without a match
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }

    #[must_use]
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_control_keys() {
        assert_eq!(Key::parse("Backspace"), Some(Key::Delete));
        assert_eq!(Key::parse("Delete"), Some(Key::Delete));
        assert_eq!(Key::parse("Enter"), Some(Key::Submit));
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Key::parse("a"), Some(Key::Letter('a')));
        assert_eq!(Key::parse("Z"), Some(Key::Letter('Z')));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for name in ["", "1", " ", "ab", "Shift", "F5", "é", "Escape"] {
            assert_eq!(Key::parse(name), None, "{name:?} should be ignored");
        }
    }

    #[test]
    fn outcome_predicates() {
        assert!(Outcome::Ignored.is_ignored());
        assert!(!Outcome::Edited.is_ignored());
        assert!(Outcome::Won.ends_game());
        assert!(Outcome::Lost.ends_game());
        assert!(!Outcome::Scored.ends_game());
    }
}
