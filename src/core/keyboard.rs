//! On-screen keyboard state
//!
//! Tracks the best-known status of every letter guessed so far. Statuses only
//! ever move upwards: an absent key never becomes absent again after turning
//! shifted, and a correct key is final.

use rustc_hash::FxHashMap;

/// QWERTY layout shown by presenters, with the two control keys on the last row
pub const LAYOUT: [&[&str]; 3] = [
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["Enter", "z", "x", "c", "v", "b", "n", "m", "Backspace"],
];

/// Status of a single keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStatus {
    Correct,
    Shifted,
    Absent,
}

impl KeyStatus {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Shifted => "shifted",
            Self::Absent => "absent",
        }
    }
}

/// Letter -> status map for all keys touched by a scored row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    statuses: FxHashMap<char, KeyStatus>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of `letter`, `None` if it was never scored
    #[must_use]
    pub fn status(&self, letter: char) -> Option<KeyStatus> {
        self.statuses.get(&letter).copied()
    }

    /// Number of letters with a status
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// All known statuses, sorted by letter
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, KeyStatus)> {
        let mut entries: Vec<(char, KeyStatus)> =
            self.statuses.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    /// Apply a status update under the upgrade-only rules
    ///
    /// - `Correct` always wins.
    /// - `Shifted` applies unless the key is already `Correct`.
    /// - `Absent` applies only to a key without a better status.
    ///
    /// Returns true if the stored status changed.
    pub fn promote(&mut self, letter: char, status: KeyStatus) -> bool {
        let current = self.status(letter);
        let apply = match status {
            KeyStatus::Correct => true,
            KeyStatus::Shifted => current != Some(KeyStatus::Correct),
            KeyStatus::Absent => {
                !matches!(current, Some(KeyStatus::Correct | KeyStatus::Shifted))
            }
        };

        if apply && current != Some(status) {
            self.statuses.insert(letter, status);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_takes_any_status() {
        for status in [KeyStatus::Correct, KeyStatus::Shifted, KeyStatus::Absent] {
            let mut keyboard = Keyboard::new();
            assert!(keyboard.promote('a', status));
            assert_eq!(keyboard.status('a'), Some(status));
        }
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = Keyboard::new();
        keyboard.promote('a', KeyStatus::Correct);

        assert!(!keyboard.promote('a', KeyStatus::Shifted));
        assert!(!keyboard.promote('a', KeyStatus::Absent));
        assert_eq!(keyboard.status('a'), Some(KeyStatus::Correct));
    }

    #[test]
    fn shifted_never_becomes_absent() {
        let mut keyboard = Keyboard::new();
        keyboard.promote('b', KeyStatus::Shifted);

        assert!(!keyboard.promote('b', KeyStatus::Absent));
        assert_eq!(keyboard.status('b'), Some(KeyStatus::Shifted));

        assert!(keyboard.promote('b', KeyStatus::Correct));
        assert_eq!(keyboard.status('b'), Some(KeyStatus::Correct));
    }

    #[test]
    fn repeated_status_reports_no_change() {
        let mut keyboard = Keyboard::new();
        assert!(keyboard.promote('c', KeyStatus::Absent));
        assert!(!keyboard.promote('c', KeyStatus::Absent));
        assert_eq!(keyboard.len(), 1);
    }

    #[test]
    fn sorted_orders_by_letter() {
        let mut keyboard = Keyboard::new();
        keyboard.promote('z', KeyStatus::Absent);
        keyboard.promote('a', KeyStatus::Correct);
        keyboard.promote('m', KeyStatus::Shifted);

        let letters: Vec<char> = keyboard.sorted().into_iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec!['a', 'm', 'z']);
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut letters: Vec<&str> = LAYOUT
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|key| key.len() == 1)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }
}
