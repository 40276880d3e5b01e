use crate::alphabet::{index_of, normalize, ALPHABET_LEN};
use serde::Serialize;

/// English letters from most to least common.
pub const ENGLISH_FREQUENCY: [char; ALPHABET_LEN] = [
    'E', 'T', 'A', 'O', 'I', 'N', 'S', 'H', 'R', 'D', 'L', 'C', 'U', 'M', 'W', 'F', 'G', 'Y', 'P',
    'B', 'V', 'K', 'J', 'X', 'Q', 'Z',
];

#[inline(always)]
pub fn rank() -> &'static [char; ALPHABET_LEN] {
    &ENGLISH_FREQUENCY
}

/// Position of `c` in the English ranking (0 = most common).
pub fn rank_of(c: char) -> Option<usize> {
    let up = normalize(c);
    ENGLISH_FREQUENCY.iter().position(|&r| r == up)
}

/// Letter occurrence counts, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LetterCounts {
    entries: Vec<(char, usize)>,
}

impl LetterCounts {
    pub fn count(text: &str) -> Self {
        // Slot in `entries` for each letter, assigned on first sight.
        let mut slot_of = [None::<usize>; ALPHABET_LEN];
        let mut entries: Vec<(char, usize)> = Vec::new();

        for c in text.chars() {
            let Some(idx) = index_of(c) else {
                continue;
            };
            match slot_of[idx] {
                Some(slot) => entries[slot].1 += 1,
                None => {
                    slot_of[idx] = Some(entries.len());
                    entries.push((normalize(c), 1));
                }
            }
        }

        Self { entries }
    }

    pub fn get(&self, letter: char) -> usize {
        let up = normalize(letter);
        self.entries
            .iter()
            .find(|(c, _)| *c == up)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending count. The sort is stable: ties stay in first-seen order.
    pub fn sorted(&self) -> Vec<(char, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    pub fn ranked(&self) -> Vec<char> {
        self.sorted().into_iter().map(|(c, _)| c).collect()
    }
}

pub fn letters_by_frequency(text: &str) -> Vec<char> {
    LetterCounts::count(text).ranked()
}
