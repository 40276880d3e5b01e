use crate::alphabet::{index_of, letter_at, normalize, ALPHABET_LEN, UNKNOWN_MARKER};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingConflict {
    #[error("cipher letter '{cipher}' already maps to '{existing}', cannot also map to '{requested}'")]
    Reassigned {
        cipher: char,
        existing: char,
        requested: char,
    },

    #[error("'{0}' is outside the A-Z alphabet")]
    OutsideAlphabet(char),
}

/// A partial cipher-letter -> plain-letter function.
///
/// Values are immutable once built: [`CipherMapping::with`] and
/// [`CipherMapping::merge`] hand back a fresh mapping or a [`MappingConflict`].
/// Pairs remember the order they were added in, which is the order
/// [`CipherMapping::pairs`] reports them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CipherMapping {
    slots: [Option<char>; ALPHABET_LEN],
    order: Vec<char>,
}

impl CipherMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from pairs, rejecting the first contradictory one.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MappingConflict>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut mapping = Self::new();
        for (cipher, plain) in pairs {
            mapping.assign(cipher, plain)?;
        }
        Ok(mapping)
    }

    #[inline(always)]
    pub fn get(&self, cipher: char) -> Option<char> {
        index_of(cipher).and_then(|idx| self.slots[idx])
    }

    pub fn contains(&self, cipher: char) -> bool {
        self.get(cipher).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns a copy extended with `cipher -> plain`.
    pub fn with(&self, cipher: char, plain: char) -> Result<Self, MappingConflict> {
        let mut next = self.clone();
        next.assign(cipher, plain)?;
        Ok(next)
    }

    /// Union of two mappings. Pairs from `self` come first.
    pub fn merge(&self, other: &CipherMapping) -> Result<Self, MappingConflict> {
        let mut merged = self.clone();
        for (cipher, plain) in other.pairs() {
            merged.assign(cipher, plain)?;
        }
        Ok(merged)
    }

    /// Only checks cipher -> plain consistency. Two cipher letters may share
    /// a plain letter; crib alignment relies on that.
    pub(crate) fn assign(&mut self, cipher: char, plain: char) -> Result<(), MappingConflict> {
        let idx = index_of(cipher).ok_or(MappingConflict::OutsideAlphabet(cipher))?;
        let plain = normalize(plain);
        if !plain.is_ascii_uppercase() && plain != UNKNOWN_MARKER {
            return Err(MappingConflict::OutsideAlphabet(plain));
        }

        match self.slots[idx] {
            Some(existing) if existing == plain => Ok(()),
            Some(existing) => Err(MappingConflict::Reassigned {
                cipher: letter_at(idx),
                existing,
                requested: plain,
            }),
            None => {
                self.slots[idx] = Some(plain);
                self.order.push(letter_at(idx));
                Ok(())
            }
        }
    }

    /// Plain letters in use, indexed by alphabet slot. The unknown marker is not a letter and never counts.
    pub fn plain_used(&self) -> [bool; ALPHABET_LEN] {
        let mut used = [false; ALPHABET_LEN];
        for plain in self.slots.iter().flatten() {
            if let Some(idx) = index_of(*plain) {
                used[idx] = true;
            }
        }
        used
    }

    pub fn pairs(&self) -> Vec<(char, char)> {
        self.order
            .iter()
            .filter_map(|&c| self.get(c).map(|p| (c, p)))
            .collect()
    }
}

impl fmt::Debug for CipherMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pairs()).finish()
    }
}

impl fmt::Display for CipherMapping {
    /// Two rows: the cipher alphabet, then its plain letter (`?` when unmapped).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..ALPHABET_LEN {
            write!(f, "{}", letter_at(i))?;
        }
        writeln!(f)?;
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or('?'))?;
        }
        Ok(())
    }
}
