use crate::alphabet::{index_of, letter_at, ALPHABET_LEN};
use crate::error::{CfResult, CribForgeError};
use crate::mapping::CipherMapping;
use std::fmt;

/// A full plain -> cipher bijection over A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionKey {
    // cipher[plain_idx] = cipher letter
    cipher: [char; ALPHABET_LEN],
}

impl SubstitutionKey {
    pub fn identity() -> Self {
        let mut cipher = ['A'; ALPHABET_LEN];
        for (i, slot) in cipher.iter_mut().enumerate() {
            *slot = letter_at(i);
        }
        Self { cipher }
    }

    /// Fisher-Yates shuffle of the alphabet.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut key = Self::identity();
        rng.shuffle(&mut key.cipher);
        key
    }

    /// `alphabet[i]` is the cipher letter for the i-th plain letter.
    pub fn from_cipher_alphabet(alphabet: &str) -> CfResult<Self> {
        let letters: Vec<char> = alphabet.trim().chars().collect();
        if letters.len() != ALPHABET_LEN {
            return Err(CribForgeError::Config(format!(
                "Key alphabet must have {} letters, got {}",
                ALPHABET_LEN,
                letters.len()
            )));
        }

        let mut seen = [false; ALPHABET_LEN];
        let mut cipher = ['A'; ALPHABET_LEN];
        for (i, &c) in letters.iter().enumerate() {
            let idx = index_of(c).ok_or_else(|| {
                CribForgeError::Config(format!("Key alphabet contains non-letter '{}'", c))
            })?;
            if seen[idx] {
                return Err(CribForgeError::Config(format!(
                    "Key alphabet repeats letter '{}'",
                    letter_at(idx)
                )));
            }
            seen[idx] = true;
            cipher[i] = letter_at(idx);
        }

        Ok(Self { cipher })
    }

    pub fn cipher_for(&self, plain: char) -> Option<char> {
        index_of(plain).map(|idx| self.cipher[idx])
    }

    /// Substitutes letters, keeping their case. Non-letters pass through.
    pub fn encipher(&self, plain: &str) -> String {
        plain
            .chars()
            .map(|c| match self.cipher_for(c) {
                Some(sub) if c.is_ascii_lowercase() => sub.to_ascii_lowercase(),
                Some(sub) => sub,
                None => c,
            })
            .collect()
    }

    /// The inverse key as a cipher -> plain mapping, ordered A..Z by plain letter.
    pub fn as_mapping(&self) -> CipherMapping {
        let mut mapping = CipherMapping::new();
        for (plain_idx, &cipher) in self.cipher.iter().enumerate() {
            let assigned = mapping.assign(cipher, letter_at(plain_idx));
            debug_assert!(assigned.is_ok(), "key repeats cipher letter {}", cipher);
        }
        mapping
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cipher {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
