use crate::alphabet::{is_letter, normalize};
use crate::mapping::{CipherMapping, MappingConflict};
use tracing::debug;

/// A crib placement and the partial mapping it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Char offset into the ciphertext.
    pub index: usize,
    pub mapping: CipherMapping,
}

/// Maps `window[j] -> crib[j]` for every j.
///
/// Fails when the window asks one cipher letter to decrypt to two plain letters.
pub fn window_mapping(window: &[char], crib: &[char]) -> Result<CipherMapping, MappingConflict> {
    CipherMapping::from_pairs(window.iter().copied().zip(crib.iter().copied()))
}

/// Slides `crib` over `cipher` and keeps every consistent, all-letter window, by ascending index.
pub fn find_alignments(cipher: &str, crib: &str) -> Vec<Alignment> {
    let cipher: Vec<char> = cipher.chars().map(normalize).collect();
    let crib: Vec<char> = crib.chars().map(normalize).collect();

    if crib.is_empty() || crib.len() > cipher.len() {
        return Vec::new();
    }
    // A crib with non-letters can never map letter to letter.
    if !crib.iter().all(|&c| is_letter(c)) {
        debug!("crib contains non-letters, no alignment possible");
        return Vec::new();
    }

    let mut alignments = Vec::new();
    for (index, window) in cipher.windows(crib.len()).enumerate() {
        if !window.iter().all(|&c| is_letter(c)) {
            continue;
        }

        match window_mapping(window, &crib) {
            Ok(mapping) => {
                debug!("alignment @{}:\n{}", index, mapping);
                alignments.push(Alignment { index, mapping });
            }
            Err(conflict) => {
                debug!("window @{} rejected: {}", index, conflict);
            }
        }
    }

    alignments
}
