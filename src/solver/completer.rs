use crate::alphabet::{index_of, normalize, UNKNOWN_MARKER};
use crate::frequency::{rank, LetterCounts};
use crate::mapping::CipherMapping;

/// Ciphertext with every letter already covered by `mapping` stripped out.
pub fn residual_ciphertext(cipher: &str, mapping: &CipherMapping) -> String {
    cipher
        .chars()
        .map(normalize)
        .filter(|&c| !mapping.contains(c))
        .collect()
}

/// Extends `partial` to every letter in `cipher`.
///
/// Unmapped cipher letters are taken in descending residual frequency and paired,
/// greedily, with the next English letter not yet used as a plain letter. The
/// ranking cursor only moves forward. If the ranking runs dry the letter maps to
/// [`UNKNOWN_MARKER`].
pub fn complete_mapping(partial: &CipherMapping, cipher: &str) -> CipherMapping {
    let mut used = partial.plain_used();
    let residual = residual_ciphertext(cipher, partial);
    let ranked = LetterCounts::count(&residual).ranked();

    let ranking = rank();
    let mut cursor = 0;
    let mut completed = partial.clone();

    for cipher_letter in ranked {
        while cursor < ranking.len() && index_of(ranking[cursor]).is_some_and(|i| used[i]) {
            cursor += 1;
        }

        let plain = if cursor < ranking.len() {
            let plain = ranking[cursor];
            if let Some(i) = index_of(plain) {
                used[i] = true;
            }
            cursor += 1;
            plain
        } else {
            UNKNOWN_MARKER
        };

        let assigned = completed.assign(cipher_letter, plain);
        debug_assert!(assigned.is_ok(), "residual letter {} already mapped", cipher_letter);
    }

    completed
}
