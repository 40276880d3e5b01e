/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Emitted in place of a cipher letter that has no plain letter.
pub const UNKNOWN_MARKER: char = '_';

/// Uppercases `c` if it is an ASCII letter. Everything else passes through.
#[inline(always)]
pub fn normalize(c: char) -> char {
    c.to_ascii_uppercase()
}

/// True for `A..=Z` after normalization. Non-ASCII letters are not part of the alphabet.
#[inline(always)]
pub fn is_letter(c: char) -> bool {
    normalize(c).is_ascii_uppercase()
}

/// Slot index (0..26) of a letter, or `None` for anything outside the alphabet.
#[inline(always)]
pub fn index_of(c: char) -> Option<usize> {
    let up = normalize(c);
    if up.is_ascii_uppercase() {
        Some((up as u8 - b'A') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn letter_at(idx: usize) -> char {
    debug_assert!(idx < ALPHABET_LEN);
    (b'A' + idx as u8) as char
}

pub fn letters() -> impl Iterator<Item = char> {
    (0..ALPHABET_LEN).map(letter_at)
}
