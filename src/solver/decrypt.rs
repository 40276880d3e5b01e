use crate::alphabet::{is_letter, normalize, UNKNOWN_MARKER};
use crate::mapping::CipherMapping;

/// Uppercases `cipher` and substitutes each letter through `mapping`.
///
/// Letters without a mapping become [`UNKNOWN_MARKER`]. Everything else is copied verbatim.
pub fn apply_mapping(cipher: &str, mapping: &CipherMapping) -> String {
    cipher
        .chars()
        .map(normalize)
        .map(|c| {
            if is_letter(c) {
                mapping.get(c).unwrap_or(UNKNOWN_MARKER)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_letters_become_marker() {
        let m = CipherMapping::from_pairs([('A', 'T')]).unwrap();
        assert_eq!(apply_mapping("ab, 1a!", &m), "T_, 1T!");
    }

    #[test]
    fn test_non_letters_verbatim() {
        let m = CipherMapping::new();
        assert_eq!(apply_mapping("  \t42 -- é\n", &m), "  \t42 -- é\n");
    }
}
