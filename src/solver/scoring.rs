use crate::alphabet::UNKNOWN_MARKER;

/// Counts whitespace-separated tokens longer than `min_word_len` chars that
/// contain no [`UNKNOWN_MARKER`]. A crude legibility proxy: no dictionary, no n-grams.
pub fn recognizable_words(decrypted: &str, min_word_len: usize) -> usize {
    decrypted
        .split_whitespace()
        .filter(|token| token.chars().count() > min_word_len && !token.contains(UNKNOWN_MARKER))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_marked_tokens_are_ignored() {
        assert_eq!(recognizable_words("THE QUICK BR_WN FOX JUMPS", 3), 2);
        assert_eq!(recognizable_words("", 3), 0);
        assert_eq!(recognizable_words("   \n\t ", 3), 0);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(recognizable_words("  ABCD\t\tEFGH \n IJKL  ", 3), 3);
    }
}
