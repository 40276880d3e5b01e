use cribforge::alphabet::{is_letter, UNKNOWN_MARKER};
use cribforge::error::CribForgeError;
use cribforge::key::SubstitutionKey;
use cribforge::solver::{apply_mapping, complete_mapping, find_alignments};
use cribforge::{api, CipherMapping};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_key()(seed in any::<u64>()) -> SubstitutionKey {
        SubstitutionKey::random(&mut fastrand::Rng::with_seed(seed))
    }
}

prop_compose! {
    /// Lowercase words joined by assorted separators, plus the index of one word.
    fn arb_plaintext()(
        words in proptest::collection::vec("[a-z]{1,8}", 1..12),
        seps in proptest::collection::vec(prop_oneof![
            Just(" "), Just(", "), Just(". "), Just("\n"), Just(" - "), Just("3 ")
        ], 12),
    )(
        pick in 0..words.len(),
        words in Just(words),
        seps in Just(seps),
    ) -> (String, usize, String) {
        let mut text = String::new();
        let mut offset = 0;
        for (i, w) in words.iter().enumerate() {
            if i > 0 {
                text.push_str(seps[i - 1]);
            }
            if i == pick {
                offset = text.chars().count();
            }
            text.push_str(w);
        }
        (text, offset, words[pick].clone())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_crib_longer_than_text_never_aligns(
        cipher in "[A-Za-z]{1,10}",
        crib in "[A-Z]{11,20}",
    ) {
        prop_assert!(find_alignments(&cipher, &crib).is_empty());
        let is_no_alignment = matches!(api::solve(&cipher, &crib), Err(CribForgeError::NoAlignment { .. }));
        prop_assert!(is_no_alignment);
    }

    #[test]
    fn test_true_position_is_found_and_agrees_with_key(
        key in arb_key(),
        (plain, offset, crib) in arb_plaintext(),
    ) {
        let cipher = key.encipher(&plain);
        let truth = key.as_mapping();

        let alignments = find_alignments(&cipher, &crib);
        let hit = alignments.iter().find(|a| a.index == offset);
        prop_assert!(hit.is_some(), "offset {} missing from {:?}", offset, alignments);

        for (c, p) in hit.unwrap().mapping.pairs() {
            prop_assert_eq!(truth.get(c), Some(p));
        }
    }

    #[test]
    fn test_non_letters_are_reproduced_verbatim(
        cipher in "[A-Za-z0-9 ,.!?\n]{1,60}",
        crib in "[A-Z]{1,3}",
    ) {
        if let Ok(solution) = api::solve(&cipher, &crib) {
            let src: Vec<char> = cipher.chars().collect();
            let out: Vec<char> = solution.decrypted_text.chars().collect();
            prop_assert_eq!(src.len(), out.len());
            for (a, b) in src.iter().zip(out.iter()) {
                if is_letter(*a) {
                    prop_assert!(b.is_ascii_uppercase());
                } else {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_completed_mapping_covers_ciphertext(
        cipher in "[A-Za-z ,.]{1,80}",
        crib in "[A-Z]{1,4}",
    ) {
        for alignment in find_alignments(&cipher, &crib) {
            let completed = complete_mapping(&alignment.mapping, &cipher);
            for c in cipher.chars().filter(|c| is_letter(*c)) {
                prop_assert!(completed.contains(c));
            }
            prop_assert!(!apply_mapping(&cipher, &completed).contains(UNKNOWN_MARKER));

            // Completing again changes nothing.
            prop_assert_eq!(complete_mapping(&completed, &cipher), completed);
        }
    }

    #[test]
    fn test_key_mapping_inverts_encipher(key in arb_key(), plain in "[A-Z ]{0,40}") {
        let cipher = key.encipher(&plain);
        prop_assert_eq!(apply_mapping(&cipher, &key.as_mapping()), plain);
    }

    #[test]
    fn test_empty_partial_completion_is_injective(cipher in "[A-Z]{1,120}") {
        let completed = complete_mapping(&CipherMapping::new(), &cipher);
        let mut plains: Vec<char> = completed.pairs().into_iter().map(|(_, p)| p).collect();
        let n = plains.len();
        plains.sort();
        plains.dedup();
        prop_assert_eq!(plains.len(), n);
    }
}
