use cribforge::alphabet::is_letter;
use cribforge::solver::aligner::{find_alignments, window_mapping};
use rstest::rstest;

const SAMPLE: &str = "WKB VOOBFY NFL KXH";

#[test]
fn test_sample_alignments() {
    let alignments = find_alignments(SAMPLE, "THE");
    let indices: Vec<usize> = alignments.iter().map(|a| a.index).collect();

    // VOO and OOB need O to be two letters at once; every other rejected window spans a space.
    assert_eq!(indices, vec![0, 6, 7, 11, 15]);
    assert_eq!(
        alignments[0].mapping.pairs(),
        vec![('W', 'T'), ('K', 'H'), ('B', 'E')]
    );
}

#[test]
fn test_no_window_contains_non_letters() {
    let chars: Vec<char> = SAMPLE.chars().collect();
    for a in find_alignments(SAMPLE, "THE") {
        assert!(chars[a.index..a.index + 3].iter().all(|&c| is_letter(c)));
    }
}

#[test]
fn test_inputs_are_case_normalized() {
    let alignments = find_alignments("wkb", "the");
    assert_eq!(alignments.len(), 1);
    assert_eq!(alignments[0].mapping.get('w'), Some('T'));
}

#[rstest]
#[case("ABC", "ABCD")] // crib longer than text
#[case("ABC", "")] // empty crib
#[case("ABC DEF", "A1C")] // crib with a digit
#[case("A B C", "AB")] // every window spans a space
#[case("ABA", "XYZ")] // A would decrypt to X and Z
fn test_no_alignment(#[case] cipher: &str, #[case] crib: &str) {
    assert!(find_alignments(cipher, crib).is_empty());
}

#[rstest]
#[case("ABA", "XYX", 0)]
#[case("--QRS--", "THE", 2)]
#[case("z1.AB", "EE", 3)]
fn test_single_alignment(#[case] cipher: &str, #[case] crib: &str, #[case] index: usize) {
    let alignments = find_alignments(cipher, crib);
    assert_eq!(alignments.len(), 1, "{:?}", alignments);
    assert_eq!(alignments[0].index, index);
}

#[test]
fn test_distinct_cipher_letters_may_share_a_plain_letter() {
    // Only cipher -> plain consistency is enforced within a window.
    let m = window_mapping(&['A', 'B'], &['E', 'E']).unwrap();
    assert_eq!(m.get('A'), Some('E'));
    assert_eq!(m.get('B'), Some('E'));
}

#[test]
fn test_alignments_ascend() {
    let alignments = find_alignments("ABCABCABC", "XYZ");
    let indices: Vec<usize> = alignments.iter().map(|a| a.index).collect();
    assert_eq!(indices, (0..=6).collect::<Vec<_>>());
}
