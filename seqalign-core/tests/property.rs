//! Property-based tests for seqalign using proptest

use proptest::prelude::*;
use seqalign::{levenshtein, OpTag, SequenceMatcher};

/// Small alphabet so that random sequences actually share elements
fn arb_text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', ' ']), 0..60)
}

/// Rebuild `b` from `a` by applying the opcodes
fn apply_opcodes(a: &[char], b: &[char], matcher: &SequenceMatcher<'_, char>) -> Vec<char> {
    let mut out = Vec::new();
    for op in matcher.opcodes() {
        match op.tag {
            OpTag::Equal => out.extend_from_slice(&a[op.a_start..op.a_end]),
            OpTag::Insert | OpTag::Replace => out.extend_from_slice(&b[op.b_start..op.b_end]),
            OpTag::Delete => {}
        }
    }
    out
}

proptest! {
    #[test]
    fn ratio_is_bounded(a in arb_text(), b in arb_text()) {
        let r = SequenceMatcher::new(&a, &b).ratio();
        prop_assert!((0.0..=1.0).contains(&r), "ratio out of range: {}", r);
    }

    #[test]
    fn identical_sequences_match_fully(a in arb_text()) {
        let matcher = SequenceMatcher::new(&a, &a);
        prop_assert_eq!(matcher.ratio(), 1.0);
        prop_assert!(matcher.opcodes().iter().all(|op| op.tag == OpTag::Equal));
    }

    #[test]
    fn opcodes_cover_both_sequences(a in arb_text(), b in arb_text()) {
        let matcher = SequenceMatcher::new(&a, &b);
        let ops = matcher.opcodes();

        let (mut i, mut j) = (0, 0);
        for op in &ops {
            prop_assert_eq!(op.a_start, i);
            prop_assert_eq!(op.b_start, j);
            match op.tag {
                OpTag::Equal => {
                    prop_assert_eq!(&a[op.a_start..op.a_end], &b[op.b_start..op.b_end]);
                }
                OpTag::Insert => prop_assert_eq!(op.a_len(), 0),
                OpTag::Delete => prop_assert_eq!(op.b_len(), 0),
                OpTag::Replace => prop_assert!(op.a_len() > 0 && op.b_len() > 0),
            }
            i = op.a_end;
            j = op.b_end;
        }
        prop_assert_eq!(i, a.len());
        prop_assert_eq!(j, b.len());
    }

    #[test]
    fn opcodes_transform_a_into_b(a in arb_text(), b in arb_text()) {
        let matcher = SequenceMatcher::new(&a, &b);
        let rebuilt = apply_opcodes(&a, &b, &matcher);
        prop_assert_eq!(&rebuilt, &b);
    }

    #[test]
    fn equal_spans_account_for_all_matches(a in arb_text(), b in arb_text()) {
        let matcher = SequenceMatcher::new(&a, &b);
        let equal: usize = matcher
            .opcodes()
            .iter()
            .filter(|op| op.tag == OpTag::Equal)
            .map(|op| op.a_len())
            .sum();
        prop_assert_eq!(equal, matcher.matches());
    }

    #[test]
    fn matching_blocks_end_with_sentinel(a in arb_text(), b in arb_text()) {
        let matcher = SequenceMatcher::new(&a, &b);
        let last = *matcher.matching_blocks().last().unwrap();
        prop_assert_eq!((last.a, last.b, last.size), (a.len(), b.len(), 0));
    }

    #[test]
    fn autojunk_inactive_below_threshold(a in arb_text(), b in arb_text()) {
        let plain = SequenceMatcher::new(&a, &b).matches();
        let junked = SequenceMatcher::with_autojunk(&a, &b, true).matches();
        prop_assert_eq!(plain, junked);
    }

    #[test]
    fn levenshtein_is_a_metric(a in arb_text(), b in arb_text()) {
        let d = levenshtein(&a, &b);
        prop_assert_eq!(d, levenshtein(&b, &a));
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }
}
