//! Longest-matching-block sequence matcher

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Minimum length of the second sequence before the popular-element
/// heuristic kicks in.
pub const AUTOJUNK_MIN_LEN: usize = 200;

// =============================================================================
// Match / Opcode
// =============================================================================

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }
}

/// Kind of an opcode span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `b[b_start..b_end]` should be inserted at `a[a_start]`
    Insert,
    /// `a[a_start..a_end]` should be deleted
    Delete,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`
    Replace,
}

impl OpTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpTag::Equal => "equal",
            OpTag::Insert => "insert",
            OpTag::Delete => "delete",
            OpTag::Replace => "replace",
        }
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A maximal contiguous run of one edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub fn new(tag: OpTag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self { tag, a_start, a_end, b_start, b_end }
    }

    /// Number of elements of `a` covered by this span
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Number of elements of `b` covered by this span
    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

// =============================================================================
// SequenceMatcher
// =============================================================================

/// Ratcliff/Obershelp matcher over two borrowed sequences.
///
/// Matching blocks are computed once on first use and cached, so calling
/// [`ratio`](Self::ratio) and [`opcodes`](Self::opcodes) on the same matcher
/// aligns the sequences only once.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each element of `b`, ascending. Popular elements are absent.
    b2j: HashMap<&'a T, Vec<usize>>,
    popular: HashSet<&'a T>,
    blocks: OnceCell<Vec<Match>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Create a matcher with the popular-element heuristic disabled.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    /// Create a matcher, optionally enabling the popular-element heuristic.
    ///
    /// With `autojunk` set and `b` at least [`AUTOJUNK_MIN_LEN`] long, every
    /// element occurring in more than 1% of `b` (plus one) is dropped from the
    /// index. Such elements never start a match but can still extend one.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let mut popular = HashSet::new();
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            popular.extend(
                b2j.iter()
                    .filter(|(_, positions)| positions.len() > threshold)
                    .map(|(elt, _)| *elt),
            );
            for elt in &popular {
                b2j.remove(elt);
            }
        }

        Self {
            a,
            b,
            b2j,
            popular,
            blocks: OnceCell::new(),
        }
    }

    /// Elements of `b` excluded from the index by the popularity heuristic
    pub fn popular(&self) -> &HashSet<&'a T> {
        &self.popular
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of maximal length, returns the one that starts earliest
    /// in `a`, and of those the one that starts earliest in `b`. A block of
    /// size 0 means no element matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, elt) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(elt) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next;
        }

        // Popular elements never seed a block; absorb equal neighbours here.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        Match::new(best_i, best_j, best_size)
    }

    /// Non-overlapping matching blocks, ascending in both sequences.
    ///
    /// Adjacent blocks are merged, and the list always ends with the sentinel
    /// `Match { a: len(a), b: len(b), size: 0 }`.
    pub fn matching_blocks(&self) -> &[Match] {
        self.blocks.get_or_init(|| self.compute_matching_blocks())
    }

    fn compute_matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut pending = vec![(0, la, 0, lb)];
        let mut found = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            found.push(m);
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        found.sort();

        let mut blocks: Vec<Match> = Vec::with_capacity(found.len() + 1);
        for m in found {
            match blocks.last_mut() {
                Some(last) if last.a + last.size == m.a && last.b + last.size == m.b => {
                    last.size += m.size;
                }
                _ => blocks.push(m),
            }
        }
        blocks.push(Match::new(la, lb, 0));
        blocks
    }

    /// Opcodes turning `a` into `b`, covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);

        for m in self.matching_blocks() {
            let tag = match (i < m.a, j < m.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                ops.push(Opcode::new(tag, i, m.a, j, m.b));
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                ops.push(Opcode::new(OpTag::Equal, m.a, i, m.b, j));
            }
        }

        ops
    }

    /// Total number of matched elements
    pub fn matches(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// Similarity in `[0, 1]`: `2 * matches / (len(a) + len(b))`.
    ///
    /// Two empty sequences are identical and score `1.0`.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matches() as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_longest_match_prefers_earliest() {
        let a = chars(" abcd");
        let b = chars("abcd abcd");
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.find_longest_match(0, 5, 0, 9), Match::new(0, 4, 5));
    }

    #[test]
    fn test_matching_blocks_with_sentinel() {
        let a = chars("abxcd");
        let b = chars("abcd");
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.matching_blocks(),
            &[Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
        );
    }

    #[test]
    fn test_opcodes() {
        let a = chars("qabxcd");
        let b = chars("abycdf");
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(
            matcher.opcodes(),
            vec![
                Opcode::new(OpTag::Delete, 0, 1, 0, 0),
                Opcode::new(OpTag::Equal, 1, 3, 0, 2),
                Opcode::new(OpTag::Replace, 3, 4, 2, 3),
                Opcode::new(OpTag::Equal, 4, 6, 3, 5),
                Opcode::new(OpTag::Insert, 6, 6, 5, 6),
            ]
        );
    }

    #[test]
    fn test_ratio() {
        let a = chars("abcd");
        let b = chars("bcde");
        assert_eq!(SequenceMatcher::new(&a, &b).ratio(), 0.75);
    }

    #[test]
    fn test_ratio_is_orientation_dependent_on_ties() {
        let a = chars("tide");
        let b = chars("diet");
        assert_eq!(SequenceMatcher::new(&a, &b).ratio(), 0.25);
        assert_eq!(SequenceMatcher::new(&b, &a).ratio(), 0.5);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let abc = chars("abc");

        let both = SequenceMatcher::new(&empty, &empty);
        assert_eq!(both.ratio(), 1.0);
        assert!(both.opcodes().is_empty());

        let one = SequenceMatcher::new(&empty, &abc);
        assert_eq!(one.ratio(), 0.0);
        assert_eq!(one.opcodes(), vec![Opcode::new(OpTag::Insert, 0, 0, 0, 3)]);
    }

    #[test]
    fn test_autojunk_drops_popular_elements() {
        let a = vec!['a'; 300];
        let b = vec!['a'; 300];

        let plain = SequenceMatcher::new(&a, &b);
        assert_eq!(plain.ratio(), 1.0);
        assert!(plain.popular().is_empty());

        let junked = SequenceMatcher::with_autojunk(&a, &b, true);
        assert!(junked.popular().contains(&'a'));
        assert_eq!(junked.ratio(), 0.0);
    }

    #[test]
    fn test_autojunk_ignored_for_short_sequences() {
        let a = vec!['a'; 50];
        let matcher = SequenceMatcher::with_autojunk(&a, &a, true);
        assert!(matcher.popular().is_empty());
        assert_eq!(matcher.ratio(), 1.0);
    }

    #[test]
    fn test_word_sequences() {
        let a = vec!["the", "quick", "brown", "fox"];
        let b = vec!["the", "quick", "fox"];
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.matches(), 3);
        assert_eq!(
            matcher.opcodes(),
            vec![
                Opcode::new(OpTag::Equal, 0, 2, 0, 2),
                Opcode::new(OpTag::Delete, 2, 3, 2, 2),
                Opcode::new(OpTag::Equal, 3, 4, 2, 3),
            ]
        );
    }
}
