//! Top-K ranking of word counts.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::domain::entities::WordCount;

/// Descending by frequency, ties broken by ascending word.
///
/// Total over entries with unique words, so any sort yields the same output.
pub fn ranking_order(a: &WordCount, b: &WordCount) -> Ordering {
    b.freq.cmp(&a.freq).then_with(|| a.word.cmp(&b.word))
}

/// Sort `entries` by [`ranking_order`] and keep the first `k`.
pub fn rank<I>(entries: I, k: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = WordCount>,
{
    if k == 0 {
        return Vec::new();
    }
    entries
        .into_iter()
        .sorted_unstable_by(ranking_order)
        .take(k)
        .collect()
}

/// Map a caller-supplied K onto an entry count; non-positive K means none.
///
/// K beyond the address space saturates, so it still means "all entries".
pub fn clamp_k(k: i64) -> usize {
    if k <= 0 {
        0
    } else {
        usize::try_from(k).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<WordCount> {
        vec![
            WordCount::new("cat", 2),
            WordCount::new("dog", 1),
            WordCount::new("the", 3),
        ]
    }

    #[test]
    fn given_distinct_freqs_when_ranked_then_descending() {
        let ranked = rank(sample(), 2);
        assert_eq!(
            ranked,
            vec![WordCount::new("the", 3), WordCount::new("cat", 2)]
        );
    }

    #[test]
    fn given_equal_freqs_when_ranked_then_alphabetical() {
        let entries = vec![
            WordCount::new("ccc", 2),
            WordCount::new("aaa", 1),
            WordCount::new("bbb", 2),
        ];
        let ranked = rank(entries, 10);
        let words: Vec<&str> = ranked.iter().map(|wc| wc.word.as_str()).collect();
        assert_eq!(words, vec!["bbb", "ccc", "aaa"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(50, 3)]
    fn test_rank_truncation(#[case] k: usize, #[case] expected: usize) {
        assert_eq!(rank(sample(), k).len(), expected);
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(0, 0)]
    #[case(7, 7)]
    #[case(i64::MIN, 0)]
    fn test_clamp_k(#[case] k: i64, #[case] expected: usize) {
        assert_eq!(clamp_k(k), expected);
    }

    #[test]
    fn given_largest_k_when_clamped_then_ranks_all_entries() {
        let k = clamp_k(i64::MAX);
        assert!(k > 0);
        assert_eq!(rank(sample(), k).len(), 3);
    }

    #[test]
    fn given_ranked_output_when_compared_pairwise_then_strictly_ordered() {
        let ranked = rank(sample(), 3);
        assert!(ranked
            .windows(2)
            .all(|w| ranking_order(&w[0], &w[1]) == Ordering::Less));
    }
}
