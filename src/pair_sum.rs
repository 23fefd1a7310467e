//! Pair-sum index lookup ("Two Sum").
//!
//! A single left-to-right scan over the values keeps a map from each value to
//! the earliest position it was seen at. The first position whose complement
//! is already in the map closes the pair.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Two distinct positions of a sequence whose values add up to the target.
///
/// `first < second` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Find the first pair of positions, in scan order, whose values sum to `target`.
///
/// Returns `None` when no two distinct positions qualify; that is an ordinary
/// outcome, not an error. The returned pair has the smallest possible `second`,
/// and `first` is the earliest position holding the matching complement.
pub fn find_pair(values: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        // An overflowing complement lies outside i64, so no stored value can match it.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = seen.get(&complement) {
                trace!(first = j, second = i, "pair found");
                return Some(IndexPair {
                    first: j,
                    second: i,
                });
            }
        }
        seen.entry(value).or_insert(i);
    }

    trace!(scanned = values.len(), "no pair");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_leading_pair() {
        assert_eq!(find_pair(&[2, 7, 11, 15], 9).map(|p| p.as_tuple()), Some((0, 1)));
    }

    #[test]
    fn test_skips_self_match() {
        // 3 + 3 would be 6 but index 0 cannot pair with itself
        assert_eq!(find_pair(&[3, 2, 4], 6).map(|p| p.as_tuple()), Some((1, 2)));
    }

    #[test]
    fn test_duplicate_values_pair() {
        assert_eq!(find_pair(&[3, 3], 6).map(|p| p.as_tuple()), Some((0, 1)));
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(find_pair(&[1, 2, 3], 100), None);
        assert_eq!(find_pair(&[], 0), None);
        assert_eq!(find_pair(&[5], 10), None);
    }

    #[test]
    fn test_negative_and_zero_values() {
        assert_eq!(find_pair(&[-1, -5, 2, 10], 1).map(|p| p.as_tuple()), Some((0, 2)));
        assert_eq!(find_pair(&[0, 4, 3, 0], 0).map(|p| p.as_tuple()), Some((0, 3)));
    }

    #[test]
    fn test_large_values() {
        let values = [1_000_000_000, 2, 7, 1_000_000_000];
        assert_eq!(
            find_pair(&values, 2_000_000_000).map(|p| p.as_tuple()),
            Some((0, 3))
        );
    }

    #[test]
    fn test_earliest_occurrence_is_kept() {
        // Both 1s complement the 4; the earlier 1 must be reported.
        assert_eq!(find_pair(&[1, 1, 4], 5).map(|p| p.as_tuple()), Some((0, 2)));
    }

    #[test]
    fn test_first_match_in_scan_order() {
        // (1, 2) closes at index 2 before (0, 3) closes at index 3.
        assert_eq!(find_pair(&[1, 2, 3, 4], 5).map(|p| p.as_tuple()), Some((1, 2)));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(find_pair(&[i64::MIN, i64::MAX], -1).map(|p| p.as_tuple()), Some((0, 1)));
        assert_eq!(find_pair(&[-1, i64::MIN], i64::MAX), None);
    }

    #[test]
    fn test_display_is_space_separated() {
        let pair = IndexPair {
            first: 0,
            second: 9999,
        };
        assert_eq!(pair.to_string(), "0 9999");
    }
}
