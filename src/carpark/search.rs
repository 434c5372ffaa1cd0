//! Ordered-key lookup over record slices.
//!
//! The store keeps records in append order, so every query sorts a working
//! copy by the key it needs and binary-searches that. Registrations are not
//! unique (a vehicle can re-enter), which standard binary search does not
//! handle; [`find_by_key_where`] locates any record with the target key and
//! then walks the contiguous equal-key block for the one that satisfies a
//! caller-supplied predicate.

use std::cmp::Ordering;

/// Binary search a slice already sorted by `key`. Returns the index of a
/// record whose key equals `target`, or `None`. With duplicate keys, which
/// of the duplicates is returned is unspecified.
pub fn find_by_key<T, K, F>(records: &[T], key: F, target: &K) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut left = 0usize;
    let mut right = records.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match key(&records[mid]).cmp(target) {
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Like [`find_by_key`], but among records sharing the target key returns
/// the first (lowest index) that also satisfies `pred`.
///
/// Sorting keeps equal keys contiguous, so after the binary search lands on
/// any match it is enough to scan outward within the equal-key block. The
/// callers that need this guarantee at most one qualifying record per key.
pub fn find_by_key_where<T, K, F, P>(records: &[T], key: F, target: &K, pred: P) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
    P: Fn(&T) -> bool,
{
    let hit = find_by_key(records, &key, target)?;

    let mut start = hit;
    while start > 0 && key(&records[start - 1]) == *target {
        start -= 1;
    }
    let mut end = hit + 1;
    while end < records.len() && key(&records[end]) == *target {
        end += 1;
    }

    (start..end).find(|&i| pred(&records[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(v: &[(&str, bool)]) -> Vec<(String, bool)> {
        v.iter().map(|(k, a)| (k.to_string(), *a)).collect()
    }

    #[test]
    fn finds_unique_key() {
        let data = keys(&[("A", true), ("B", true), ("C", true), ("D", true)]);
        let idx = find_by_key(&data, |r| r.0.clone(), &"C".to_string());
        assert_eq!(idx, Some(2));
    }

    #[test]
    fn missing_key_is_none() {
        let data = keys(&[("A", true), ("C", true)]);
        assert_eq!(find_by_key(&data, |r| r.0.clone(), &"B".to_string()), None);
        let empty: Vec<(String, bool)> = Vec::new();
        assert_eq!(find_by_key(&empty, |r| r.0.clone(), &"A".to_string()), None);
    }

    #[test]
    fn filtered_search_picks_qualifying_duplicate() {
        // Three stays for "B"; only the middle one is still active.
        let data = keys(&[
            ("A", false),
            ("B", false),
            ("B", true),
            ("B", false),
            ("C", false),
        ]);
        let idx = find_by_key_where(&data, |r| r.0.clone(), &"B".to_string(), |r| r.1);
        assert_eq!(idx, Some(2));
    }

    #[test]
    fn filtered_search_rejects_block_without_match() {
        let data = keys(&[("B", false), ("B", false)]);
        let idx = find_by_key_where(&data, |r| r.0.clone(), &"B".to_string(), |r| r.1);
        assert_eq!(idx, None);
    }

    #[test]
    fn filtered_search_scans_block_at_slice_edges() {
        let data = keys(&[("B", false), ("B", true)]);
        let idx = find_by_key_where(&data, |r| r.0.clone(), &"B".to_string(), |r| r.1);
        assert_eq!(idx, Some(1));
    }
}
