use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first row seen for each key and drops the rest.
///
/// Callers feed rows newest first, so the survivor for a (place, date) key
/// is the latest observation of that day. Values are never combined.
pub fn keep_first<T, K, I, F>(rows: I, mut key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    rows.into_iter().filter(|row| seen.insert(key(row))).collect()
}
