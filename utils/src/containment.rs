//! Set containment between identifier collections.
//!
//! Both inputs are sequences treated as sets. Matching is exact and
//! case-sensitive; nothing is trimmed or normalized. `available` is indexed
//! once, so a check costs O(|available| + |required|).

use std::collections::HashSet;

/// True iff every element of `required` appears in `available`.
///
/// An empty `required` is always contained.
#[must_use]
pub fn contains_all<R, A>(required: &[R], available: &[A]) -> bool
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    if required.is_empty() {
        return true;
    }
    let index = index_of(available);
    required.iter().all(|item| index.contains(item.as_ref()))
}

/// Elements of `required` absent from `available`, in `required` order, without repeats.
#[must_use]
pub fn missing_elements<'r, R, A>(required: &'r [R], available: &[A]) -> Vec<&'r str>
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    if required.is_empty() {
        return Vec::new();
    }
    let index = index_of(available);
    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for item in required {
        let item: &str = item.as_ref();
        if !index.contains(item) && seen.insert(item) {
            missing.push(item);
        }
    }
    missing
}

fn index_of<A: AsRef<str>>(available: &[A]) -> HashSet<&str> {
    available.iter().map(AsRef::as_ref).collect()
}
