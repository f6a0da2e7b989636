//! Set differencing.
//!
//! `added`, `removed` and `unchanged` partition `before ∪ after`, and the
//! result is symmetric under swap: `diff(b, a).added == diff(a, b).removed`.
//! Equality is exact (`Ord` on `T`); strings are compared byte-for-byte.

use std::collections::BTreeSet;

/// Three-way split of two sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDelta<T: Ord> {
    /// In `after` only
    pub added: BTreeSet<T>,
    /// In `before` only
    pub removed: BTreeSet<T>,
    /// In both
    pub unchanged: BTreeSet<T>,
}

impl<T: Ord> SetDelta<T> {
    /// True if anything was added or removed
    pub fn is_changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Compute `(after − before, before − after, before ∩ after)`
pub fn diff<T: Ord + Clone>(before: &BTreeSet<T>, after: &BTreeSet<T>) -> SetDelta<T> {
    SetDelta {
        added: after.difference(before).cloned().collect(),
        removed: before.difference(after).cloned().collect(),
        unchanged: before.intersection(after).cloned().collect(),
    }
}
