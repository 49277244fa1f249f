//! The generalization environment: which fresh variable stands for which
//! pair of original subterms.

use crate::Name;

/// One disagreement point: `var` generalizes `left` (from the first input)
/// and `right` (from the second).
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Entry<T> {
    pub var: Name,
    pub left: T,
    pub right: T,
}

/// Append-only mapping from generalization variables to the subterm pairs
/// they stand for. Generic over the term representation so the first-order
/// and higher-order engines share it.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Env<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Env<T> {
    fn default() -> Self {
        Env {
            entries: Vec::new(),
        }
    }
}

impl<T> Env<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `var` generalizes the pair `(left, right)`.
    pub fn bind(&mut self, var: Name, left: T, right: T) {
        self.entries.push(Entry { var, left, right });
    }

    pub fn lookup(&self, var: &Name) -> Option<&Entry<T>> {
        self.entries.iter().find(|entry| &entry.var == var)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: PartialEq> Env<T> {
    /// Find the variable already standing for exactly this `(left, right)`
    /// pair, if any. A linear scan with order-sensitive pair equality:
    /// an entry for `(a, b)` does not serve a probe for `(b, a)`.
    pub fn reuse(&self, left: &T, right: &T) -> Option<&Name> {
        self.entries
            .iter()
            .find(|entry| &entry.left == left && &entry.right == right)
            .map(|entry| &entry.var)
    }
}
