//! Ordered sets keyed by a pluggable equality relation.
//!
//! Cross-document list merging needs two dedup relations that `HashSet`
//! cannot express directly: case-insensitive comparison for file names and
//! semantic equivalence for license expressions. [`OrderedSet`] makes the
//! dedup contract first-class: first occurrence wins, insertion order is
//! preserved, and the equality relation is supplied by the caller.

use crate::model::LicenseExpression;

/// An insertion-ordered set with a caller-supplied equality relation.
///
/// Membership checks are a linear scan, which is the right trade-off here:
/// excluded-name and seen-license lists are small, and the equality
/// relations (case-folding, expression parsing) do not hash cleanly.
#[derive(Debug)]
pub struct OrderedSet<T, E>
where
    E: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    eq: E,
}

impl<T, E> OrderedSet<T, E>
where
    E: Fn(&T, &T) -> bool,
{
    /// Create an empty set using the given equality relation
    pub fn new(eq: E) -> Self {
        Self {
            items: Vec::new(),
            eq,
        }
    }

    /// Insert an item unless an equal one is already present.
    ///
    /// Returns `true` if the item was inserted. The first occurrence is the
    /// one retained; later duplicates are dropped silently.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Insert every item from an iterator, keeping first occurrences
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }

    /// Check whether an equal item is already present
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| (self.eq)(existing, item))
    }

    /// Number of retained items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the set, yielding items in first-seen insertion order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// Case-insensitive equality for file names
fn names_equal(a: &String, b: &String) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Semantic equality for license expressions
fn licenses_equal(a: &LicenseExpression, b: &LicenseExpression) -> bool {
    a.is_equivalent(b)
}

impl OrderedSet<String, fn(&String, &String) -> bool> {
    /// An ordered set of strings deduplicated case-insensitively
    pub fn case_insensitive() -> Self {
        Self::new(names_equal)
    }
}

impl OrderedSet<LicenseExpression, fn(&LicenseExpression, &LicenseExpression) -> bool> {
    /// An ordered set of license expressions deduplicated by semantic
    /// equivalence
    pub fn semantic() -> Self {
        Self::new(licenses_equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut set = OrderedSet::case_insensitive();
        assert!(set.insert("B.TXT".to_string()));
        assert!(!set.insert("b.txt".to_string()));
        // The original casing of the first occurrence is retained
        assert_eq!(set.into_vec(), ["B.TXT"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = OrderedSet::case_insensitive();
        set.extend(["c".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(set.into_vec(), ["c", "a", "b"]);
    }

    #[test]
    fn test_semantic_license_dedup() {
        let mut set = OrderedSet::semantic();
        assert!(set.insert(LicenseExpression::new("MIT OR Apache-2.0")));
        assert!(!set.insert(LicenseExpression::new("MIT or Apache-2.0")));
        assert!(set.insert(LicenseExpression::new("MIT")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contains_uses_relation() {
        let mut set = OrderedSet::case_insensitive();
        set.insert("ReadMe.md".to_string());
        assert!(set.contains(&"README.MD".to_string()));
        assert!(!set.contains(&"CHANGELOG.md".to_string()));
    }

    #[test]
    fn test_empty_set() {
        let set = OrderedSet::case_insensitive();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
