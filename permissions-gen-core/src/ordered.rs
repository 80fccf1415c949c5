//! Insertion-ordered string set

use indexmap::IndexSet;

/// Ordered collection of unique, non-empty strings.
///
/// Iteration yields values in first-insertion order; inserting a value that is
/// already present (or empty) is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: IndexSet<String>,
}

impl OrderedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning `true` if it was newly added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.is_empty() {
            return false;
        }
        self.items.insert(item)
    }

    /// Whether `item` has been inserted.
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The earliest inserted value.
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Consume the set, keeping insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items.into_iter().collect()
    }
}

impl<S: Into<String>> Extend<S> for OrderedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_first_seen_order() {
        let set: OrderedSet = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_rejects_empty_and_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("git"));
        assert!(!set.insert("git"));
        assert!(!set.insert(""));
        assert_eq!(set.len(), 1);
        assert_eq!(set.first(), Some("git"));
        assert!(set.contains("git"));
    }
}
