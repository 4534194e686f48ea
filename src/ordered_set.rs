//! Insertion-ordered collection of unique values.

use std::collections::HashSet;
use std::hash::Hash;

/// A set that remembers the order values were first inserted in.
///
/// Re-inserting a value already present is a no-op and keeps its original
/// position.
///
/// # Examples
///
/// ```
/// use robots_txt_builder::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert("b"));
/// assert!(set.insert("a"));
/// assert!(!set.insert("b"));
/// assert_eq!(set.as_slice(), ["b", "a"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns the values in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    /// Appends `value` unless it is already present.
    ///
    /// Returns true if the value was new.
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}
