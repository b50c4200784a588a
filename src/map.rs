//! Ordered map type for mapping nodes.
//!
//! This module provides [`NodeMap`], a wrapper around [`IndexMap`] that keeps
//! mapping entries in document order. Document order matters for error
//! reporting (entries are decoded in the order they appeared) even though it
//! carries no semantic meaning for the decoded value.
//!
//! ## Why IndexMap?
//!
//! `NodeMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Document order**: entries iterate in the order the source document
//!   listed them
//! - **Deterministic errors**: the first failing entry is the first failing
//!   entry of the document, not of a hash order
//!
//! ## Examples
//!
//! ```rust
//! use node_decode::{Node, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("name".to_string(), Node::from("Alice"));
//! map.insert("age".to_string(), Node::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|n| n.as_scalar()), Some("Alice"));
//! ```

use indexmap::IndexMap;

/// An ordered map of string keys to nodes.
///
/// A thin wrapper around [`IndexMap`] that preserves document order, so
/// decoding and error reporting walk entries in the order the source listed
/// them.
///
/// # Examples
///
/// ```rust
/// use node_decode::{Node, NodeMap};
///
/// let mut map = NodeMap::new();
/// map.insert("first".to_string(), Node::from(1));
/// map.insert("second".to_string(), Node::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(IndexMap<String, crate::Node>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Duplicate keys follow `IndexMap` semantics: the last value wins, the
    /// key keeps its original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use node_decode::{Node, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), Node::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Node::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Node) -> Option<crate::Node> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Node> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in document order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Node> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Node> {
        self.0.iter()
    }
}

impl From<NodeMap> for IndexMap<String, crate::Node> {
    fn from(map: NodeMap) -> Self {
        map.0
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a crate::Node);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, crate::Node);
    type IntoIter = indexmap::map::IntoIter<String, crate::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Node)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[test]
    fn duplicate_keys_keep_position_last_value_wins() {
        let mut map = NodeMap::new();
        map.insert("a".to_string(), Node::from(1));
        map.insert("b".to_string(), Node::from(2));
        map.insert("a".to_string(), Node::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Node::from(3)));
    }

    #[test]
    fn collects_and_iterates_in_document_order() {
        let entries = [("b", 2), ("a", 1)];
        let map: NodeMap = entries
            .iter()
            .map(|(key, value)| (key.to_string(), Node::from(*value)))
            .collect();

        let borrowed: Vec<_> = (&map).into_iter().map(|(key, _)| key.clone()).collect();
        assert_eq!(borrowed, vec!["b", "a"]);

        let inner: IndexMap<String, Node> = map.clone().into();
        assert_eq!(inner.get_index(0).map(|(key, _)| key.as_str()), Some("b"));

        let owned: Vec<_> = map.into_iter().map(|(key, _)| key).collect();
        assert_eq!(owned, vec!["b", "a"]);
    }
}
