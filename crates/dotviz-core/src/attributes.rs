//! Attribute maps attached to graphs, nodes and edges.
//!
//! An [`Attributes`] value is an order-preserving `key=value` map. Keys are
//! unique; inserting an existing key replaces its value in place so the
//! original key order is kept.

use indexmap::IndexMap;

/// Order-preserving map of attribute names to raw string values.
///
/// Values are stored exactly as written in the source (after unquoting), so
/// colors, labels and shapes are interpreted only where they are drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or replaces a value. The position of an existing key is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the union of `self` and `incoming`.
    ///
    /// Keys present in `incoming` overwrite the same keys in `self`; every
    /// other key is retained. Neither input is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotviz_core::attributes::Attributes;
    ///
    /// let existing: Attributes = [("color", "red"), ("label", "A")].into_iter().collect();
    /// let incoming: Attributes = [("color", "blue"), ("shape", "box")].into_iter().collect();
    ///
    /// let merged = existing.merge(&incoming);
    /// assert_eq!(merged.get("color"), Some("blue"));
    /// assert_eq!(merged.get("label"), Some("A"));
    /// assert_eq!(merged.get("shape"), Some("box"));
    /// assert_eq!(existing.get("color"), Some("red"));
    /// ```
    pub fn merge(&self, incoming: &Attributes) -> Attributes {
        let mut merged = self.clone();
        for (key, value) in &incoming.entries {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}
