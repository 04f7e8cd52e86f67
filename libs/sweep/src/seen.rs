//! # Seen-Name Set
//!
//! Canonical names already requested during one run. Created empty, grows
//! monotonically, never persisted.

use std::collections::HashSet;

/// Names already requested, with their first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SeenNames {
    names: HashSet<String>,
    order: Vec<String>,
}

impl SeenNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as seen.
    ///
    /// Returns true when the name is new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
