// File: hashline/src/extras.rs
// Purpose: Pop-once correlation cache for navigation extras

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Correlates a pending navigation's auxiliary payload with its eventual
/// resolution
///
/// Keys are canonical paths. An entry is written when a navigation request
/// supplies extras and destroyed on the first pop for that path, so each
/// payload is delivered at most once.
#[derive(Debug, Default)]
pub struct ExtrasCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl ExtrasCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores extras for a canonical path. Last write wins.
    pub fn set(&self, path: impl Into<String>, extras: Value) {
        self.entries.lock().unwrap().insert(path.into(), extras);
    }

    /// Takes the extras stored for a canonical path, removing the entry
    ///
    /// The read-and-remove happens under one lock acquisition: no observer
    /// can see the entry both before and after a concurrent pop.
    pub fn pop(&self, path: &str) -> Option<Value> {
        self.entries.lock().unwrap().remove(path)
    }

    /// Number of pending entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pop_removes_entry() {
        let cache = ExtrasCache::new();
        cache.set("/about", json!({"referrer": "menu"}));

        assert_eq!(cache.pop("/about"), Some(json!({"referrer": "menu"})));
        assert_eq!(cache.pop("/about"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_pop_absent_path() {
        let cache = ExtrasCache::new();
        assert_eq!(cache.pop("/missing"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let cache = ExtrasCache::new();
        cache.set("/about", json!(1));
        cache.set("/about", json!(2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.pop("/about"), Some(json!(2)));
    }

    #[test]
    fn test_entries_are_independent_per_path() {
        let cache = ExtrasCache::new();
        cache.set("/a", json!("a"));
        cache.set("/b", json!("b"));

        assert_eq!(cache.pop("/a"), Some(json!("a")));
        assert_eq!(cache.pop("/b"), Some(json!("b")));
    }
}
