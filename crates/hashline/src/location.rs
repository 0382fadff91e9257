// File: hashline/src/location.rs
// Purpose: The location collaborator - current fragment, change notifications,
// fragment writes

use std::sync::Mutex;

use tokio::sync::watch;

/// The external location the router reads from and writes to
///
/// In a browser host this wraps `window.location` and the hashchange event;
/// [`MemoryLocation`] implements the same contract in memory for tests and
/// headless hosts. Implementations notify every fragment write through the
/// watch channel returned by [`changes`](LocationSource::changes), which also
/// carries the fragment currently in effect.
pub trait LocationSource: Send + Sync {
    /// The raw fragment currently in effect
    fn fragment(&self) -> String;

    /// Adopt `fragment`, appending a new history entry
    fn assign(&self, fragment: &str);

    /// Adopt `fragment`, replacing the current history entry
    fn replace(&self, fragment: &str);

    /// Subscribe to fragment changes. The receiver holds the current
    /// fragment and wakes on every write.
    fn changes(&self) -> watch::Receiver<String>;
}

/// In-memory location backed by a watch channel and a history stack
///
/// `assign` grows the history, `replace` swaps its top entry, so the two
/// write modes stay observable without a browser.
#[derive(Debug)]
pub struct MemoryLocation {
    current: watch::Sender<String>,
    history: Mutex<Vec<String>>,
}

impl MemoryLocation {
    /// Creates a location with an empty fragment, like a freshly loaded page
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// Creates a location already sitting on `fragment`
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            current: watch::Sender::new(fragment.to_string()),
            history: Mutex::new(vec![fragment.to_string()]),
        }
    }

    /// Snapshot of the history entries, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for MemoryLocation {
    fn fragment(&self) -> String {
        self.current.borrow().clone()
    }

    fn assign(&self, fragment: &str) {
        self.history.lock().unwrap().push(fragment.to_string());
        self.current.send_replace(fragment.to_string());
    }

    fn replace(&self, fragment: &str) {
        {
            let mut history = self.history.lock().unwrap();
            history.pop();
            history.push(fragment.to_string());
        }
        self.current.send_replace(fragment.to_string());
    }

    fn changes(&self) -> watch::Receiver<String> {
        self.current.subscribe()
    }
}
