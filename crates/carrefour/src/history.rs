//! Navigation-history strategies and the host integration seam.
//!
//! The router never talks to the browser directly. It formats route paths
//! into visible locations according to a [`HistoryMode`], and hands them to
//! a [`HistoryProvider`], the seam a host environment implements to keep the
//! address bar and back/forward behavior in sync. [`MemoryHistory`] is the
//! built-in provider used by native hosts and tests.

/// How route paths map to the externally-visible address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Clean URLs backed by the host's native history APIs, e.g. `/students`.
    #[default]
    Web,
    /// Fragment-based addressing, e.g. `/#/students`. Useful when the host
    /// cannot rewrite requests to a single entrypoint.
    Hash,
}

impl HistoryMode {
    /// Formats a route path into the location string shown to the host.
    pub fn format(&self, path: &str) -> String {
        match self {
            HistoryMode::Web => path.to_string(),
            HistoryMode::Hash => format!("/#{}", path),
        }
    }

    /// Extracts the route path out of a location string, dropping any query
    /// string. In web mode a fragment is a real in-page anchor and is
    /// dropped too; in hash mode the fragment *is* the route path.
    pub fn extract(&self, location: &str) -> String {
        let path = match self {
            HistoryMode::Web => location.split('#').next().unwrap_or(location),
            HistoryMode::Hash => location.split_once('#').map(|(_, hash)| hash).unwrap_or("/"),
        };

        let path = path.split('?').next().unwrap_or(path);

        if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        }
    }
}

/// The host-environment side of history handling.
///
/// Implementations own the session history: an ordered list of visited
/// locations and a cursor into it. Browser hosts delegate to the native
/// history APIs; everything else can use [`MemoryHistory`].
pub trait HistoryProvider: Send {
    /// The currently visible location.
    fn location(&self) -> String;

    /// Appends a new entry after the current one, dropping any forward
    /// entries.
    fn push(&mut self, location: String);

    /// Replaces the current entry in place, leaving the rest of the session
    /// history untouched.
    fn replace(&mut self, location: String);

    /// Moves one entry back, returning the new location, or `None` when
    /// already at the oldest entry.
    fn back(&mut self) -> Option<String>;

    /// Moves one entry forward, returning the new location, or `None` when
    /// already at the newest entry.
    fn forward(&mut self) -> Option<String>;
}

/// An in-process [`HistoryProvider`] with standard session-history
/// semantics: pushing after going back truncates the forward branch.
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Number of entries in the session history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryProvider for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, location: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, location: String) {
        self.entries[self.index] = location;
    }

    fn back(&mut self) -> Option<String> {
        if self.index == 0 {
            return None;
        }

        self.index -= 1;
        Some(self.location())
    }

    fn forward(&mut self) -> Option<String> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }

        self.index += 1;
        Some(self.location())
    }
}
