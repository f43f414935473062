//! Linear history stack with a cursor.

use serde::Serialize;

/// One committed navigation.
///
/// `path` is the external path as it appears in the address bar (base
/// prefix included), so entries double as shareable URLs. `route` is the
/// unique name of the resolved route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub path: String,
    pub route: String,
}

impl HistoryEntry {
    pub fn new(path: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            route: route.into(),
        }
    }
}

/// Serializable dump of the whole stack, used by diagnostics.
#[derive(Debug, Serialize)]
pub struct HistorySnapshot {
    pub entries: Vec<HistoryEntry>,
    pub cursor: Option<usize>,
}

/// Browser-model history: a linear entry list plus a cursor.
///
/// Pushing while the cursor is not at the end drops the forward branch,
/// exactly as the browser's back/forward stack does.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new entry, truncating any forward entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map(|c| c + 1).unwrap_or(0);
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Swap the current entry without growing the stack.
    ///
    /// On an empty stack this behaves like a push.
    pub fn replace(&mut self, entry: HistoryEntry) {
        match self.cursor {
            Some(c) => self.entries[c] = entry,
            None => self.push(entry),
        }
    }

    /// Step the cursor back, returning the entry stepped to.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        let c = self.cursor?;
        if c == 0 {
            return None;
        }
        self.cursor = Some(c - 1);
        self.entries.get(c - 1)
    }

    /// Step the cursor forward, returning the entry stepped to.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        let c = self.cursor?;
        if c + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(c + 1);
        self.entries.get(c + 1)
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor?)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.map(|c| c > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor
            .map(|c| c + 1 < self.entries.len())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the whole stack for diagnostics.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            entries: self.entries.clone(),
            cursor: self.cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> HistoryEntry {
        HistoryEntry::new(path, path.trim_start_matches('/'))
    }

    #[test]
    fn test_push_and_current() {
        let mut history = History::new();
        assert!(history.current().is_none());

        history.push(entry("/game"));
        assert_eq!(history.current().unwrap().path, "/game");
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        history.push(entry("/"));
        history.push(entry("/game"));
        history.push(entry("/about"));

        assert_eq!(history.back().unwrap().path, "/game");
        assert_eq!(history.back().unwrap().path, "/");
        assert!(history.back().is_none());

        assert_eq!(history.forward().unwrap().path, "/game");
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_push_truncates_forward_branch() {
        let mut history = History::new();
        history.push(entry("/"));
        history.push(entry("/game"));
        history.push(entry("/about"));
        history.back();
        history.back();

        history.push(entry("/game"));
        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.current().unwrap().path, "/game");
    }

    #[test]
    fn test_replace() {
        let mut history = History::new();
        history.replace(entry("/"));
        assert_eq!(history.len(), 1);

        history.push(entry("/game"));
        history.replace(entry("/about"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().unwrap().path, "/about");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut history = History::new();
        history.push(entry("/game"));
        let json = serde_json::to_string(&history.snapshot()).unwrap();
        assert!(json.contains("\"cursor\":0"));
        assert!(json.contains("/game"));
    }
}
