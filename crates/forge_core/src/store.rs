use indexmap::IndexMap;

/// In-memory virtual project: filename -> latest scraped content.
///
/// Insertion order is preserved so the file tree, preview synthesis and
/// export all see files in the order they were first discovered. The scraper
/// only ever adds or overwrites whole entries; there is no single-file
/// deletion, only a full clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileStore {
    entries: IndexMap<String, String>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or overwrites an entry. Returns true when the stored value
    /// actually changed, so callers can suppress pointless re-renders.
    pub fn upsert(&mut self, name: impl Into<String>, content: impl Into<String>) -> bool {
        let name = name.into();
        let content = content.into();
        match self.entries.get(&name) {
            Some(existing) if *existing == content => false,
            _ => {
                self.entries.insert(name, content);
                true
            }
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Name of the first-inserted file, used for auto-selection.
    pub fn first_name(&self) -> Option<&str> {
        self.entries.keys().next().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    /// Owned copy of all entries in insertion order, for the synthesizer
    /// and the exporter.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(name, content)| (name.clone(), content.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FileStore;

    #[test]
    fn upsert_reports_real_changes_only() {
        let mut store = FileStore::new();
        assert!(store.upsert("index.html", "<p>hi</p>"));
        assert!(!store.upsert("index.html", "<p>hi</p>"));
        assert!(store.upsert("index.html", "<p>bye</p>"));
        assert_eq!(store.get("index.html"), Some("<p>bye</p>"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn overwrite_keeps_insertion_position() {
        let mut store = FileStore::new();
        store.upsert("a.js", "1");
        store.upsert("b.js", "2");
        store.upsert("a.js", "3");
        let names: Vec<_> = store.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["a.js", "b.js"]);
        assert_eq!(store.first_name(), Some("a.js"));
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = FileStore::new();
        store.upsert("style.css", "p{}");
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.first_name(), None);
    }
}
