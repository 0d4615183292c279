//! Navigation history
//!
//! The terminal analog of the browser history stack plus the `?city=`
//! query string: a list of entries with a cursor, where each entry is
//! either a city name or the empty initial entry. The query readout is
//! the URL-encoded mirror of whatever the cursor rests on.

/// History stack with cursor and query readout.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    entries: Vec<Option<String>>,
    cursor: usize,
    query: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Start with the single empty entry.
    pub fn new() -> Self {
        Self {
            entries: vec![None],
            cursor: 0,
            query: None,
        }
    }

    /// City of the entry the cursor rests on, if any.
    pub fn current(&self) -> Option<&str> {
        self.entries[self.cursor].as_deref()
    }

    /// The `city=<encoded>` readout, if a city is requested or shown.
    pub fn query_readout(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Number of entries (for tests and diagnostics).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push a new entry for a successful user-initiated lookup.
    ///
    /// Forward entries past the cursor are discarded first, matching
    /// how a browser truncates the redo tail on a new navigation.
    pub fn push(&mut self, city: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Some(city.to_string()));
        self.cursor = self.entries.len() - 1;
        self.query = Some(encode_query(city));
    }

    /// Show a requested city in the readout without touching entries.
    ///
    /// Used by the deep link at startup: the initial entry stays empty
    /// so backing out of the deep-linked lookup resets to idle.
    pub fn set_requested(&mut self, city: &str) {
        self.query = Some(encode_query(city));
    }

    /// Move the cursor back one entry.
    ///
    /// Returns `None` at the oldest entry (no-op), otherwise the entry
    /// the cursor now rests on.
    pub fn back(&mut self) -> Option<Option<String>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.sync_query();
        Some(self.entries[self.cursor].clone())
    }

    /// Move the cursor forward one entry; `None` at the newest.
    pub fn forward(&mut self) -> Option<Option<String>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.sync_query();
        Some(self.entries[self.cursor].clone())
    }

    fn sync_query(&mut self) {
        self.query = self.entries[self.cursor].as_deref().map(encode_query);
    }
}

fn encode_query(city: &str) -> String {
    format!("city={}", urlencoding::encode(city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_empty_entry() {
        let nav = NavigationState::new();
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.query_readout(), None);
    }

    #[test]
    fn test_push_updates_readout() {
        let mut nav = NavigationState::new();
        nav.push("Paris");
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.current(), Some("Paris"));
        assert_eq!(nav.query_readout(), Some("city=Paris"));
    }

    #[test]
    fn test_readout_is_url_encoded() {
        let mut nav = NavigationState::new();
        nav.push("New York");
        assert_eq!(nav.query_readout(), Some("city=New%20York"));
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = NavigationState::new();
        nav.push("Paris");
        nav.push("Tokyo");

        assert_eq!(nav.back(), Some(Some("Paris".to_string())));
        assert_eq!(nav.query_readout(), Some("city=Paris"));

        assert_eq!(nav.back(), Some(None));
        assert_eq!(nav.query_readout(), None);

        assert_eq!(nav.back(), None, "no-op at the oldest entry");

        assert_eq!(nav.forward(), Some(Some("Paris".to_string())));
        assert_eq!(nav.forward(), Some(Some("Tokyo".to_string())));
        assert_eq!(nav.forward(), None, "no-op at the newest entry");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut nav = NavigationState::new();
        nav.push("Paris");
        nav.push("Tokyo");
        nav.back();

        nav.push("Kyiv");
        assert_eq!(nav.len(), 3, "Tokyo entry discarded");
        assert_eq!(nav.current(), Some("Kyiv"));
        assert_eq!(nav.forward(), None);
    }

    #[test]
    fn test_deep_link_readout_without_entry() {
        let mut nav = NavigationState::new();
        nav.set_requested("Tokyo");
        assert_eq!(nav.len(), 1, "no entry pushed");
        assert_eq!(nav.current(), None);
        assert_eq!(nav.query_readout(), Some("city=Tokyo"));
    }
}
