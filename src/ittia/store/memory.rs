use super::AbbrevStore;
use crate::error::Result;
use std::collections::BTreeMap;

/// In-memory abbreviation store: no persistence. Used in tests and by hosts
/// that manage persistence themselves.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for test fixtures.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl AbbrevStore for InMemoryStore {
    fn load(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.entries = entries.clone();
        Ok(())
    }
}
