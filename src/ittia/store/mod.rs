//! Abbreviation storage.
//!
//! The expansion engine only ever consults the in-memory table; persistence
//! sits behind the [`AbbrevStore`] trait so the table keeps working when the
//! backing file is unavailable. Backends persist the whole document at once:
//!
//! - [`fs::FileStore`]: pretty-printed JSON on disk
//! - [`memory::InMemoryStore`]: no persistence, for tests and headless use

use crate::error::Result;
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Starter entries shipped with a fresh table.
const SEED_EXAMPLES: [(&str, &str); 2] = [("c", "hypercholesterolemia"), ("to", "hypothyroidism")];

/// Whole-document persistence for the abbreviation table.
pub trait AbbrevStore {
    /// Load all persisted entries. A missing document loads empty.
    fn load(&self) -> Result<BTreeMap<String, String>>;

    /// Persist all entries, replacing the previous document.
    fn save(&mut self, entries: &BTreeMap<String, String>) -> Result<()>;
}

/// The abbreviation table: an exact-match, case-sensitive mapping from short
/// token (without the `:` trigger) to expansion text.
///
/// Mutations update the in-memory map first and persist second, so a failing
/// backend degrades persistence only: the error surfaces to the caller while
/// expansion keeps seeing the change.
pub struct AbbreviationTable<S: AbbrevStore> {
    entries: BTreeMap<String, String>,
    store: S,
}

impl<S: AbbrevStore> AbbreviationTable<S> {
    /// Load the table from the backend.
    pub fn open(store: S) -> Result<Self> {
        let entries = store.load()?;
        Ok(Self { entries, store })
    }

    /// Insert the shipped starter entries, never overwriting user entries.
    pub fn seed_examples(&mut self) -> Result<()> {
        let mut changed = false;
        for (short, full) in SEED_EXAMPLES {
            if !self.entries.contains_key(short) {
                self.entries.insert(short.to_string(), full.to_string());
                changed = true;
            }
        }
        if changed {
            self.store.save(&self.entries)?;
        }
        Ok(())
    }

    pub fn get(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(String::as_str)
    }

    /// Find is get by another name; kept for the manager dialog contract.
    pub fn find(&self, short: &str) -> Option<&str> {
        self.get(short)
    }

    /// Add a new entry. An existing key is left untouched; blank fields are
    /// rejected. Returns whether the entry was added.
    pub fn define(&mut self, short: &str, full: &str) -> Result<bool> {
        let (short, full) = (short.trim(), full.trim());
        if short.is_empty() || full.is_empty() || self.entries.contains_key(short) {
            return Ok(false);
        }
        self.entries.insert(short.to_string(), full.to_string());
        self.store.save(&self.entries)?;
        Ok(true)
    }

    /// Replace the expansion of an existing entry. Returns whether the key
    /// existed; a missing key is not an error.
    pub fn redefine(&mut self, short: &str, full: &str) -> Result<bool> {
        let (short, full) = (short.trim(), full.trim());
        if short.is_empty() || full.is_empty() {
            return Ok(false);
        }
        match self.entries.get_mut(short) {
            Some(value) => {
                *value = full.to_string();
                self.store.save(&self.entries)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an entry. Returns whether the key existed.
    pub fn remove(&mut self, short: &str) -> Result<bool> {
        if self.entries.remove(short.trim()).is_none() {
            return Ok(false);
        }
        self.store.save(&self.entries)?;
        Ok(true)
    }

    /// All entries, sorted by short form.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
