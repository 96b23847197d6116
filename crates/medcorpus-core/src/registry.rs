//! Insertion-ordered, id-addressable collections of content records.
//!
//! Every query is a linear scan; registries hold tens of records and are
//! built once, then only read.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{Error, Result};
use crate::traits::Record;

#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    by_id: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), by_id: HashMap::new() }
    }
}

impl<T: Record> Registry<T> {
    /// Builds a registry from built-in data. A repeated id replaces the earlier
    /// record in its original position.
    pub fn from_entries<I: IntoIterator<Item = T>>(entries: I) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            registry.upsert(entry);
        }
        registry
    }

    /// Builds a registry, rejecting any repeated id.
    pub fn try_from_entries<I: IntoIterator<Item = T>>(entries: I) -> Result<Self> {
        let mut registry = Self::default();
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entry: T) -> Result<()> {
        if self.by_id.contains_key(entry.id()) {
            return Err(Error::DuplicateId(entry.id().to_string()));
        }
        self.by_id.insert(entry.id().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn upsert(&mut self, entry: T) {
        match self.by_id.get(entry.id()) {
            Some(&idx) => {
                warn!(id = entry.id(), "duplicate registry id, replacing earlier record");
                self.entries[idx] = entry;
            }
            None => {
                self.by_id.insert(entry.id().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Case-insensitive substring match over each record's search fields.
    /// The empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let q = query.to_lowercase();
        self.filter(|entry| entry.search_fields().iter().any(|f| f.to_lowercase().contains(&q)))
    }

    pub fn filter<F>(&self, mut predicate: F) -> Vec<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.iter().filter(|e| predicate(*e)).collect()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id())
    }

    /// Merges `other` into this registry, failing on the first id already present.
    pub fn extend_strict<I: IntoIterator<Item = T>>(&mut self, other: I) -> Result<()> {
        for entry in other {
            self.insert(entry)?;
        }
        Ok(())
    }
}

/// Case-insensitive substring match against any element of a list field.
pub fn any_contains<S: AsRef<str>>(items: &[S], term: &str) -> bool {
    let needle = term.to_lowercase();
    items.iter().any(|item| item.as_ref().to_lowercase().contains(&needle))
}
