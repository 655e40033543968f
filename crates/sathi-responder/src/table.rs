//! Response table: normalized query -> canned answer, with a fallback

use std::collections::HashMap;

use sathi_core::{Result, SathiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
    fallback: String,
}

impl ResponseTable {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Lowercases a query the way lookups do. No trimming or punctuation handling.
    pub fn normalize(query: &str) -> String {
        query.to_lowercase()
    }

    /// Adds an answer. Fails if the normalized key is already present.
    pub fn insert(&mut self, key: &str, response: impl Into<String>) -> Result<()> {
        let normalized = Self::normalize(key);
        if self.entries.contains_key(&normalized) {
            return Err(SathiError::Config(format!(
                "duplicate response key '{}' (normalized: '{}')",
                key, normalized
            )));
        }
        self.entries.insert(normalized, response.into());
        Ok(())
    }

    pub fn with_response(mut self, key: &str, response: impl Into<String>) -> Result<Self> {
        self.insert(key, response)?;
        Ok(self)
    }

    /// Returns the matched answer, or the fallback when nothing matches.
    pub fn lookup(&self, query: &str) -> &str {
        self.get(query).unwrap_or(self.fallback.as_str())
    }

    pub fn get(&self, query: &str) -> Option<&str> {
        self.entries
            .get(&Self::normalize(query))
            .map(|s| s.as_str())
    }

    pub fn contains(&self, query: &str) -> bool {
        self.get(query).is_some()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
