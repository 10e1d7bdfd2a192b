//! Identifier -> codepoint record

use crate::codepoint::Codepoint;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from icon identifier to its assigned codepoint
///
/// Backed by a `BTreeMap`, so iteration and serialization are always in
/// ascending identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodepointRecord {
    entries: BTreeMap<String, Codepoint>,
}

impl CodepointRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Codepoint assigned to `identifier`
    pub fn get(&self, identifier: &str) -> Option<Codepoint> {
        self.entries.get(identifier).copied()
    }

    /// Whether `identifier` has an assignment
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Assign a codepoint, returning the previous one
    pub fn insert(&mut self, identifier: impl Into<String>, codepoint: Codepoint) -> Option<Codepoint> {
        self.entries.insert(identifier.into(), codepoint)
    }

    /// Keep only entries for which `keep` returns true, returning the dropped ones
    pub fn drain_unless<F>(&mut self, mut keep: F) -> Vec<(String, Codepoint)>
    where
        F: FnMut(&str, Codepoint) -> bool,
    {
        let mut dropped = Vec::new();
        self.entries.retain(|identifier, codepoint| {
            if keep(identifier, *codepoint) {
                true
            } else {
                dropped.push((identifier.clone(), *codepoint));
                false
            }
        });
        dropped
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Codepoint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Identifiers in ascending order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Set of all assigned codepoints
    pub fn used_codepoints(&self) -> HashSet<Codepoint> {
        self.entries.values().copied().collect()
    }

    /// True when no two identifiers share a codepoint
    pub fn is_injective(&self) -> bool {
        self.used_codepoints().len() == self.entries.len()
    }
}

impl FromIterator<(String, Codepoint)> for CodepointRecord {
    fn from_iter<I: IntoIterator<Item = (String, Codepoint)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u32)> for CodepointRecord {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), Codepoint::new(v)))
            .collect()
    }
}
