//! Codepoint maintenance pass
//!
//! Brings a loaded record in line with the icons currently on disk:
//! 1. Prune entries whose icon no longer exists
//! 2. Evict all but one holder of any codepoint claimed twice
//! 3. Allocate the smallest free codepoint at or above base to every
//!    identifier without an entry, in ascending identifier order
//!
//! Codepoints of icons that still exist are never touched (except to
//! break a collision), so glyphs keep their codepoint across rebuilds.

use crate::codepoint::{Codepoint, DEFAULT_BASE, PRIVATE_USE_END};
use crate::error::Error;
use crate::record::CodepointRecord;
use crate::Result;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

/// An identifier moved off a codepoint it shared with another identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub identifier: String,
    pub from: Codepoint,
    pub to: Codepoint,
}

/// Edits applied by one maintenance pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Stale entries dropped from the record
    pub removed: Vec<(String, Codepoint)>,
    /// Newly observed identifiers and their fresh codepoints
    pub added: Vec<(String, Codepoint)>,
    /// Colliding entries moved to a fresh codepoint
    pub reassigned: Vec<Reassignment>,
}

impl ChangeSet {
    /// Whether the record differs from the one passed in
    pub fn changed(&self) -> bool {
        !(self.removed.is_empty() && self.added.is_empty() && self.reassigned.is_empty())
    }
}

/// Result of [`CodepointMaintainer::maintain`]
#[derive(Debug, Clone)]
pub struct Maintained {
    pub record: CodepointRecord,
    pub changes: ChangeSet,
}

impl Maintained {
    /// Shorthand for `self.changes.changed()`
    pub fn changed(&self) -> bool {
        self.changes.changed()
    }
}

/// Allocates and prunes codepoints within `[base, ceiling]`
#[derive(Debug, Clone, Copy)]
pub struct CodepointMaintainer {
    base: Codepoint,
    ceiling: Codepoint,
}

impl Default for CodepointMaintainer {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            ceiling: PRIVATE_USE_END,
        }
    }
}

impl CodepointMaintainer {
    /// Create a maintainer allocating within `[base, ceiling]`
    pub fn new(base: Codepoint, ceiling: Codepoint) -> Result<Self> {
        if base > ceiling {
            return Err(Error::InvalidRange { base, ceiling });
        }
        Ok(Self { base, ceiling })
    }

    /// Create a maintainer allocating from `base` up to the end of the private-use area
    pub fn with_base(base: Codepoint) -> Result<Self> {
        Self::new(base, PRIVATE_USE_END)
    }

    /// Lowest codepoint handed out
    pub fn base(&self) -> Codepoint {
        self.base
    }

    /// Highest codepoint handed out
    pub fn ceiling(&self) -> Codepoint {
        self.ceiling
    }

    /// Run one maintenance pass
    ///
    /// Pure: the record is taken by value and the updated one returned
    /// together with the list of edits. An empty change set means the
    /// persisted record does not need rewriting.
    pub fn maintain(&self, current: &BTreeSet<String>, mut record: CodepointRecord) -> Result<Maintained> {
        let mut changes = ChangeSet::default();

        // Prune
        changes.removed = record.drain_unless(|identifier, _| current.contains(identifier));
        for (identifier, codepoint) in &changes.removed {
            debug!("Removing stale icon {} ({})", identifier, codepoint);
        }

        // Collisions: the first holder in identifier order keeps the codepoint
        let evicted = evict_collisions(&mut record);

        // Allocate
        let mut used: HashSet<Codepoint> = record.used_codepoints();
        let mut probe = Some(self.base);
        let pending: Vec<&String> = current.iter().filter(|id| !record.contains(id)).collect();

        for identifier in pending {
            let codepoint = loop {
                match probe {
                    Some(candidate) if candidate <= self.ceiling => {
                        if used.contains(&candidate) {
                            probe = candidate.next();
                        } else {
                            break candidate;
                        }
                    }
                    _ => {
                        return Err(Error::CodepointSpaceExhausted {
                            base: self.base,
                            ceiling: self.ceiling,
                        })
                    }
                }
            };

            used.insert(codepoint);
            record.insert(identifier.clone(), codepoint);

            match evicted.get(identifier.as_str()) {
                Some(&from) => {
                    debug!("Reassigning {} from {} to {}", identifier, from, codepoint);
                    changes.reassigned.push(Reassignment {
                        identifier: identifier.clone(),
                        from,
                        to: codepoint,
                    });
                }
                None => {
                    debug!("Assigning {} to new icon {}", codepoint, identifier);
                    changes.added.push((identifier.clone(), codepoint));
                }
            }
        }

        Ok(Maintained { record, changes })
    }
}

/// Drop every entry whose codepoint is already held by an earlier identifier
///
/// Returns the evicted identifiers with the codepoint they lost.
fn evict_collisions(record: &mut CodepointRecord) -> HashMap<String, Codepoint> {
    let mut seen = HashSet::new();
    let evicted: HashMap<String, Codepoint> = record
        .drain_unless(|_, codepoint| seen.insert(codepoint))
        .into_iter()
        .collect();

    for (identifier, codepoint) in &evicted {
        warn!(
            "Codepoint {} is claimed by more than one icon; moving {} to a free codepoint",
            codepoint, identifier
        );
    }

    evicted
}
