//! Codepoint lookup handed to the font generator

use crate::codepoint::Codepoint;
use crate::record::CodepointRecord;

/// Resolves the codepoint a glyph is emitted at
///
/// The generator numbers glyphs with its own running counter. A glyph
/// with a pinned codepoint takes that codepoint and leaves the counter
/// where it was; any other glyph takes the generator's proposal and the
/// counter advances by one.
#[derive(Debug, Clone, Copy)]
pub struct CodepointResolver<'a> {
    record: &'a CodepointRecord,
}

impl<'a> CodepointResolver<'a> {
    pub fn new(record: &'a CodepointRecord) -> Self {
        Self { record }
    }

    /// Returns `(codepoint, next_counter)`
    pub fn resolve(&self, identifier: &str, proposed: Codepoint, counter: u32) -> (Codepoint, u32) {
        match self.record.get(identifier) {
            Some(pinned) => (pinned, counter),
            None => (proposed, counter.saturating_add(1)),
        }
    }

    /// Resolve a run of glyphs the way a sequential generator would
    ///
    /// The generator proposes its current counter value as the codepoint
    /// for each glyph, starting from `start`.
    pub fn resolve_all<'i, I>(&self, identifiers: I, start: Codepoint) -> Vec<(String, Codepoint)>
    where
        I: IntoIterator<Item = &'i str>,
    {
        let mut counter = start.value();
        identifiers
            .into_iter()
            .map(|identifier| {
                let (codepoint, next) = self.resolve(identifier, Codepoint::new(counter), counter);
                counter = next;
                (identifier.to_string(), codepoint)
            })
            .collect()
    }
}
