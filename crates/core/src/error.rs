//! Error types for codepoint handling

use crate::codepoint::Codepoint;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A persisted codepoint string is not plain hexadecimal
    #[error("invalid hex codepoint {0:?}")]
    InvalidHex(String),

    /// Hex that decodes to a surrogate or a value past U+10FFFF
    #[error("{0:?} is not a Unicode scalar value")]
    NotScalar(String),

    /// Every codepoint between base and ceiling is already taken
    #[error("no free codepoint left between {base} and {ceiling}")]
    CodepointSpaceExhausted { base: Codepoint, ceiling: Codepoint },

    /// Base sits above the ceiling
    #[error("invalid allocation range: base {base} is above ceiling {ceiling}")]
    InvalidRange { base: Codepoint, ceiling: Codepoint },
}
