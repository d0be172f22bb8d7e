//! Error types for JSON parsing.

use thiserror::Error;

/// Grammar violations reported by the strict parser.
///
/// The strict entry point surfaces the first violation and aborts; no partial
/// tree is returned. The lenient entry point collapses every variant into an
/// absent result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or exhausted where a value was required.
    #[error("expected a JSON element")]
    ExpectedElement,

    /// A structural token (bracket, colon, comma) is missing or out of place.
    #[error("invalid JSON structure")]
    InvalidStructure,

    /// A string literal is malformed: bad escape, bad `\u` hex run, or
    /// unterminated.
    #[error("malformed string literal")]
    ExpectedString,

    /// A number literal has invalid content or an invalid terminator, or its
    /// text does not parse to a finite value.
    #[error("malformed number literal")]
    ExpectedNumber,

    /// An array's element/comma/terminator sequencing is invalid.
    #[error("malformed array")]
    ExpectedArray,
}

/// Convenience alias used throughout jsontree.
pub type Result<T> = std::result::Result<T, ParseError>;
