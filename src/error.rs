//! Error types for MARC to Dublin Core mapping.
//!
//! This module provides the [`MarcError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all library operations.
///
/// Lookups that fail while mapping a single Dublin Core attribute are normally
/// absorbed by the converter and reported as an absent attribute. They only
/// reach the caller when strict conversion is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarcError {
    /// A required control or data field is not present in the record.
    #[error("Field not found: {0}")]
    NotFound(String),

    /// A character position lies beyond the end of the leader or a control field.
    #[error("Position {position} out of range for {context} (length {length})")]
    OutOfRange {
        /// What was being indexed, e.g. `leader` or `control field 008`.
        context: String,
        /// The requested 0-indexed position.
        position: usize,
        /// The actual length in characters.
        length: usize,
    },

    /// A subfield code set is empty, repeats a code, or holds a character
    /// that cannot be a subfield code.
    #[error("Malformed subfield selection: {0}")]
    MalformedSubfieldSelection(String),

    /// A Dublin Core attribute could not be derived during strict conversion.
    #[error("Cannot derive dc:{attribute}: {source}")]
    AttributeUnavailable {
        /// The Dublin Core attribute name.
        attribute: &'static str,
        /// The lookup failure behind it.
        #[source]
        source: Box<MarcError>,
    },
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
