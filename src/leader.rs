//! MARC record leader access.
//!
//! The MARC leader is a fixed-length header (24 characters in MARC 21) at the start
//! of every record. Its positions encode record-level flags. The mapping engine reads
//! two of them:
//!
//! - Position 6: Type of record (a = language material, c = notated music, etc.)
//! - Position 7: Bibliographic level (m = monograph, c = collection, etc.)
//!
//! Leaders are stored as received from the decoder, so a truncated leader is
//! representable and every positional read is bounds-checked.

use std::fmt;

use crate::error::{MarcError, Result};
use serde::{Deserialize, Serialize};

/// Position of the type-of-record code.
pub const RECORD_TYPE_POSITION: usize = 6;

/// Position of the bibliographic-level code.
pub const BIBLIOGRAPHIC_LEVEL_POSITION: usize = 7;

/// MARC leader as a raw character sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leader {
    raw: String,
}

impl Leader {
    /// Wrap the raw leader characters supplied by a decoder.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Leader { raw: raw.into() }
    }

    /// The leader characters as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Whether the leader holds no characters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Character at a 0-indexed position.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::OutOfRange`] if the leader is shorter than `position + 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use marc_dc::Leader;
    ///
    /// let leader = Leader::new("01142cam  2200301 a 4500");
    /// assert_eq!(leader.char_at(6).unwrap(), 'a');
    /// assert!(leader.char_at(24).is_err());
    /// ```
    pub fn char_at(&self, position: usize) -> Result<char> {
        self.raw
            .chars()
            .nth(position)
            .ok_or_else(|| MarcError::OutOfRange {
                context: "leader".to_string(),
                position,
                length: self.len(),
            })
    }

    /// Type of record (position 6).
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::OutOfRange`] if the leader has fewer than 7 characters.
    pub fn record_type(&self) -> Result<char> {
        self.char_at(RECORD_TYPE_POSITION)
    }

    /// Bibliographic level (position 7).
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::OutOfRange`] if the leader has fewer than 8 characters.
    pub fn bibliographic_level(&self) -> Result<char> {
        self.char_at(BIBLIOGRAPHIC_LEVEL_POSITION)
    }

    /// Valid MARC 21 codes for a leader position decoded by this crate.
    ///
    /// Returns `None` for positions the crate does not decode.
    ///
    /// # Example
    ///
    /// ```
    /// use marc_dc::Leader;
    /// let valid_values = Leader::valid_values_at_position(7).unwrap();
    /// assert!(valid_values.contains(&('c', "Collection")));
    /// ```
    #[must_use]
    pub fn valid_values_at_position(position: usize) -> Option<&'static [(char, &'static str)]> {
        match position {
            RECORD_TYPE_POSITION => Some(&[
                ('a', "Language material"),
                ('c', "Notated music"),
                ('d', "Manuscript notated music"),
                ('e', "Cartographic material"),
                ('f', "Manuscript cartographic material"),
                ('g', "Projected medium"),
                ('i', "Nonmusical sound recording"),
                ('j', "Musical sound recording"),
                ('k', "Two-dimensional nonprojectable graphic"),
                ('m', "Computer file"),
                ('o', "Kit"),
                ('p', "Mixed materials"),
                ('r', "Three-dimensional artifact or naturally occurring object"),
                ('t', "Manuscript language material"),
            ]),
            BIBLIOGRAPHIC_LEVEL_POSITION => Some(&[
                ('a', "Monographic component part"),
                ('b', "Serial component part"),
                ('c', "Collection"),
                ('d', "Subunit"),
                ('i', "Integrating resource"),
                ('m', "Monograph/Item"),
                ('s', "Serial"),
            ]),
            _ => None,
        }
    }

    /// Description of a code at a decoded leader position.
    ///
    /// Returns `None` if the position is not decoded or the code is not defined for it.
    #[must_use]
    pub fn describe_value(position: usize, code: char) -> Option<&'static str> {
        Self::valid_values_at_position(position)?
            .iter()
            .find(|(value, _)| *value == code)
            .map(|(_, desc)| *desc)
    }
}

impl Default for Leader {
    fn default() -> Self {
        Leader::new("00000nam a2200000 a 4500")
    }
}

impl From<&str> for Leader {
    fn from(raw: &str) -> Self {
        Leader::new(raw)
    }
}

impl From<String> for Leader {
    fn from(raw: String) -> Self {
        Leader::new(raw)
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
