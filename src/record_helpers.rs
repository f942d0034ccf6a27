//! Helper methods for bibliographic fields outside the Dublin Core crosswalk.
//!
//! This module provides the `RecordHelpers` trait, which adds accessors for a few
//! frequently-read MARC fields the crosswalk does not map. The trait is
//! automatically implemented for all types that implement `MarcRecord`.
//!
//! # Examples
//!
//! ```ignore
//! use marc_dc::RecordHelpers;
//!
//! if let Some(places) = record.publication_places() {
//!     println!("Published in: {}", places.join("; "));
//! }
//! ```

use indexmap::IndexSet;

use crate::error::Result;
use crate::field_accessor::{FieldAccessor, SubfieldCodes};
use crate::marc_record::MarcRecord;

/// Extension trait providing convenient helper methods for MARC records.
pub trait RecordHelpers: MarcRecord {
    /// Places of publication from field 260, subfield 'a'
    ///
    /// One entry per 260 field; `None` if the record has no 260.
    #[must_use]
    fn publication_places(&self) -> Option<Vec<String>> {
        self.subfields_by_tag_and_codes("260", &SubfieldCodes::new("a").ok()?)
    }

    /// Edition statements from field 250, subfields 'a' and 'b'
    ///
    /// One entry per 250 field; `None` if the record has no 250.
    #[must_use]
    fn edition_statements(&self) -> Option<Vec<String>> {
        self.subfields_by_tag_and_codes("250", &SubfieldCodes::new("ab").ok()?)
    }

    /// System control numbers from field 035
    ///
    /// Takes subfield 'a' of each 035, or subfield '9' when 'a' is missing.
    /// Duplicates are dropped, keeping first-seen order.
    #[must_use]
    fn system_control_numbers(&self) -> IndexSet<String> {
        self.data_fields_by_tag("035")
            .iter()
            .filter_map(|field| field.get_subfield('a').or_else(|| field.get_subfield('9')))
            .map(ToString::to_string)
            .collect()
    }

    /// Type of record (leader position 6)
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::OutOfRange`](crate::MarcError::OutOfRange) if the leader
    /// is too short.
    fn type_of_record(&self) -> Result<char> {
        self.leader().record_type()
    }
}

impl<T: MarcRecord + ?Sized> RecordHelpers for T {}
