//! Read-only view of a MARC record.
//!
//! This module defines the `MarcRecord` trait, the seam between a MARC decoder and
//! the mapping engine. The engine never mutates a record, so the trait only asks
//! for lookups. A decoder with its own record type can implement it and hand its
//! records to the converter without copying them into [`Record`](crate::Record).

use crate::leader::Leader;
use crate::record::Field;

/// Common trait for records the mapping engine can read.
///
/// # Examples
///
/// ```
/// use marc_dc::{Leader, MarcRecord, Record};
///
/// fn record_type<T: MarcRecord + ?Sized>(record: &T) -> Option<char> {
///     record.leader().record_type().ok()
/// }
///
/// let record = Record::new(Leader::default());
/// assert_eq!(record_type(&record), Some('a'));
/// ```
pub trait MarcRecord {
    /// Get a reference to the record's leader.
    fn leader(&self) -> &Leader;

    /// Get the raw data of a control field.
    ///
    /// Returns `None` if the field does not exist.
    fn get_control_field(&self, tag: &str) -> Option<&str>;

    /// Get all data fields with a given tag, in record order.
    ///
    /// Returns `None` if no fields exist for the tag.
    fn get_fields(&self, tag: &str) -> Option<&[Field]>;

    /// Get the first data field with a given tag.
    fn get_field(&self, tag: &str) -> Option<&Field> {
        self.get_fields(tag).and_then(<[Field]>::first)
    }
}
