//! Extraction primitives shared by every mapping rule.
//!
//! This module provides:
//! - [`SubfieldCodes`] — a validated set of subfield codes to select
//! - [`concatenate_subfields`] — joins the selected subfields of one field
//! - [`FieldAccessor`] — lookups on any [`MarcRecord`], automatically implemented
//!
//! # Examples
//!
//! ```
//! use marc_dc::{Field, FieldAccessor, Leader, Record, SubfieldCodes};
//!
//! let record = Record::builder(Leader::default())
//!     .field(
//!         Field::builder("260".to_string(), ' ', ' ')
//!             .subfield_str('a', "San Diego :")
//!             .subfield_str('b', "Harcourt Brace Jovanovich,")
//!             .subfield_str('c', "c1993.")
//!             .build(),
//!     )
//!     .build();
//!
//! let codes = SubfieldCodes::new("ab")?;
//! assert_eq!(
//!     record.subfields_by_tag_and_codes("260", &codes),
//!     Some(vec!["San Diego : Harcourt Brace Jovanovich,".to_string()])
//! );
//! # Ok::<(), marc_dc::MarcError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{MarcError, Result};
use crate::marc_record::MarcRecord;
use crate::record::Field;

/// Every lowercase letter subfield code.
pub const ALL_LETTER_CODES: &str = "abcdefghijklmnopqrstuvwxyz";

/// A set of subfield codes to select from a field.
///
/// Codes are lowercase ASCII letters or digits, each appearing once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfieldCodes {
    codes: SmallVec<[char; 8]>,
}

impl SubfieldCodes {
    /// Parse a code set such as `"abfghk"`.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::MalformedSubfieldSelection`] if the set is empty,
    /// repeats a code, or contains a character that is not a lowercase ASCII
    /// letter or digit.
    pub fn new(codes: &str) -> Result<Self> {
        if codes.is_empty() {
            return Err(MarcError::MalformedSubfieldSelection(
                "empty code set".to_string(),
            ));
        }

        let mut parsed: SmallVec<[char; 8]> = SmallVec::new();
        for code in codes.chars() {
            if !(code.is_ascii_lowercase() || code.is_ascii_digit()) {
                return Err(MarcError::MalformedSubfieldSelection(format!(
                    "invalid subfield code {code:?} in {codes:?}"
                )));
            }
            if parsed.contains(&code) {
                return Err(MarcError::MalformedSubfieldSelection(format!(
                    "duplicate subfield code {code:?} in {codes:?}"
                )));
            }
            parsed.push(code);
        }

        Ok(SubfieldCodes { codes: parsed })
    }

    /// The 26 lowercase letter codes.
    #[must_use]
    pub fn all_letters() -> Self {
        SubfieldCodes {
            codes: ALL_LETTER_CODES.chars().collect(),
        }
    }

    /// Whether `code` is selected.
    #[must_use]
    pub fn contains(&self, code: char) -> bool {
        self.codes.contains(&code)
    }

    /// Number of codes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a successfully parsed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromStr for SubfieldCodes {
    type Err = MarcError;

    fn from_str(s: &str) -> Result<Self> {
        SubfieldCodes::new(s)
    }
}

impl fmt::Display for SubfieldCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.codes.iter().try_for_each(|code| write!(f, "{code}"))
    }
}

/// Concatenate the selected subfields of a field.
///
/// Subfields are visited in stored order. A subfield contributes when its code is
/// selected and its value is not blank; blank values are skipped without breaking
/// the join. Included values are joined with `delimiter`, and surrounding
/// whitespace and delimiters are trimmed from the result.
///
/// Returns an empty string when nothing contributes.
///
/// # Examples
///
/// ```
/// use marc_dc::{concatenate_subfields, Field, SubfieldCodes};
///
/// let field = Field::builder("100".to_string(), '1', ' ')
///     .subfield_str('a', "Rand, Ted,")
///     .subfield_str('d', "   ")
///     .subfield_str('e', "ill.")
///     .subfield_str('4', "ill")
///     .build();
///
/// let codes = SubfieldCodes::all_letters();
/// assert_eq!(concatenate_subfields(&field, &codes, " "), "Rand, Ted, ill.");
/// ```
#[must_use]
pub fn concatenate_subfields(field: &Field, codes: &SubfieldCodes, delimiter: &str) -> String {
    let joined = field
        .subfields()
        .filter(|sf| codes.contains(sf.code) && !sf.value.trim().is_empty())
        .map(|sf| sf.value.as_str())
        .collect::<Vec<_>>()
        .join(delimiter);

    trim_delimited(&joined, delimiter).to_string()
}

fn trim_delimited<'a>(mut s: &'a str, delimiter: &str) -> &'a str {
    loop {
        let mut trimmed = s.trim();
        if !delimiter.is_empty() {
            trimmed = trimmed.strip_prefix(delimiter).unwrap_or(trimmed);
            trimmed = trimmed.strip_suffix(delimiter).unwrap_or(trimmed);
        }
        if trimmed.len() == s.len() {
            return trimmed;
        }
        s = trimmed;
    }
}

/// Extension trait providing the lookups mapping rules are built from.
///
/// This trait is automatically implemented for all types that implement
/// [`MarcRecord`].
pub trait FieldAccessor: MarcRecord {
    /// Raw data of a control field.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::NotFound`] if the record has no control field with `tag`.
    fn control_field_data(&self, tag: &str) -> Result<&str> {
        self.get_control_field(tag)
            .ok_or_else(|| MarcError::NotFound(format!("control field {tag}")))
    }

    /// `len` characters of a control field starting at the 0-indexed `start`.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::NotFound`] if the control field is missing, or
    /// [`MarcError::OutOfRange`] if it is shorter than `start + len` characters.
    fn control_field_chars(&self, tag: &str, start: usize, len: usize) -> Result<String> {
        let data = self.control_field_data(tag)?;
        let length = data.chars().count();
        if start + len > length {
            return Err(MarcError::OutOfRange {
                context: format!("control field {tag}"),
                position: (start + len).saturating_sub(1),
                length,
            });
        }
        Ok(data.chars().skip(start).take(len).collect())
    }

    /// All data fields with `tag`, in record order; empty if there are none.
    fn data_fields_by_tag(&self, tag: &str) -> &[Field] {
        self.get_fields(tag).unwrap_or(&[])
    }

    /// Leader character at a 0-indexed position.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::OutOfRange`] if the leader is shorter than `position + 1`.
    fn leader_at(&self, position: usize) -> Result<char> {
        self.leader().char_at(position)
    }

    /// One space-joined concatenation per field with `tag`, in record order.
    ///
    /// Returns `None` if the record has no field with `tag`. A field whose selected
    /// subfields are all blank or missing still yields an entry: the empty string.
    fn subfields_by_tag_and_codes(&self, tag: &str, codes: &SubfieldCodes) -> Option<Vec<String>> {
        let fields = self.data_fields_by_tag(tag);
        if fields.is_empty() {
            return None;
        }
        Some(
            fields
                .iter()
                .map(|field| concatenate_subfields(field, codes, " "))
                .collect(),
        )
    }
}

impl<T: MarcRecord + ?Sized> FieldAccessor for T {}
