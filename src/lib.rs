//! # marc-dc: MARC to Dublin Core
//!
//! Maps MARC bibliographic records into Dublin Core metadata. Records come from
//! an external MARC or MARC-XML decoder; this crate reads them and produces an
//! in-memory [`DublinCoreRecord`].
//!
//! ## Quick Start
//!
//! ```
//! use marc_dc::{dublin_core, Field, Leader, Record};
//!
//! let record = Record::builder(Leader::new("01142cam  2200301 a 4500"))
//!     .field(
//!         Field::builder("100".to_string(), '1', ' ')
//!             .subfield_str('a', "Sandburg, Carl,")
//!             .subfield_str('d', "1878-1967.")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("260".to_string(), ' ', ' ')
//!             .subfield_str('a', "San Diego :")
//!             .subfield_str('b', "Harcourt Brace Jovanovich,")
//!             .subfield_str('c', "c1993.")
//!             .build(),
//!     )
//!     .build();
//!
//! let dc = dublin_core::record_to_dublin_core(&record)?;
//! assert_eq!(dc.creators(), Some(&["Sandburg, Carl, 1878-1967.".to_string()][..]));
//! assert_eq!(dc.dates(), Some(&["c1993.".to_string()][..]));
//! assert_eq!(dc.dc_type(), "text");
//! # Ok::<(), marc_dc::MarcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Record structures (`Record`, `Field`, `Subfield`)
//! - [`marc_record`] — Read-only record trait consumed by the converter
//! - [`leader`] — Leader access with bounds-checked positions
//! - [`field_accessor`] — Subfield selection and concatenation primitives
//! - [`record_helpers`] — Accessors for fields outside the crosswalk
//! - [`dublin_core`] — The crosswalk, type derivation and converter
//! - [`error`] — Error types and result type

pub mod dublin_core;
pub mod error;
pub mod field_accessor;
pub mod leader;
pub mod marc_record;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod record_helpers;

pub use dublin_core::{
    record_to_dublin_core, records_to_dublin_core, ConversionConfig, DublinCoreConverter,
    DublinCoreRecord,
};
pub use error::{MarcError, Result};
pub use field_accessor::{concatenate_subfields, FieldAccessor, SubfieldCodes};
pub use leader::Leader;
pub use marc_record::MarcRecord;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use record_helpers::RecordHelpers;
