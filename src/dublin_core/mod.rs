//! Dublin Core mapping of MARC records.
//!
//! This module converts MARC bibliographic records into Dublin Core metadata, the
//! small fixed-schema description used by discovery and repository systems.
//!
//! Mapped elements:
//! - **Creator** (dc:creator): main and added entries 100/110/111/700/710/711/720
//! - **Date** (dc:date): 260$c, or 264$c for records without one
//! - **Description** (dc:description): 520$a, 521$a, then the 5XX notes
//! - **Identifier** (dc:identifier): 856$u and `URN:ISBN:` + 020$a
//! - **Language** (dc:language): 008/35-37
//! - **Publisher** (dc:publisher): 260$a$b
//! - **Title** (dc:title): 245$a$b$f$g$h$k
//! - **Type** (dc:type): leader/06, leader/07 and 655
//!
//! Subjects are not mapped; [`DublinCoreRecord::subjects`] is always `None`.
//!
//! # Submodules
//!
//! - [`rules`]: the crosswalk table for list-valued elements
//! - [`type_derivation`]: the `dc:type` decision table
//! - [`config`]: conversion options
//!
//! # Examples
//!
//! ```
//! use marc_dc::{dublin_core, Field, Leader, Record};
//!
//! let record = Record::builder(Leader::new("01142cam  2200301 a 4500"))
//!     .control_field_str("008", "920219s1993    caua   j      000 0 eng  ")
//!     .field(
//!         Field::builder("245".to_string(), '1', '0')
//!             .subfield_str('a', "Arithmetic /")
//!             .subfield_str('c', "Carl Sandburg.")
//!             .build(),
//!     )
//!     .build();
//!
//! let dc = dublin_core::record_to_dublin_core(&record)?;
//! assert_eq!(dc.titles(), Some(&["Arithmetic /".to_string()][..]));
//! assert_eq!(dc.language(), Some("eng"));
//! assert_eq!(dc.dc_type(), "text");
//! assert_eq!(dc.creators(), None);
//! # Ok::<(), marc_dc::MarcError>(())
//! ```

pub mod config;
pub mod rules;
pub mod type_derivation;

pub use config::ConversionConfig;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{MarcError, Result};
use crate::field_accessor::FieldAccessor;
use crate::leader::{Leader, RECORD_TYPE_POSITION};
use crate::marc_record::MarcRecord;
use rules::MappingRule;

/// Control field holding the fixed-length data elements.
const FIXED_LENGTH_DATA_TAG: &str = "008";

/// Start and width of the language code in field 008.
const LANGUAGE_POSITION: usize = 35;
const LANGUAGE_WIDTH: usize = 3;

/// Dublin Core metadata record
///
/// List-valued elements are either `None` (no source field present) or a
/// non-empty list, in the order the crosswalk produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DublinCoreRecord {
    creators: Option<Vec<String>>,
    dates: Option<Vec<String>>,
    descriptions: Option<Vec<String>>,
    identifiers: Option<Vec<String>>,
    language: Option<String>,
    publishers: Option<Vec<String>>,
    subjects: Option<Vec<String>>,
    titles: Option<Vec<String>>,
    #[serde(rename = "type")]
    dc_type: String,
}

impl DublinCoreRecord {
    /// dc:creator - Entities responsible for making the resource
    #[must_use]
    pub fn creators(&self) -> Option<&[String]> {
        self.creators.as_deref()
    }

    /// dc:date - Dates of publication or production
    #[must_use]
    pub fn dates(&self) -> Option<&[String]> {
        self.dates.as_deref()
    }

    /// dc:description - Accounts of the resource
    #[must_use]
    pub fn descriptions(&self) -> Option<&[String]> {
        self.descriptions.as_deref()
    }

    /// dc:identifier - URIs followed by `URN:ISBN:` identifiers
    #[must_use]
    pub fn identifiers(&self) -> Option<&[String]> {
        self.identifiers.as_deref()
    }

    /// dc:language - Three-character MARC language code
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// dc:publisher - Entities making the resource available
    #[must_use]
    pub fn publishers(&self) -> Option<&[String]> {
        self.publishers.as_deref()
    }

    /// dc:subject - Not mapped by this crosswalk; always `None`
    #[must_use]
    pub fn subjects(&self) -> Option<&[String]> {
        self.subjects.as_deref()
    }

    /// dc:title - Titles of the resource
    #[must_use]
    pub fn titles(&self) -> Option<&[String]> {
        self.titles.as_deref()
    }

    /// dc:type - Nature or genre of the resource; possibly empty
    #[must_use]
    pub fn dc_type(&self) -> &str {
        &self.dc_type
    }
}

/// Converts one MARC record to Dublin Core.
///
/// The converter only reads the record. Every rule is evaluated before the
/// [`DublinCoreRecord`] is assembled, so callers never see a partial result.
#[derive(Debug)]
pub struct DublinCoreConverter<'a, R: MarcRecord + ?Sized> {
    record: &'a R,
    config: ConversionConfig,
}

impl<'a, R: MarcRecord + ?Sized> DublinCoreConverter<'a, R> {
    /// Create a converter with the default configuration.
    #[must_use]
    pub fn new(record: &'a R) -> Self {
        DublinCoreConverter {
            record,
            config: ConversionConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every mapping rule and the type derivation.
    ///
    /// # Errors
    ///
    /// Never fails with the default configuration. In strict mode, returns
    /// [`MarcError::AttributeUnavailable`] for the first attribute whose source
    /// data is missing, too short, or selected with a malformed code set.
    pub fn convert(&self) -> Result<DublinCoreRecord> {
        let creators = self.apply_rule(&rules::CREATORS)?;
        let dates = self.apply_rule(&rules::DATES)?;
        let descriptions = self.apply_rule(&rules::DESCRIPTIONS)?;
        let identifiers = self.apply_rule(&rules::IDENTIFIERS)?;
        let language = self.language()?;
        let publishers = self.apply_rule(&rules::PUBLISHERS)?;
        let titles = self.apply_rule(&rules::TITLES)?;
        let dc_type = self.dc_type()?;

        Ok(DublinCoreRecord {
            creators,
            dates,
            descriptions,
            identifiers,
            language,
            publishers,
            subjects: None,
            titles,
            dc_type,
        })
    }

    fn apply_rule(&self, rule: &MappingRule) -> Result<Option<Vec<String>>> {
        let values = self.recover(rule.attribute, rule.apply(self.record))?.flatten();
        if values.is_none() {
            debug!(attribute = rule.attribute, "no source fields present");
        }
        Ok(values)
    }

    fn language(&self) -> Result<Option<String>> {
        self.recover(
            "language",
            self.record.control_field_chars(
                FIXED_LENGTH_DATA_TAG,
                LANGUAGE_POSITION,
                LANGUAGE_WIDTH,
            ),
        )
    }

    fn dc_type(&self) -> Result<String> {
        let leader = self.record.leader();
        let record_type = self.recover("type", leader.record_type())?;
        let bibliographic_level = self.recover("type", leader.bibliographic_level())?;
        let genre_terms = self
            .recover("type", type_derivation::GENRE_FORM.extract(self.record))?
            .flatten();

        if let Some(code) = record_type.filter(|c| type_derivation::category_token(*c).is_none()) {
            debug!(
                code = %code,
                meaning = Leader::describe_value(RECORD_TYPE_POSITION, code).unwrap_or("undefined"),
                "record type has no dc:type category"
            );
        }

        Ok(type_derivation::derive_type(
            record_type,
            bibliographic_level,
            genre_terms.as_deref(),
        ))
    }

    /// Turn a failed lookup into an absent value, or into an error in strict mode.
    fn recover<T>(&self, attribute: &'static str, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.config.strict => Err(MarcError::AttributeUnavailable {
                attribute,
                source: Box::new(err),
            }),
            Err(err @ MarcError::MalformedSubfieldSelection(_)) => {
                error!(attribute, error = %err, "invalid crosswalk code set");
                Ok(None)
            },
            Err(err) => {
                warn!(attribute, error = %err, "attribute left absent");
                Ok(None)
            },
        }
    }
}

/// Convert a MARC record to Dublin Core metadata with the default configuration.
///
/// # Errors
///
/// Does not fail with the default configuration; the `Result` matches
/// [`DublinCoreConverter::convert`].
pub fn record_to_dublin_core<R: MarcRecord + ?Sized>(record: &R) -> Result<DublinCoreRecord> {
    DublinCoreConverter::new(record).convert()
}

/// Convert a batch of records in parallel using Rayon.
///
/// Each record is an independent task on Rayon's work-stealing thread pool.
/// Results are returned in input order, one per record, so a strict-mode failure
/// on one record does not affect the others.
///
/// # Examples
///
/// ```
/// use marc_dc::dublin_core::{records_to_dublin_core, ConversionConfig};
/// use marc_dc::{Leader, Record};
///
/// let records = vec![
///     Record::new(Leader::new("00000cam a2200000 a 4500")),
///     Record::new(Leader::new("00000ckm a2200000 a 4500")),
/// ];
/// let results = records_to_dublin_core(&records, ConversionConfig::default());
/// let types = results
///     .into_iter()
///     .map(|r| r.map(|dc| dc.dc_type().to_string()))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(types, vec!["text", "still image"]);
/// # Ok::<(), marc_dc::MarcError>(())
/// ```
pub fn records_to_dublin_core<R: MarcRecord + Sync>(
    records: &[R],
    config: ConversionConfig,
) -> Vec<Result<DublinCoreRecord>> {
    use rayon::prelude::*;

    records
        .par_iter()
        .map(|record| DublinCoreConverter::new(record).with_config(config).convert())
        .collect()
}
