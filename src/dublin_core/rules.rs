//! The MARC to Dublin Core crosswalk as data.
//!
//! Each list-valued Dublin Core attribute is produced by one [`MappingRule`]: an
//! ordered list of [`FieldSource`]s (which tags, which subfield codes, an optional
//! prefix) and a [`Combination`] policy saying how per-source results merge.
//!
//! | Attribute | Sources | Policy |
//! |---|---|---|
//! | creators | 100, 110, 111, 700, 710, 711, 720 (`a`-`z`) | append all |
//! | dates | 260 `c`, 264 `c` | first present |
//! | descriptions | 520 `a`, 521 `a`, 500-599 `a` minus 506/520/521/530/540/546 | append all |
//! | identifiers | 856 `u`, 020 `a` prefixed `URN:ISBN:` | append all |
//! | publishers | 260 `ab` | append all |
//! | titles | 245 `abfghk` | append all |
//!
//! `language` and `type` read positional data and live in the converter and
//! [`type_derivation`](super::type_derivation).

use crate::error::Result;
use crate::field_accessor::{FieldAccessor, SubfieldCodes, ALL_LETTER_CODES};
use crate::marc_record::MarcRecord;

/// Which data field tags a source reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSelector {
    /// A single tag.
    Tag(&'static str),
    /// Every numeric tag from `start` to `end` inclusive, ascending, minus `exclude`.
    Range {
        /// First tag of the scan.
        start: u16,
        /// Last tag of the scan.
        end: u16,
        /// Tags skipped by the scan.
        exclude: &'static [u16],
    },
}

impl TagSelector {
    /// Tags in the order they are consulted.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        match *self {
            TagSelector::Tag(tag) => vec![tag.to_string()],
            TagSelector::Range {
                start,
                end,
                exclude,
            } => (start..=end)
                .filter(|tag| !exclude.contains(tag))
                .map(|tag| format!("{tag:03}"))
                .collect(),
        }
    }
}

/// One input of a mapping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSource {
    /// Tags read, in order.
    pub selector: TagSelector,
    /// Subfield codes concatenated per field.
    pub codes: &'static str,
    /// Literal prepended to every value.
    pub prefix: Option<&'static str>,
}

impl FieldSource {
    /// Source reading a single tag.
    #[must_use]
    pub const fn tag(tag: &'static str, codes: &'static str) -> Self {
        FieldSource {
            selector: TagSelector::Tag(tag),
            codes,
            prefix: None,
        }
    }

    /// Source scanning a numeric tag range.
    #[must_use]
    pub const fn range(start: u16, end: u16, exclude: &'static [u16], codes: &'static str) -> Self {
        FieldSource {
            selector: TagSelector::Range {
                start,
                end,
                exclude,
            },
            codes,
            prefix: None,
        }
    }

    /// Prefix every value of this source with `prefix`.
    #[must_use]
    pub const fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// One concatenated string per matching field, tags in selector order.
    ///
    /// Returns `Ok(None)` if none of the selected tags occur in the record.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::MalformedSubfieldSelection`](crate::MarcError::MalformedSubfieldSelection)
    /// if the source's code set is invalid.
    pub fn extract<R: MarcRecord + ?Sized>(&self, record: &R) -> Result<Option<Vec<String>>> {
        let codes = SubfieldCodes::new(self.codes)?;
        let mut result: Option<Vec<String>> = None;

        for tag in self.selector.tags() {
            if let Some(values) = record.subfields_by_tag_and_codes(&tag, &codes) {
                let values = values.into_iter().map(|value| match self.prefix {
                    Some(prefix) => format!("{prefix}{value}"),
                    None => value,
                });
                result.get_or_insert_with(Vec::new).extend(values);
            }
        }

        Ok(result)
    }
}

/// How the results of a rule's sources merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combination {
    /// Every present source contributes, in source order.
    AppendAll,
    /// The first source that finds any field wins alone, even when its values
    /// are blank.
    FirstPresent,
}

/// A declarative rule producing one list-valued Dublin Core attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRule {
    /// Dublin Core attribute name, e.g. `creator`.
    pub attribute: &'static str,
    /// Inputs, in the order they are consulted.
    pub sources: &'static [FieldSource],
    /// Merge policy.
    pub combination: Combination,
}

impl MappingRule {
    /// Evaluate the rule against a record.
    ///
    /// Returns `Ok(None)` if no source found any field, never `Some` of an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::MalformedSubfieldSelection`](crate::MarcError::MalformedSubfieldSelection)
    /// if a source's code set is invalid.
    pub fn apply<R: MarcRecord + ?Sized>(&self, record: &R) -> Result<Option<Vec<String>>> {
        match self.combination {
            Combination::AppendAll => {
                let mut result: Option<Vec<String>> = None;
                for source in self.sources {
                    if let Some(values) = source.extract(record)? {
                        result.get_or_insert_with(Vec::new).extend(values);
                    }
                }
                Ok(result)
            },
            Combination::FirstPresent => {
                for source in self.sources {
                    if let Some(values) = source.extract(record)? {
                        return Ok(Some(values));
                    }
                }
                Ok(None)
            },
        }
    }
}

/// Prefix applied to ISBNs in `dc:identifier`.
pub const ISBN_URN_PREFIX: &str = "URN:ISBN:";

/// Note tags the description scan skips: 520 and 521 are read first, 506 is
/// terms of use, 530 additional format, 540 use restrictions, 546 language.
pub const DESCRIPTION_EXCLUDED_TAGS: &[u16] = &[506, 520, 521, 530, 540, 546];

/// `dc:creator` from main and added entries.
pub const CREATORS: MappingRule = MappingRule {
    attribute: "creator",
    sources: &[
        FieldSource::tag("100", ALL_LETTER_CODES),
        FieldSource::tag("110", ALL_LETTER_CODES),
        FieldSource::tag("111", ALL_LETTER_CODES),
        FieldSource::tag("700", ALL_LETTER_CODES),
        FieldSource::tag("710", ALL_LETTER_CODES),
        FieldSource::tag("711", ALL_LETTER_CODES),
        FieldSource::tag("720", ALL_LETTER_CODES),
    ],
    combination: Combination::AppendAll,
};

/// `dc:date` from 260, falling back to 264 (RDA).
pub const DATES: MappingRule = MappingRule {
    attribute: "date",
    sources: &[FieldSource::tag("260", "c"), FieldSource::tag("264", "c")],
    combination: Combination::FirstPresent,
};

/// `dc:description` from summary, audience, and general notes.
pub const DESCRIPTIONS: MappingRule = MappingRule {
    attribute: "description",
    sources: &[
        FieldSource::tag("520", "a"),
        FieldSource::tag("521", "a"),
        FieldSource::range(500, 599, DESCRIPTION_EXCLUDED_TAGS, "a"),
    ],
    combination: Combination::AppendAll,
};

/// `dc:identifier` from URIs and ISBNs.
pub const IDENTIFIERS: MappingRule = MappingRule {
    attribute: "identifier",
    sources: &[
        FieldSource::tag("856", "u"),
        FieldSource::tag("020", "a").with_prefix(ISBN_URN_PREFIX),
    ],
    combination: Combination::AppendAll,
};

/// `dc:publisher` from place and name of publisher.
pub const PUBLISHERS: MappingRule = MappingRule {
    attribute: "publisher",
    sources: &[FieldSource::tag("260", "ab")],
    combination: Combination::AppendAll,
};

/// `dc:title` from the title statement.
pub const TITLES: MappingRule = MappingRule {
    attribute: "title",
    sources: &[FieldSource::tag("245", "abfghk")],
    combination: Combination::AppendAll,
};

/// Every list-valued rule, in conversion order.
pub const RULES: &[MappingRule] = &[CREATORS, DATES, DESCRIPTIONS, IDENTIFIERS, PUBLISHERS, TITLES];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarcError;
    use crate::leader::Leader;
    use crate::record::{Field, Record};

    fn add(record: &mut Record, tag: &str, subfields: &[(char, &str)]) {
        let mut field = Field::new(tag.to_string(), ' ', ' ');
        for (code, value) in subfields {
            field.add_subfield_str(*code, value);
        }
        record.add_field(field);
    }

    #[test]
    fn test_builtin_code_sets_are_valid() {
        for rule in RULES {
            for source in rule.sources {
                assert!(
                    SubfieldCodes::new(source.codes).is_ok(),
                    "{}: {}",
                    rule.attribute,
                    source.codes
                );
            }
        }
    }

    #[test]
    fn test_range_tags_ascending_without_exclusions() {
        let tags = FieldSource::range(500, 599, DESCRIPTION_EXCLUDED_TAGS, "a")
            .selector
            .tags();
        assert_eq!(tags.len(), 94);
        assert_eq!(tags.first().map(String::as_str), Some("500"));
        assert_eq!(tags.last().map(String::as_str), Some("599"));
        assert!(!tags.iter().any(|t| t == "520" || t == "546"));
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_padded_range() {
        let tags = TagSelector::Range {
            start: 20,
            end: 22,
            exclude: &[21],
        }
        .tags();
        assert_eq!(tags, vec!["020", "022"]);
    }

    #[test]
    fn test_creators_order_follows_tag_list() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "700", &[('a', "Added, One")]);
        add(&mut record, "110", &[('a', "Corporate Body")]);
        add(&mut record, "100", &[('a', "Main, Entry")]);
        add(&mut record, "700", &[('a', "Added, Two")]);

        assert_eq!(
            CREATORS.apply(&record),
            Ok(Some(vec![
                "Main, Entry".to_string(),
                "Corporate Body".to_string(),
                "Added, One".to_string(),
                "Added, Two".to_string(),
            ]))
        );
    }

    #[test]
    fn test_dates_prefers_260() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "264", &[('c', "2015")]);
        add(&mut record, "260", &[('c', "c1993.")]);

        assert_eq!(DATES.apply(&record), Ok(Some(vec!["c1993.".to_string()])));
    }

    #[test]
    fn test_dates_falls_back_to_264() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "264", &[('c', "[2015]")]);

        assert_eq!(DATES.apply(&record), Ok(Some(vec!["[2015]".to_string()])));
    }

    #[test]
    fn test_dates_260_without_date_blocks_264() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "260", &[('a', "New York :"), ('b', "Pub,")]);
        add(&mut record, "264", &[('c', "[2015]")]);

        assert_eq!(DATES.apply(&record), Ok(Some(vec![String::new()])));
    }

    #[test]
    fn test_dates_blank_260_without_264() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "260", &[('c', " ")]);

        assert_eq!(DATES.apply(&record), Ok(Some(vec![String::new()])));
    }

    #[test]
    fn test_descriptions_order() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "590", &[('a', "Local note.")]);
        add(&mut record, "500", &[('a', "General note.")]);
        add(&mut record, "546", &[('a', "In English.")]);
        add(&mut record, "521", &[('a', "Ages 6-9.")]);
        add(&mut record, "520", &[('a', "Summary.")]);
        add(&mut record, "504", &[('a', "Includes index.")]);

        assert_eq!(
            DESCRIPTIONS.apply(&record),
            Ok(Some(vec![
                "Summary.".to_string(),
                "Ages 6-9.".to_string(),
                "General note.".to_string(),
                "Includes index.".to_string(),
                "Local note.".to_string(),
            ]))
        );
    }

    #[test]
    fn test_descriptions_only_excluded_is_absent() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "506", &[('a', "Open access.")]);
        add(&mut record, "540", &[('a', "Public domain.")]);

        assert_eq!(DESCRIPTIONS.apply(&record), Ok(None));
    }

    #[test]
    fn test_identifiers_uris_then_isbns() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "020", &[('a', "0152038655 :"), ('c', "$15.95")]);
        add(&mut record, "856", &[('u', "http://example.org/item")]);

        assert_eq!(
            IDENTIFIERS.apply(&record),
            Ok(Some(vec![
                "http://example.org/item".to_string(),
                "URN:ISBN:0152038655 :".to_string(),
            ]))
        );
    }

    #[test]
    fn test_prefix_applies_to_blank_isbn() {
        let mut record = Record::new(Leader::default());
        add(&mut record, "020", &[('z', "invalid")]);

        assert_eq!(
            IDENTIFIERS.apply(&record),
            Ok(Some(vec!["URN:ISBN:".to_string()]))
        );
    }

    #[test]
    fn test_every_rule_absent_on_empty_record() {
        let record = Record::new(Leader::default());
        for rule in RULES {
            assert_eq!(rule.apply(&record), Ok(None), "{}", rule.attribute);
        }
    }

    #[test]
    fn test_malformed_codes_reported() {
        const BROKEN: MappingRule = MappingRule {
            attribute: "title",
            sources: &[FieldSource::tag("245", "aA")],
            combination: Combination::AppendAll,
        };
        let record = Record::new(Leader::default());

        assert!(matches!(
            BROKEN.apply(&record),
            Err(MarcError::MalformedSubfieldSelection(_))
        ));
    }
}
