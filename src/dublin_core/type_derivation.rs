//! `dc:type` derivation from the leader and genre/form terms.
//!
//! Leader position 7 (bibliographic level) and position 6 (type of record) each
//! contribute tokens; the 655 genre/form terms follow them. Tokens are joined with
//! no delimiter, so `"collection"` followed by `"text"` reads `"collectiontext"`.

use super::rules::FieldSource;

/// Genre/form terms (655) appended after the leader tokens.
pub const GENRE_FORM: FieldSource = FieldSource::tag("655", "abcvxyz");

/// Token for bibliographic level `c`.
pub const COLLECTION_TOKEN: &str = "collection";

/// Token for manuscript record types.
pub const MANUSCRIPT_TOKEN: &str = "manuscript";

/// Whether a type-of-record code denotes manuscript material (`d`, `f`, `p`, `t`).
#[must_use]
pub const fn is_manuscript(record_type: char) -> bool {
    matches!(record_type, 'd' | 'f' | 'p' | 't')
}

/// Category token for a type-of-record code, if the code has one.
#[must_use]
pub const fn category_token(record_type: char) -> Option<&'static str> {
    match record_type {
        'a' | 't' => Some("text"),
        'e' | 'f' => Some("cartographic"),
        'c' | 'd' => Some("notated music"),
        'i' | 'j' => Some("sound recording"),
        'k' => Some("still image"),
        'g' => Some("moving image"),
        'r' => Some("three dimensional object"),
        'm' => Some("software, multimedia"),
        'p' => Some("mixed material"),
        _ => None,
    }
}

/// Build the `dc:type` string.
///
/// `None` for a leader code means the position could not be read; it then
/// contributes no tokens. The result is empty when nothing applies.
///
/// # Examples
///
/// ```
/// use marc_dc::dublin_core::type_derivation::derive_type;
///
/// assert_eq!(derive_type(Some('a'), Some('m'), None), "text");
/// assert_eq!(derive_type(Some('t'), Some('c'), None), "collectionmanuscripttext");
///
/// let genre = vec!["Picture books.".to_string()];
/// assert_eq!(derive_type(Some('k'), Some('m'), Some(genre.as_slice())), "still imagePicture books.");
/// ```
#[must_use]
pub fn derive_type(
    record_type: Option<char>,
    bibliographic_level: Option<char>,
    genre_terms: Option<&[String]>,
) -> String {
    let mut result = String::new();

    if bibliographic_level == Some('c') {
        result.push_str(COLLECTION_TOKEN);
    }
    if let Some(code) = record_type {
        if is_manuscript(code) {
            result.push_str(MANUSCRIPT_TOKEN);
        }
        if let Some(category) = category_token(code) {
            result.push_str(category);
        }
    }
    if let Some(terms) = genre_terms.filter(|terms| !terms.is_empty()) {
        result.push_str(&terms.join(" "));
    }

    result
}
