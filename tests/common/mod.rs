//! Common test helpers and utilities shared across test suite.

#![allow(dead_code)]

use marc_dc::{Field, Leader, Record};

/// Leader of the Library of Congress "Arithmetic" sample record.
pub const SANDBURG_LEADER: &str = "01142cam  2200301 a 4500";

/// Field 008 of the "Arithmetic" sample record (40 characters, language "eng").
pub const SANDBURG_008: &str = "920219s1993    caua   j      000 0 eng  ";

/// The 520 summary of the "Arithmetic" sample record.
pub const SANDBURG_SUMMARY: &str = "A poem about numbers and their characteristics. \
    Features anamorphic, or distorted, drawings which can be restored to normal by \
    viewing from a particular angle or by viewing the image's reflection in the \
    provided Mylar cone.";

/// Builds a data field from (code, value) pairs.
pub fn make_field(tag: &str, ind1: char, ind2: char, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ind1, ind2);
    for (code, value) in subfields {
        field.add_subfield_str(*code, value);
    }
    field
}

/// Creates a simple test record with a language-material monograph leader.
pub fn create_test_record() -> Record {
    Record::new(Leader::new(SANDBURG_LEADER))
}

/// Creates the "Arithmetic" record by Carl Sandburg (LCCN 92005291).
///
/// Mirrors the Library of Congress MARCXML sample, field for field.
pub fn create_sandburg_record() -> Record {
    let mut record = create_test_record();

    record.add_control_field_str("001", "   92005291 ");
    record.add_control_field_str("003", "DLC");
    record.add_control_field_str("005", "19930521155141.9");
    record.add_control_field_str("008", SANDBURG_008);

    record.add_field(make_field("010", ' ', ' ', &[('a', "   92005291 ")]));
    record.add_field(make_field(
        "020",
        ' ',
        ' ',
        &[('a', "0152038655 :"), ('c', "$15.95")],
    ));
    record.add_field(make_field(
        "040",
        ' ',
        ' ',
        &[('a', "DLC"), ('c', "DLC"), ('d', "DLC")],
    ));
    record.add_field(make_field("042", ' ', ' ', &[('a', "lcac")]));
    record.add_field(make_field(
        "050",
        '0',
        '0',
        &[('a', "PS3537.A618"), ('b', "A88 1993")],
    ));
    record.add_field(make_field("082", '0', '0', &[('a', "811/.52"), ('2', "20")]));
    record.add_field(make_field(
        "100",
        '1',
        ' ',
        &[('a', "Sandburg, Carl,"), ('d', "1878-1967.")],
    ));
    record.add_field(make_field(
        "245",
        '1',
        '0',
        &[
            ('a', "Arithmetic /"),
            (
                'c',
                "Carl Sandburg ; illustrated as an anamorphic adventure by Ted Rand.",
            ),
        ],
    ));
    record.add_field(make_field("250", ' ', ' ', &[('a', "1st ed.")]));
    record.add_field(make_field(
        "260",
        ' ',
        ' ',
        &[
            ('a', "San Diego :"),
            ('b', "Harcourt Brace Jovanovich,"),
            ('c', "c1993."),
        ],
    ));
    record.add_field(make_field(
        "300",
        ' ',
        ' ',
        &[
            ('a', "1 v. (unpaged) :"),
            ('b', "ill. (some col.) ;"),
            ('c', "26 cm."),
        ],
    ));
    record.add_field(make_field(
        "500",
        ' ',
        ' ',
        &[('a', "One Mylar sheet included in pocket.")],
    ));
    record.add_field(make_field("520", ' ', ' ', &[('a', SANDBURG_SUMMARY)]));
    record.add_field(make_field(
        "650",
        ' ',
        '0',
        &[('a', "Arithmetic"), ('x', "Juvenile poetry.")],
    ));
    record.add_field(make_field(
        "650",
        ' ',
        '0',
        &[('a', "Children's poetry, American.")],
    ));
    record.add_field(make_field(
        "650",
        ' ',
        '1',
        &[('a', "Arithmetic"), ('x', "Poetry.")],
    ));
    record.add_field(make_field("650", ' ', '1', &[('a', "American poetry.")]));
    record.add_field(make_field("650", ' ', '1', &[('a', "Visual perception.")]));
    record.add_field(make_field(
        "700",
        '1',
        ' ',
        &[('a', "Rand, Ted,"), ('e', "ill.")],
    ));

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandburg_008_length() {
        assert_eq!(SANDBURG_008.chars().count(), 40);
    }

    #[test]
    fn test_create_sandburg_record_has_expected_fields() {
        let record = create_sandburg_record();
        // 010, 020, 040, 042, 050, 082, 100, 245, 250, 260, 300, 500, 520, 650 (5x), 700
        assert_eq!(record.fields.values().map(Vec::len).sum::<usize>(), 19);
        assert_eq!(record.control_fields.len(), 4);
    }
}
