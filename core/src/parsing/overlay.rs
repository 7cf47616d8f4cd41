//! Lesion-annotation (`.OVERLAY`) parsing
//!
//! An annotation file is a flat record stream with only two inline
//! counters giving it structure: a leading `TOTAL_ABNORMALITIES` count,
//! and one `TOTAL_OUTLINES` marker closing each abnormality's attribute
//! block. Everything between the cursor and the next marker belongs to
//! the current abnormality; the declared number of outline record pairs
//! (a name record, then a start-coordinate + chain-code record) follows
//! the marker.
//!
//! The parser works over the full record slice with an explicit cursor
//! rather than consuming an iterator, because finding each block's end
//! requires looking ahead for the marker before the block is folded.
//! Unlike the case-metadata grammar, keys here legitimately repeat, so
//! folding accumulates repeats into lists in file order.

use crate::error::{DdsmError, Result};
use crate::parsing::fold::{fold_rest, zip_pairs};
use crate::parsing::keys::{LESION_NAME, LESION_TYPE, TOTAL_ABNORMALITIES, TOTAL_OUTLINES};
use crate::parsing::tokenize::{tokenize_lines, Record};
use crate::types::{AbnormalityRecord, AttrValue, LesionType, Outline, OverlayDocument};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Parses the text of a lesion-annotation file
///
/// # Errors
///
/// - [`DdsmError::MissingField`] if the file does not open with
///   `TOTAL_ABNORMALITIES`
/// - [`DdsmError::ExpectedInteger`] for a malformed count, coordinate,
///   or chain-code token
/// - [`DdsmError::Truncated`] if the stream ends before a declared
///   marker or outline record
pub fn parse_overlay(text: &str) -> Result<OverlayDocument> {
    parse_overlay_records(&tokenize_lines(text, &[]))
}

/// Parses an already-tokenized record sequence
///
/// Kept separate from [`parse_overlay`] so the lookahead scan can be
/// exercised on in-memory record sequences.
pub fn parse_overlay_records(records: &[Record]) -> Result<OverlayDocument> {
    let first = records
        .first()
        .filter(|record| record.key() == TOTAL_ABNORMALITIES)
        .ok_or_else(|| DdsmError::MissingField(TOTAL_ABNORMALITIES.to_string()))?;
    let total = parse_count(first)?;

    // Declared count is untrusted; cap the preallocation at the record count.
    let mut abnormalities = Vec::with_capacity(total.min(records.len()));
    let mut cursor = 1;
    for index in 0..total {
        let (record, next) = parse_abnormality(records, cursor, index)?;
        abnormalities.push(record);
        cursor = next;
    }
    // Records past the declared count are ignored.
    Ok(OverlayDocument { abnormalities })
}

/// Parses one abnormality starting at `cursor`
///
/// Returns the record plus the cursor position after its outline records.
fn parse_abnormality(
    records: &[Record],
    cursor: usize,
    index: usize,
) -> Result<(AbnormalityRecord, usize)> {
    // Look ahead for the marker closing the attribute block.
    let marker = (cursor..records.len())
        .find(|&i| records[i].key() == TOTAL_OUTLINES)
        .ok_or_else(|| {
            DdsmError::Truncated(format!(
                "no {} marker for abnormality {}",
                TOTAL_OUTLINES,
                index + 1
            ))
        })?;

    let mut attributes = BTreeMap::new();
    let mut lesion_types = Vec::new();
    for record in &records[cursor..=marker] {
        if record.key() == LESION_TYPE {
            lesion_types.push(lesion_type(record.rest()));
        } else {
            let value = attribute_value(record.rest());
            accumulate(&mut attributes, record.key(), value);
        }
    }

    let total_outlines = parse_count(&records[marker])?;
    let mut outlines = Vec::with_capacity(total_outlines.min(records.len()));
    let mut next = marker + 1;
    for outline_index in 0..total_outlines {
        outlines.push(parse_outline(records, next, index, outline_index)?);
        next += 2;
    }

    Ok((
        AbnormalityRecord {
            attributes,
            lesion_types,
            outlines,
        },
        next,
    ))
}

/// Parses one outline record pair: a name record, then a record holding
/// the start coordinate, the chain-code digits, and a trailing terminator
///
/// The start coordinate is stored exactly as written, (column, row). The
/// final token of the second record is the terminator and is discarded
/// without inspection.
fn parse_outline(
    records: &[Record],
    cursor: usize,
    abnormality: usize,
    outline: usize,
) -> Result<Outline> {
    let missing = || {
        DdsmError::Truncated(format!(
            "missing records for outline {} of abnormality {}",
            outline + 1,
            abnormality + 1
        ))
    };
    let name_record = records.get(cursor).ok_or_else(missing)?;
    let path_record = records.get(cursor + 1).ok_or_else(missing)?;

    let tokens = &path_record.tokens;
    if tokens.len() < 3 {
        return Err(DdsmError::Truncated(format!(
            "outline record on line {} needs a start coordinate and terminator",
            path_record.line
        )));
    }

    let start_col = parse_int(&tokens[0], "start column", path_record.line)?;
    let start_row = parse_int(&tokens[1], "start row", path_record.line)?;
    let mut path = Vec::with_capacity(tokens.len() - 3);
    for token in &tokens[2..tokens.len() - 1] {
        path.push(parse_int(token, "chain code", path_record.line)?);
    }

    Ok(Outline {
        name: name_record.key().to_string(),
        start: (start_col, start_row),
        path,
    })
}

/// Reads the integer count from a counter record such as
/// `TOTAL_ABNORMALITIES 2`
fn parse_count(record: &Record) -> Result<usize> {
    let what = format!("{} count", record.key());
    let token = record
        .rest()
        .first()
        .ok_or_else(|| DdsmError::ExpectedInteger {
            what: what.clone(),
            token: String::new(),
            line: record.line,
        })?;
    let n = parse_int(token, &what, record.line)?;
    usize::try_from(n).map_err(|_| DdsmError::ExpectedInteger {
        what: format!("non-negative {}", what),
        token: token.clone(),
        line: record.line,
    })
}

fn parse_int(token: &str, what: &str, line: usize) -> Result<i64> {
    token.parse().map_err(|_| DdsmError::ExpectedInteger {
        what: what.to_string(),
        token: token.to_string(),
        line,
    })
}

/// Simplifies a record remainder into an attribute value, with the
/// single-token form numerically coerced
fn attribute_value(rest: &[String]) -> AttrValue {
    match fold_rest(rest) {
        AttrValue::Text(token) => AttrValue::from_token(&token),
        value => value,
    }
}

/// Inserts a value under `key`, growing an existing entry into a list
///
/// Repeats extend in file order; a scalar met again becomes a
/// two-element list.
fn accumulate(attributes: &mut BTreeMap<String, AttrValue>, key: &str, value: AttrValue) {
    match attributes.entry(key.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            AttrValue::List(items) => items.push(value),
            existing => {
                let first = std::mem::replace(existing, AttrValue::None);
                *existing = AttrValue::List(vec![first, value]);
            }
        },
    }
}

/// Builds a LESION_TYPE sub-record: the fixed NAME field, then the
/// remaining tokens paired off as qualifier key/values
fn lesion_type(rest: &[String]) -> LesionType {
    let mut tokens = Vec::with_capacity(rest.len() + 1);
    tokens.push(LESION_NAME.to_string());
    tokens.extend(rest.iter().cloned());
    LesionType {
        attributes: zip_pairs(&tokens).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_OVERLAY: &str = "\
TOTAL_ABNORMALITIES 2
ABNORMALITY 1
LESION_TYPE MASS SHAPE OVAL MARGINS OBSCURED
ASSESSMENT 4
SUBTLETY 3
PATHOLOGY MALIGNANT
TOTAL_OUTLINES 2
BOUNDARY
10 5 2 2 4 4 6 6 0 0 #
CORE
11 6 2 4 6 0 #
ABNORMALITY 2
LESION_TYPE CALCIFICATION TYPE PLEOMORPHIC DISTRIBUTION CLUSTERED
LESION_TYPE CALCIFICATION TYPE AMORPHOUS DISTRIBUTION CLUSTERED
ASSESSMENT 3
SUBTLETY 4
PATHOLOGY BENIGN
TOTAL_OUTLINES 1
BOUNDARY
40 30 1 3 5 7 #
";

    #[test]
    fn test_record_count_matches_declared() {
        let doc = parse_overlay(SAMPLE_OVERLAY).unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_first_abnormality() {
        let doc = parse_overlay(SAMPLE_OVERLAY).unwrap();
        let abn = &doc.abnormalities[0];

        assert_eq!(abn.attr("ABNORMALITY"), Some(&AttrValue::Int(1)));
        assert_eq!(abn.assessment(), Some(4));
        assert_eq!(abn.subtlety(), Some(3));
        assert_eq!(abn.pathology(), Some("MALIGNANT"));
        assert_eq!(abn.total_outlines(), Some(2));

        assert_eq!(abn.lesion_types.len(), 1);
        let lesion = &abn.lesion_types[0];
        assert_eq!(lesion.name(), Some("MASS"));
        assert_eq!(lesion.attr("SHAPE"), Some("OVAL"));
        assert_eq!(lesion.attr("MARGINS"), Some("OBSCURED"));
    }

    #[test]
    fn test_outlines() {
        let doc = parse_overlay(SAMPLE_OVERLAY).unwrap();
        let abn = &doc.abnormalities[0];
        assert_eq!(abn.outlines.len(), 2);

        let boundary = &abn.outlines[0];
        assert_eq!(boundary.name, "BOUNDARY");
        assert_eq!(boundary.start, (10, 5));
        assert_eq!(boundary.path, vec![2, 2, 4, 4, 6, 6, 0, 0]);

        let core = &abn.outlines[1];
        assert_eq!(core.name, "CORE");
        assert_eq!(core.start, (11, 6));
        assert_eq!(core.path, vec![2, 4, 6, 0]);
    }

    #[test]
    fn test_repeated_lesion_type_kept_in_order() {
        let doc = parse_overlay(SAMPLE_OVERLAY).unwrap();
        let abn = &doc.abnormalities[1];
        assert_eq!(abn.lesion_types.len(), 2);
        assert_eq!(abn.lesion_types[0].attr("TYPE"), Some("PLEOMORPHIC"));
        assert_eq!(abn.lesion_types[1].attr("TYPE"), Some("AMORPHOUS"));
        assert_eq!(abn.outlines.len(), 1);
        assert_eq!(abn.total_outlines(), Some(1));
    }

    #[test]
    fn test_repeated_key_accumulates() {
        let text = "\
TOTAL_ABNORMALITIES 1
COMMENT FIRST
COMMENT SECOND
COMMENT 3
TOTAL_OUTLINES 0
";
        let doc = parse_overlay(text).unwrap();
        let comment = doc.abnormalities[0].attr("COMMENT").unwrap();
        assert_eq!(
            comment,
            &AttrValue::List(vec![
                AttrValue::Text("FIRST".to_string()),
                AttrValue::Text("SECOND".to_string()),
                AttrValue::Int(3),
            ])
        );
    }

    #[test]
    fn test_zero_abnormalities() {
        let doc = parse_overlay("TOTAL_ABNORMALITIES 0\nTRAILING CONTENT\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_trailing_records_ignored() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 1
BOUNDARY
1 1 2 #
LEFTOVER RECORD
";
        let doc = parse_overlay(text).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.abnormalities[0].outlines[0].path, vec![2]);
    }

    #[test]
    fn test_missing_declaration_rejected() {
        assert!(matches!(
            parse_overlay("").unwrap_err(),
            DdsmError::MissingField(ref field) if field == TOTAL_ABNORMALITIES
        ));
        assert!(matches!(
            parse_overlay("ASSESSMENT 4\n").unwrap_err(),
            DdsmError::MissingField(_)
        ));
    }

    #[test]
    fn test_empty_record_rejected() {
        let records = vec![Record {
            line: 1,
            tokens: Vec::new(),
        }];
        let err = parse_overlay_records(&records).unwrap_err();
        assert!(matches!(err, DdsmError::MissingField(_)));
    }

    #[test]
    fn test_non_integer_count_rejected() {
        let err = parse_overlay("TOTAL_ABNORMALITIES x\n").unwrap_err();
        assert!(matches!(
            err,
            DdsmError::ExpectedInteger { line: 1, ref token, .. } if token == "x"
        ));
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(matches!(
            parse_overlay("TOTAL_ABNORMALITIES -1\n").unwrap_err(),
            DdsmError::ExpectedInteger { .. }
        ));
    }

    #[test]
    fn test_huge_declared_count_rejected() {
        let err = parse_overlay("TOTAL_ABNORMALITIES 9000000000000000000\n").unwrap_err();
        assert!(matches!(err, DdsmError::Truncated(_)));
    }

    #[test]
    fn test_huge_outline_count_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 9000000000000000000
";
        let err = parse_overlay(text).unwrap_err();
        assert!(matches!(err, DdsmError::Truncated(_)));
    }

    #[test]
    fn test_missing_marker_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
ASSESSMENT 4
SUBTLETY 3
";
        let err = parse_overlay(text).unwrap_err();
        assert!(matches!(err, DdsmError::Truncated(_)));
    }

    #[test]
    fn test_marker_required_per_abnormality() {
        // Second declared abnormality has no marker before end of file.
        let text = "\
TOTAL_ABNORMALITIES 2
TOTAL_OUTLINES 1
BOUNDARY
1 1 2 #
ASSESSMENT 4
";
        let err = parse_overlay(text).unwrap_err();
        assert!(matches!(err, DdsmError::Truncated(_)));
    }

    #[test]
    fn test_truncated_outline_records_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 2
BOUNDARY
1 1 2 #
";
        let err = parse_overlay(text).unwrap_err();
        assert!(matches!(err, DdsmError::Truncated(_)));
    }

    #[test]
    fn test_short_outline_record_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 1
BOUNDARY
5 #
";
        assert!(matches!(
            parse_overlay(text).unwrap_err(),
            DdsmError::Truncated(_)
        ));
    }

    #[test]
    fn test_non_integer_start_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 1
BOUNDARY
x 5 2 #
";
        assert!(matches!(
            parse_overlay(text).unwrap_err(),
            DdsmError::ExpectedInteger { line: 4, .. }
        ));
    }

    #[test]
    fn test_non_integer_chain_token_rejected() {
        let text = "\
TOTAL_ABNORMALITIES 1
TOTAL_OUTLINES 1
BOUNDARY
5 5 2 x 4 #
";
        assert!(matches!(
            parse_overlay(text).unwrap_err(),
            DdsmError::ExpectedInteger { ref token, .. } if token == "x"
        ));
    }

    #[test]
    fn test_lesion_type_odd_qualifier() {
        let text = "\
TOTAL_ABNORMALITIES 1
LESION_TYPE MASS SHAPE
TOTAL_OUTLINES 0
";
        let doc = parse_overlay(text).unwrap();
        let lesion = &doc.abnormalities[0].lesion_types[0];
        assert_eq!(lesion.name(), Some("MASS"));
        assert_eq!(lesion.attr("SHAPE"), Some(""));
    }

    #[test]
    fn test_bare_attribute_key() {
        let text = "\
TOTAL_ABNORMALITIES 1
FLAGGED
TOTAL_OUTLINES 0
";
        let doc = parse_overlay(text).unwrap();
        assert_eq!(doc.abnormalities[0].attr("FLAGGED"), Some(&AttrValue::None));
    }
}
