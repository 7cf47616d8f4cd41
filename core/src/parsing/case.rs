//! Case-metadata (`.ics`) parsing
//!
//! A case-metadata file is a flat key/value grammar with two section
//! headings (`FILM`, `SEQUENCE`) that carry no record content, two
//! mandatory date lines, and one block per standard screening view. The
//! parse is staged: tokenize, fold, coerce numerics, then lift the dates
//! and view blocks out of the folded map into typed fields.

use crate::error::{DdsmError, Result};
use crate::parsing::fold::{coerce_ints, fold_records, zip_pairs};
use crate::parsing::keys::{CASE_HEADINGS, DATE_DIGITIZED, DATE_OF_STUDY, NON_OVERLAY, OVERLAY};
use crate::parsing::tokenize::tokenize_lines;
use crate::types::{AttrValue, CaseDocument, ViewRecord, STANDARD_CASE_VIEWS};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Parses the text of a case-metadata file
///
/// # Errors
///
/// - [`DdsmError::DuplicateKey`] if any key folds twice
/// - [`DdsmError::MissingField`] if either date line is absent
/// - [`DdsmError::InvalidDate`] if a date value is not three integer
///   tokens naming a real calendar date
pub fn parse_case(text: &str) -> Result<CaseDocument> {
    let records = tokenize_lines(text, &CASE_HEADINGS);
    let mut attributes = fold_records(&records)?;
    coerce_ints(&mut attributes);

    let date_digitized = take_date(&mut attributes, DATE_DIGITIZED)?;
    let date_of_study = take_date(&mut attributes, DATE_OF_STUDY)?;

    let mut views = BTreeMap::new();
    for view in STANDARD_CASE_VIEWS {
        if let Some(value) = attributes.remove(view.token()) {
            views.insert(view, view_record(value));
        }
    }

    Ok(CaseDocument {
        date_digitized,
        date_of_study,
        attributes,
        views,
    })
}

/// Removes a date attribute and parses it as `day month year`
///
/// The three tokens must all be integers and must name a real calendar
/// date; `31 2 1994` is rejected, not normalized.
fn take_date(attributes: &mut BTreeMap<String, AttrValue>, key: &str) -> Result<NaiveDate> {
    let value = attributes
        .remove(key)
        .ok_or_else(|| DdsmError::MissingField(key.to_string()))?;
    let tokens = value_tokens(value);
    if tokens.len() != 3 {
        return Err(DdsmError::InvalidDate(format!(
            "{}: expected day month year, found {} tokens",
            key,
            tokens.len()
        )));
    }

    let mut parts = [0i64; 3];
    for (part, token) in parts.iter_mut().zip(&tokens) {
        *part = token.parse().map_err(|_| {
            DdsmError::InvalidDate(format!("{}: expected integer, found '{}'", key, token))
        })?;
    }
    let [day, month, year] = parts;

    let y = i32::try_from(year).ok();
    let m = u32::try_from(month).ok();
    let d = u32::try_from(day).ok();
    match (y, m, d) {
        (Some(y), Some(m), Some(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    }
    .ok_or_else(|| {
        DdsmError::InvalidDate(format!(
            "{}: no calendar date with day {} month {} year {}",
            key, day, month, year
        ))
    })
}

/// Builds a per-view record from a folded view-block value
///
/// The sentinel tokens `OVERLAY` / `NON_OVERLAY` become the overlay flag
/// wherever they sit in the block; the remaining tokens pair off as
/// alternating key/value attributes with values numerically coerced. A
/// block with neither sentinel reads as having no overlay.
fn view_record(value: AttrValue) -> ViewRecord {
    let mut has_overlay = false;
    let mut rest = Vec::new();
    for token in value_tokens(value) {
        match token.as_str() {
            OVERLAY => has_overlay = true,
            NON_OVERLAY => has_overlay = false,
            _ => rest.push(token),
        }
    }

    let attributes = zip_pairs(&rest)
        .into_iter()
        .map(|(key, token)| (key, AttrValue::from_token(&token)))
        .collect();
    ViewRecord {
        has_overlay,
        attributes,
    }
}

/// Flattens a folded value back into its raw tokens
fn value_tokens(value: AttrValue) -> Vec<String> {
    match value {
        AttrValue::None => Vec::new(),
        AttrValue::List(items) => items
            .into_iter()
            .map(|item| match item {
                AttrValue::Text(token) => token,
                other => other.to_string(),
            })
            .collect(),
        AttrValue::Text(token) => vec![token],
        other => vec![other.to_string()],
    }
}
