//! Key/value folding of tokenized records

use crate::error::{DdsmError, Result};
use crate::parsing::tokenize::Record;
use crate::types::AttrValue;
use std::collections::BTreeMap;

/// Folds records into a key-to-value map
///
/// Each record's first token is the key; the remainder folds with
/// [`fold_rest`]. The case-metadata grammar never legitimately repeats a
/// key, so a repeat is reported rather than silently replaced.
///
/// # Errors
///
/// Returns [`DdsmError::DuplicateKey`] naming the key and its second
/// source line.
pub fn fold_records(records: &[Record]) -> Result<BTreeMap<String, AttrValue>> {
    let mut map = BTreeMap::new();
    for record in records {
        let key = record.key();
        if map.contains_key(key) {
            return Err(DdsmError::DuplicateKey {
                key: key.to_string(),
                line: record.line,
            });
        }
        map.insert(key.to_string(), fold_rest(record.rest()));
    }
    Ok(map)
}

/// Folds a record remainder into its value form
///
/// No tokens fold to the no-value marker, one token to a text scalar,
/// several to a list of text scalars. Numeric coercion is a separate,
/// explicit pass.
pub fn fold_rest(rest: &[String]) -> AttrValue {
    match rest {
        [] => AttrValue::None,
        [token] => AttrValue::Text(token.clone()),
        _ => AttrValue::List(rest.iter().map(|t| AttrValue::Text(t.clone())).collect()),
    }
}

/// Coerces every top-level text scalar that is a base-10 integer literal
///
/// List elements stay raw: the grammars that consume lists (dates, view
/// blocks) parse their own elements.
pub fn coerce_ints(map: &mut BTreeMap<String, AttrValue>) {
    for value in map.values_mut() {
        if let AttrValue::Text(token) = value {
            let coerced = AttrValue::from_token(token);
            *value = coerced;
        }
    }
}

/// Pairs alternating key/value tokens
///
/// An odd leftover token becomes a key paired with an empty-string value.
pub fn zip_pairs(tokens: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut chunks = tokens.chunks_exact(2);
    for chunk in &mut chunks {
        pairs.push((chunk[0].clone(), chunk[1].clone()));
    }
    if let [leftover] = chunks.remainder() {
        pairs.push((leftover.clone(), String::new()));
    }
    pairs
}
