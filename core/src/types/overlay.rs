use super::AttrValue;
use crate::boundary::path_to_coordinates;
use crate::error::Result;
use std::collections::BTreeMap;

/// Parsed lesion-annotation (`.OVERLAY`) document
///
/// Holds one record per annotated abnormality, in file order. The record
/// count always equals the file's declared TOTAL_ABNORMALITIES; a file
/// that cannot satisfy its own counters fails to parse instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct OverlayDocument {
    /// Annotated abnormalities in file order
    pub abnormalities: Vec<AbnormalityRecord>,
}

impl OverlayDocument {
    /// Number of annotated abnormalities
    pub fn len(&self) -> usize {
        self.abnormalities.len()
    }

    /// Returns whether the document annotates no abnormalities
    pub fn is_empty(&self) -> bool {
        self.abnormalities.is_empty()
    }

    /// Iterates the abnormality records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, AbnormalityRecord> {
        self.abnormalities.iter()
    }
}

impl<'a> IntoIterator for &'a OverlayDocument {
    type Item = &'a AbnormalityRecord;
    type IntoIter = std::slice::Iter<'a, AbnormalityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.abnormalities.iter()
    }
}

/// One annotated abnormality from a lesion-annotation file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AbnormalityRecord {
    /// Attributes of the abnormality block; keys that repeat in the file
    /// accumulate into a list in file order
    pub attributes: BTreeMap<String, AttrValue>,
    /// LESION_TYPE sub-records in file order
    pub lesion_types: Vec<LesionType>,
    /// Boundary outlines in file order
    pub outlines: Vec<Outline>,
}

impl AbnormalityRecord {
    /// Returns an attribute by key
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Declared outline count; equals `outlines.len()` for a parsed record
    pub fn total_outlines(&self) -> Option<i64> {
        self.attr("TOTAL_OUTLINES")?.as_int()
    }

    /// Radiologist assessment category, when recorded
    pub fn assessment(&self) -> Option<i64> {
        self.attr("ASSESSMENT")?.as_int()
    }

    /// Subtlety rating, when recorded
    pub fn subtlety(&self) -> Option<i64> {
        self.attr("SUBTLETY")?.as_int()
    }

    /// Pathology outcome, when recorded
    pub fn pathology(&self) -> Option<&str> {
        self.attr("PATHOLOGY")?.as_str()
    }
}

/// LESION_TYPE sub-record of an abnormality
///
/// The record's first token is the lesion name, stored under `NAME`; the
/// remaining tokens pair off as qualifier key/value attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct LesionType {
    /// NAME plus qualifier pairs, as raw tokens
    pub attributes: BTreeMap<String, String>,
}

impl LesionType {
    /// Lesion name (the token following LESION_TYPE)
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("NAME").map(String::as_str)
    }

    /// Returns a qualifier by key
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// One boundary outline of an abnormality
///
/// The start coordinate is kept exactly as written in the file, in
/// (column, row) order; [`Outline::coordinates`] reverses it before
/// integrating the chain-code path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Outline {
    /// Marker naming the outline (`BOUNDARY` or `CORE` in the archive)
    pub name: String,
    /// Start coordinate as written in the file, (column, row) order
    pub start: (i64, i64),
    /// Chain-code path digits
    pub path: Vec<i64>,
}

impl Outline {
    /// Absolute boundary coordinates in (row, col) order
    ///
    /// Decodes the chain-code path and integrates it from the reversed
    /// start coordinate; the result has one more element than the path.
    ///
    /// # Errors
    ///
    /// Returns an error if any path digit is outside 0-7.
    pub fn coordinates(&self) -> Result<Vec<(i64, i64)>> {
        path_to_coordinates(self.start, &self.path)
    }
}
