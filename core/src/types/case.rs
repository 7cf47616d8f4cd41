use super::{AttrValue, CaseView, ViewRecord, STANDARD_CASE_VIEWS};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Parsed case-metadata (`.ics`) document
///
/// One document describes one screening case: the two dates every file
/// carries, the remaining case-level attributes with numeric values
/// coerced, and a record per standard view found in the file. Immutable
/// once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CaseDocument {
    /// Date the films were digitized
    pub date_digitized: NaiveDate,
    /// Date of the original study
    pub date_of_study: NaiveDate,
    /// Case-level attributes other than dates and view blocks
    pub attributes: BTreeMap<String, AttrValue>,
    /// View blocks present in the file, keyed by standard view
    pub views: BTreeMap<CaseView, ViewRecord>,
}

impl CaseDocument {
    /// Returns a case-level attribute by key
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Returns the record for a standard view, if the file carried one
    pub fn view(&self, view: CaseView) -> Option<&ViewRecord> {
        self.views.get(&view)
    }

    /// Standard views whose block declared an accompanying annotation
    /// overlay, in file-convention order
    pub fn overlay_views(&self) -> Vec<CaseView> {
        STANDARD_CASE_VIEWS
            .into_iter()
            .filter(|view| self.view(*view).is_some_and(|record| record.has_overlay))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Laterality, ViewPosition};

    fn sample_document() -> CaseDocument {
        let mut attributes = BTreeMap::new();
        attributes.insert("AGE".to_string(), AttrValue::Int(67));
        attributes.insert("DENSITY".to_string(), AttrValue::Int(3));

        let mut views = BTreeMap::new();
        views.insert(
            CaseView::new(Laterality::Left, ViewPosition::Cc),
            ViewRecord {
                has_overlay: true,
                attributes: BTreeMap::new(),
            },
        );
        views.insert(
            CaseView::new(Laterality::Right, ViewPosition::Cc),
            ViewRecord {
                has_overlay: false,
                attributes: BTreeMap::new(),
            },
        );

        CaseDocument {
            date_digitized: NaiveDate::from_ymd_opt(1997, 7, 22).unwrap(),
            date_of_study: NaiveDate::from_ymd_opt(1997, 7, 8).unwrap(),
            attributes,
            views,
        }
    }

    #[test]
    fn test_attr_lookup() {
        let doc = sample_document();
        assert_eq!(doc.attr("AGE").and_then(AttrValue::as_int), Some(67));
        assert_eq!(doc.attr("MISSING"), None);
    }

    #[test]
    fn test_view_lookup() {
        let doc = sample_document();
        let left_cc = CaseView::new(Laterality::Left, ViewPosition::Cc);
        let left_mlo = CaseView::new(Laterality::Left, ViewPosition::Mlo);
        assert!(doc.view(left_cc).is_some());
        assert!(doc.view(left_mlo).is_none());
    }

    #[test]
    fn test_overlay_views() {
        let doc = sample_document();
        let overlay = doc.overlay_views();
        assert_eq!(
            overlay,
            vec![CaseView::new(Laterality::Left, ViewPosition::Cc)]
        );
    }
}
