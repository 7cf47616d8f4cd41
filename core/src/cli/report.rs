use crate::types::{CaseDocument, OverlayDocument, STANDARD_CASE_VIEWS};
use std::fmt;

/// Text report formatter for a parsed case and its annotations
pub struct TextReport<'a> {
    case: &'a CaseDocument,
    overlays: &'a [(String, OverlayDocument)],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    ///
    /// `overlays` pairs a display label (typically the file name) with
    /// each parsed annotation document.
    pub fn new(case: &'a CaseDocument, overlays: &'a [(String, OverlayDocument)]) -> Self {
        Self { case, overlays }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Case Metadata")?;
        writeln!(f, "=============")?;
        writeln!(f)?;
        writeln!(f, "Date Of Study:  {}", self.case.date_of_study)?;
        writeln!(f, "Date Digitized: {}", self.case.date_digitized)?;
        for (key, value) in &self.case.attributes {
            writeln!(f, "{:<16}{}", format!("{}:", key), value)?;
        }
        writeln!(f)?;

        writeln!(f, "Views")?;
        writeln!(f, "-----")?;
        for view in STANDARD_CASE_VIEWS {
            match self.case.view(view) {
                Some(record) => {
                    let overlay = if record.has_overlay {
                        "overlay"
                    } else {
                        "no overlay"
                    };
                    write!(f, "{:<11}{}", format!("{}:", view), overlay)?;
                    if let Some((rows, cols)) = record.shape() {
                        write!(f, ", {}x{}", rows, cols)?;
                    }
                    writeln!(f)?;
                }
                None => writeln!(f, "{:<11}not in file", format!("{}:", view))?,
            }
        }

        for (label, overlay) in self.overlays {
            writeln!(f)?;
            writeln!(f, "Abnormalities: {}", label)?;
            writeln!(f, "--------------")?;
            for (i, abnormality) in overlay.iter().enumerate() {
                let names: Vec<&str> = abnormality
                    .lesion_types
                    .iter()
                    .filter_map(|lesion| lesion.name())
                    .collect();
                writeln!(f, "#{} {}", i + 1, names.join(" + "))?;
                if let Some(pathology) = abnormality.pathology() {
                    writeln!(f, "  Pathology:  {}", pathology)?;
                }
                if let Some(assessment) = abnormality.assessment() {
                    writeln!(f, "  Assessment: {}", assessment)?;
                }
                if let Some(subtlety) = abnormality.subtlety() {
                    writeln!(f, "  Subtlety:   {}", subtlety)?;
                }
                for outline in &abnormality.outlines {
                    writeln!(
                        f,
                        "  Outline {}: {} steps from ({}, {})",
                        outline.name,
                        outline.path.len(),
                        outline.start.0,
                        outline.start.1
                    )?;
                }
            }
        }

        Ok(())
    }
}
