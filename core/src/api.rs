use crate::error::Result;
use crate::parsing::{parse_case, parse_overlay};
use crate::types::{CaseDocument, OverlayDocument};
use std::fs;
use std::path::Path;

/// Reads and parses a case-metadata (`.ics`) file
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use ddsmcat_core::read_case;
///
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, "DATE_OF_STUDY 2 10 1996").unwrap();
/// writeln!(file, "DATE_DIGITIZED 11 7 1997").unwrap();
/// writeln!(file, "LEFT_CC LINES 100 PIXELS_PER_LINE 80 OVERLAY").unwrap();
///
/// let case = read_case(file.path()).unwrap();
/// assert_eq!(case.overlay_views().len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`crate::DdsmError::IoError`] if the file cannot be read, or
/// any case-metadata parse error from [`parse_case`].
pub fn read_case<P: AsRef<Path>>(path: P) -> Result<CaseDocument> {
    let text = fs::read_to_string(path)?;
    parse_case(&text)
}

/// Reads and parses a lesion-annotation (`.OVERLAY`) file
///
/// # Errors
///
/// Returns [`crate::DdsmError::IoError`] if the file cannot be read, or
/// any annotation parse error from [`parse_overlay`].
pub fn read_overlay<P: AsRef<Path>>(path: P) -> Result<OverlayDocument> {
    let text = fs::read_to_string(path)?;
    parse_overlay(&text)
}
