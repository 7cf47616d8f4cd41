//! Key and marker tokens of the archive grammars

// Case-metadata structure
pub const CASE_HEADINGS: [&str; 2] = ["FILM", "SEQUENCE"];
pub const DATE_DIGITIZED: &str = "DATE_DIGITIZED";
pub const DATE_OF_STUDY: &str = "DATE_OF_STUDY";

// View-block sentinels
pub const OVERLAY: &str = "OVERLAY";
pub const NON_OVERLAY: &str = "NON_OVERLAY";

// Annotation structure
pub const TOTAL_ABNORMALITIES: &str = "TOTAL_ABNORMALITIES";
pub const TOTAL_OUTLINES: &str = "TOTAL_OUTLINES";
pub const LESION_TYPE: &str = "LESION_TYPE";
pub const LESION_NAME: &str = "NAME";
