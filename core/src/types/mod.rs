//! Core type definitions for parsed archive documents
//!
//! This module provides the fundamental types used throughout the ddsmcat library:
//! - [`AttrValue`]: Tagged attribute value (integer, text, list, or no-value marker)
//! - [`Laterality`]: Breast laterality (Left, Right)
//! - [`ViewPosition`]: View positions (CC, MLO)
//! - [`CaseView`]: Combined laterality and view position, one per view block
//! - [`CaseDocument`]: Parsed case-metadata (`.ics`) file
//! - [`OverlayDocument`]: Parsed lesion-annotation (`.OVERLAY`) file

mod case;
mod overlay;
mod value;
mod view;

pub use case::CaseDocument;
pub use overlay::{AbnormalityRecord, LesionType, Outline, OverlayDocument};
pub use value::AttrValue;
pub use view::{CaseView, Laterality, ViewPosition, ViewRecord, STANDARD_CASE_VIEWS};
