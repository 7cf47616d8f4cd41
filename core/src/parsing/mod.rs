pub mod case;
pub mod fold;
pub mod keys;
pub mod overlay;
pub mod tokenize;

pub use case::parse_case;
pub use fold::{coerce_ints, fold_records, fold_rest, zip_pairs};
pub use keys::*;
pub use overlay::{parse_overlay, parse_overlay_records};
pub use tokenize::{tokenize_lines, Record};
