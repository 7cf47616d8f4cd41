pub mod api;
pub mod boundary;
pub mod cli;
pub mod error;
pub mod parsing;
pub mod types;

pub use api::{read_case, read_overlay};
pub use boundary::{decode_step, fill_mask, integrate_path, path_to_coordinates, point_mask};
pub use cli::report::TextReport;
pub use error::{DdsmError, Result};
pub use types::*;
