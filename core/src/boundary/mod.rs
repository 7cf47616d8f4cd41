//! Boundary geometry: chain-code decoding and mask rasterization
//!
//! - [`decode_step`], [`integrate_path`], [`path_to_coordinates`]: turn a
//!   stored start coordinate plus chain-code digits into absolute
//!   (row, col) boundary coordinates
//! - [`point_mask`], [`fill_mask`]: rasterize a coordinate sequence onto a
//!   caller-supplied image shape

mod chain;
mod mask;

pub use chain::{decode_step, integrate_path, path_to_coordinates};
pub use mask::{fill_mask, point_mask};
