//! Mathematical utilities

pub mod morton;
pub mod view;

pub use morton::{decode_morton_3d, encode_morton_3d};
pub use view::grid_local_direction;
