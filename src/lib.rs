//! Volumetrik - voxel painting core
//!
//! A bounded grid of paintable points with stroke-based undo/redo,
//! layer slicing, x-ray and face-exposure culling, and flood fill.

pub mod core;
pub mod math;
pub mod voxel;
pub mod editor;
