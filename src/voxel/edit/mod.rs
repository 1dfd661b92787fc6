//! Voxel edit system: stroke recording with undo/redo.
//!
//! Every user gesture is captured as a stroke of per-voxel color
//! transitions, which can be replayed backwards or forwards.

pub mod delta;
pub mod history;

pub use delta::{Stroke, StrokeKind, VoxelChange};
pub use history::{EditHistory, HistoryState};
