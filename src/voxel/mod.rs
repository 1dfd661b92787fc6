//! Voxel data structures and operations

pub mod color;
pub mod grid;
pub mod store;
pub mod edit;
pub mod visibility;
pub mod fill;
pub mod layers;
pub mod appearance;
pub mod model;

pub use color::{Color, Palette};
pub use grid::{FACE_OFFSETS, Grid, GridCoord};
pub use store::VoxelStore;
pub use edit::{EditHistory, HistoryState, Stroke, StrokeKind, VoxelChange};
pub use visibility::{FACE_CULL_THRESHOLD, ViewParams, VisibilityMask, compute_visibility};
pub use fill::{FillConstraint, FillPlan, FillRequest, plan_flood_fill};
pub use layers::LayerCutoff;
pub use appearance::CellAppearance;
pub use model::VoxelRecord;
