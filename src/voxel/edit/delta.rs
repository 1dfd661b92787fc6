//! Per-voxel color transitions and the strokes that group them.

use crate::voxel::color::Color;
use crate::voxel::grid::GridCoord;

/// Gesture that produced a stroke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeKind {
    Paint,
    Erase,
    Fill,
}

/// One recorded color transition. The base color stands for "empty".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoxelChange {
    pub coord: GridCoord,
    pub old_color: Color,
    pub new_color: Color,
}

/// Ordered transitions from one continuous gesture; the unit of undo.
#[derive(Clone, Debug)]
pub struct Stroke {
    pub kind: StrokeKind,
    changes: Vec<VoxelChange>,
}

impl Stroke {
    pub fn new(kind: StrokeKind) -> Self {
        Self {
            kind,
            changes: Vec::new(),
        }
    }

    /// Append a transition. Returns false for a no-op change, which is dropped.
    pub fn push(&mut self, coord: GridCoord, old_color: Color, new_color: Color) -> bool {
        if old_color == new_color {
            return false;
        }
        self.changes.push(VoxelChange { coord, old_color, new_color });
        true
    }

    pub fn changes(&self) -> &[VoxelChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
