//! Sparse voxel store: the record of which cells are painted and with what.

use std::collections::HashMap;

use crate::math::morton::decode_morton_3d;
use super::color::Color;
use super::grid::GridCoord;

/// Sparse map from lattice point to paint color.
///
/// Cells absent from the map carry the base color. Writing the base color
/// removes the entry, so every stored entry is a painted cell. Bounds are
/// the caller's responsibility; coordinates must be non-negative.
#[derive(Clone, Debug)]
pub struct VoxelStore {
    /// Morton key -> color
    voxels: HashMap<u32, Color>,
    base: Color,
}

impl VoxelStore {
    pub fn new(base: Color) -> Self {
        Self {
            voxels: HashMap::new(),
            base,
        }
    }

    /// The color that means "empty"
    pub fn base_color(&self) -> Color {
        self.base
    }

    /// Paint a cell. Painting the base color erases it.
    pub fn set(&mut self, coord: GridCoord, color: Color) {
        if color == self.base {
            self.voxels.remove(&coord.morton_key());
        } else {
            self.voxels.insert(coord.morton_key(), color);
        }
    }

    /// Erase a cell, returning the color it had
    pub fn delete(&mut self, coord: GridCoord) -> Option<Color> {
        self.voxels.remove(&coord.morton_key())
    }

    /// Stored color, or `None` for an empty cell
    pub fn get(&self, coord: GridCoord) -> Option<Color> {
        self.voxels.get(&coord.morton_key()).copied()
    }

    /// Stored color, falling back to the base color
    pub fn color_at(&self, coord: GridCoord) -> Color {
        self.get(coord).unwrap_or(self.base)
    }

    pub fn has(&self, coord: GridCoord) -> bool {
        self.voxels.contains_key(&coord.morton_key())
    }

    pub fn clear(&mut self) {
        self.voxels.clear();
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// All painted cells, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (GridCoord, Color)> + '_ {
        self.voxels.iter().map(|(&key, &color)| {
            let (x, y, z) = decode_morton_3d(key);
            (GridCoord::new(x as i32, y as i32, z as i32), color)
        })
    }

    /// Replace the whole content in one step
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = (GridCoord, Color)>) {
        self.voxels.clear();
        for (coord, color) in entries {
            self.set(coord, color);
        }
    }
}

impl Default for VoxelStore {
    fn default() -> Self {
        Self::new(Color::BASE)
    }
}
