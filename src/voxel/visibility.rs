//! Per-cell render visibility: layer slicing, x-ray and face-exposure culling.

use crate::core::types::Vec3;
use super::grid::{FACE_OFFSETS, Grid, GridCoord};
use super::store::VoxelStore;

/// A face counts as facing the camera when `normal . forward` is at most this
pub const FACE_CULL_THRESHOLD: f32 = -0.225;

/// View parameters that visibility depends on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParams {
    /// Number of y-layers shown from the bottom (L), at least 1
    pub layers: u32,
    /// Show only the topmost cutoff layer
    pub xray: bool,
    /// Show placeholders for empty cells
    pub show_empty: bool,
    /// Camera forward direction in grid-local space
    pub camera_forward: Vec3,
}

impl ViewParams {
    /// y index of the topmost visible layer
    fn top_layer(&self) -> i32 {
        self.layers.max(1) as i32 - 1
    }
}

/// Decide whether a single cell should be rendered.
///
/// `camera_forward` is expected to be normalized; see [`compute_visibility`].
pub fn is_cell_visible(grid: &Grid, store: &VoxelStore, view: &ViewParams, coord: GridCoord) -> bool {
    let filled = store.has(coord);

    if view.xray {
        if coord.y != view.top_layer() {
            return false;
        }
        return filled || view.show_empty;
    }

    if coord.y >= view.layers as i32 {
        return false;
    }
    if filled {
        return true;
    }
    if !view.show_empty {
        return false;
    }
    if view.layers == 1 {
        // Single layer: the whole floor grid stays visible
        return true;
    }

    FACE_OFFSETS.iter().any(|&offset| {
        if offset.as_vec3().dot(view.camera_forward) > FACE_CULL_THRESHOLD {
            return false;
        }
        let neighbor = coord.offset(offset);
        !grid.contains(neighbor) || neighbor.y >= view.layers as i32
    })
}

/// Dense per-cell visibility flags, indexed like [`Grid::index_of`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMask {
    grid: Grid,
    flags: Vec<bool>,
}

impl VisibilityMask {
    /// Mask with every cell hidden
    pub fn hidden(grid: Grid) -> Self {
        Self {
            grid,
            flags: vec![false; grid.cell_count()],
        }
    }

    pub fn is_visible(&self, coord: GridCoord) -> bool {
        self.grid
            .index_of(coord)
            .map(|i| self.flags[i])
            .unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.flags.iter().filter(|&&v| v).count()
    }

    /// Coordinates of every visible cell in dense order
    pub fn visible_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| self.grid.coord_at(i))
    }
}

/// Recompute visibility for the whole grid
pub fn compute_visibility(grid: &Grid, store: &VoxelStore, view: &ViewParams) -> VisibilityMask {
    let view = ViewParams {
        camera_forward: view.camera_forward.normalize_or_zero(),
        ..*view
    };
    let flags = grid
        .cells()
        .map(|coord| is_cell_visible(grid, store, &view, coord))
        .collect();
    VisibilityMask { grid: *grid, flags }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::color::Color;

    fn view(layers: u32, xray: bool, show_empty: bool) -> ViewParams {
        ViewParams {
            layers,
            xray,
            show_empty,
            camera_forward: Vec3::splat(-1.0).normalize(),
        }
    }

    #[test]
    fn test_single_layer_shows_floor() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();
        let mask = compute_visibility(&grid, &store, &view(1, false, true));

        for coord in grid.cells() {
            assert_eq!(mask.is_visible(coord), coord.y == 0, "{coord}");
        }
        assert_eq!(mask.visible_count(), 16);
    }

    #[test]
    fn test_xray_only_top_layer() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(1, 0, 1), Color::ACTIVE);
        store.set(GridCoord::new(1, 2, 1), Color::ACTIVE);

        let mask = compute_visibility(&grid, &store, &view(3, true, false));
        assert!(mask.visible_cells().all(|c| c.y == 2));
        assert_eq!(mask.visible_count(), 1);
        assert!(!mask.is_visible(GridCoord::new(1, 0, 1)));

        let mask = compute_visibility(&grid, &store, &view(3, true, true));
        assert_eq!(mask.visible_count(), 16);
    }

    #[test]
    fn test_cells_above_cutoff_hidden() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(0, 3, 0), Color::ACTIVE);
        store.set(GridCoord::new(0, 1, 0), Color::ACTIVE);

        let mask = compute_visibility(&grid, &store, &view(2, false, false));
        assert!(!mask.is_visible(GridCoord::new(0, 3, 0)));
        assert!(mask.is_visible(GridCoord::new(0, 1, 0)));
        assert_eq!(mask.visible_count(), 1);
    }

    #[test]
    fn test_empty_hidden_without_show_empty() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();
        assert_eq!(compute_visibility(&grid, &store, &view(1, false, false)).visible_count(), 0);
        assert_eq!(compute_visibility(&grid, &store, &view(4, false, false)).visible_count(), 0);
    }

    #[test]
    fn test_boundary_faces_toward_camera() {
        // Camera looks down the diagonal, so +x, +y and +z faces point at it.
        let grid = Grid::new(4);
        let store = VoxelStore::default();
        let mask = compute_visibility(&grid, &store, &view(2, false, true));

        // Top of the slice (y = 1) is exposed through +y
        assert!(mask.is_visible(GridCoord::new(0, 1, 0)));
        // Far walls are exposed through +x / +z
        assert!(mask.is_visible(GridCoord::new(3, 0, 1)));
        assert!(mask.is_visible(GridCoord::new(1, 0, 3)));
        // Interior bottom cell only has -y out of bounds, which faces away
        assert!(!mask.is_visible(GridCoord::new(1, 0, 1)));
        assert!(!mask.is_visible(GridCoord::new(0, 0, 0)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();
        let coord = GridCoord::new(1, 1, 1);
        let mut params = view(2, false, true);

        // +y normal dotted with forward is exactly the threshold
        params.camera_forward = Vec3::new(0.0, FACE_CULL_THRESHOLD, -(1.0 - FACE_CULL_THRESHOLD.powi(2)).sqrt());
        assert!(is_cell_visible(&grid, &store, &params, coord));

        params.camera_forward = Vec3::new(0.0, -0.2, -(1.0f32 - 0.04).sqrt());
        assert!(!is_cell_visible(&grid, &store, &params, coord));
    }

    #[test]
    fn test_filled_always_visible_below_cutoff() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(1, 0, 1), Color::ACTIVE);
        let mask = compute_visibility(&grid, &store, &view(3, false, true));
        assert!(mask.is_visible(GridCoord::new(1, 0, 1)));
    }
}
