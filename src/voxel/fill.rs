//! Constrained breadth-first flood fill over the voxel grid.

use std::collections::{HashSet, VecDeque};

use log::debug;

use super::color::Color;
use super::grid::{FACE_OFFSETS, Grid, GridCoord};
use super::store::VoxelStore;

/// Flood fill input, sampled once when the fill starts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillRequest {
    /// Picked start cell
    pub start: GridCoord,
    /// Color to fill with
    pub color: Color,
    /// Spread through every visible layer instead of one slice
    pub span_layers: bool,
    /// Current layer cutoff (L)
    pub layers: u32,
}

/// Region a fill may spread through, chosen once at fill start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillConstraint {
    /// Only the horizontal slice at this y
    Slice(i32),
    /// Only y below the layer cutoff
    VisibleLayers(u32),
    /// Anywhere in the grid
    Unbounded,
}

impl FillConstraint {
    /// Select the constraint for a fill replacing `current`
    pub fn select(current: Color, base: Color, request: &FillRequest) -> Self {
        if request.span_layers {
            FillConstraint::VisibleLayers(request.layers)
        } else if current == base {
            FillConstraint::Slice(request.start.y)
        } else {
            FillConstraint::Unbounded
        }
    }

    pub fn allows(&self, coord: GridCoord) -> bool {
        match *self {
            FillConstraint::Slice(y) => coord.y == y,
            FillConstraint::VisibleLayers(layers) => coord.y < layers as i32,
            FillConstraint::Unbounded => true,
        }
    }
}

/// The cells a fill will recolor, in breadth-first order
#[derive(Clone, Debug, PartialEq)]
pub struct FillPlan {
    /// Color being replaced
    pub current: Color,
    /// Replacement color
    pub target: Color,
    pub constraint: FillConstraint,
    pub cells: Vec<GridCoord>,
}

/// Find the connected region a fill would recolor.
///
/// Returns `None` when the fill would do nothing: the start cell is outside
/// the grid or the constraint, or it already has the target color.
pub fn plan_flood_fill(grid: &Grid, store: &VoxelStore, request: &FillRequest) -> Option<FillPlan> {
    let start = request.start;
    if !grid.contains(start) {
        return None;
    }

    let current = store.color_at(start);
    if current == request.color {
        return None;
    }

    let constraint = FillConstraint::select(current, store.base_color(), request);
    if !constraint.allows(start) {
        return None;
    }

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut cells = Vec::new();

    while let Some(coord) = queue.pop_front() {
        // Cells of another color bound the fill and do not propagate it
        if store.color_at(coord) != current {
            continue;
        }
        cells.push(coord);

        for &offset in &FACE_OFFSETS {
            let neighbor = coord.offset(offset);
            if grid.contains(neighbor) && constraint.allows(neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        "Fill from {} ({} -> {}, {:?}) covers {} cells",
        start, current, request.color, constraint, cells.len()
    );

    Some(FillPlan {
        current,
        target: request.color,
        constraint,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue() -> Color {
        Color::rgb(0x30, 0x60, 0xFF)
    }

    fn request(start: GridCoord, span_layers: bool, layers: u32) -> FillRequest {
        FillRequest { start, color: blue(), span_layers, layers }
    }

    #[test]
    fn test_fill_stops_at_boundary() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(0, 0, 0), Color::ACTIVE);
        store.set(GridCoord::new(1, 0, 0), Color::ACTIVE);
        store.set(GridCoord::new(3, 0, 0), Color::ACTIVE);

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(0, 0, 0), false, 1)).unwrap();
        assert_eq!(plan.current, Color::ACTIVE);
        assert_eq!(plan.cells, vec![GridCoord::new(0, 0, 0), GridCoord::new(1, 0, 0)]);
    }

    #[test]
    fn test_same_color_is_noop() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(0, 0, 0), blue());
        assert!(plan_flood_fill(&grid, &store, &request(GridCoord::new(0, 0, 0), false, 4)).is_none());
    }

    #[test]
    fn test_empty_fill_stays_in_slice() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(2, 1, 2), false, 4)).unwrap();
        assert_eq!(plan.constraint, FillConstraint::Slice(1));
        assert_eq!(plan.cells.len(), 16);
        assert!(plan.cells.iter().all(|c| c.y == 1));
    }

    #[test]
    fn test_span_layers_limited_to_cutoff() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(0, 0, 0), true, 2)).unwrap();
        assert_eq!(plan.constraint, FillConstraint::VisibleLayers(2));
        assert_eq!(plan.cells.len(), 32);
        assert!(plan.cells.iter().all(|c| c.y < 2));
    }

    #[test]
    fn test_painted_region_crosses_layers() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        // A vertical column reaching above the cutoff
        for y in 0..4 {
            store.set(GridCoord::new(1, y, 1), Color::ACTIVE);
        }

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(1, 0, 1), false, 1)).unwrap();
        assert_eq!(plan.constraint, FillConstraint::Unbounded);
        assert_eq!(plan.cells.len(), 4);

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(1, 0, 1), true, 2)).unwrap();
        assert_eq!(plan.cells.len(), 2);
    }

    #[test]
    fn test_start_outside_grid_or_constraint() {
        let grid = Grid::new(4);
        let store = VoxelStore::default();
        assert!(plan_flood_fill(&grid, &store, &request(GridCoord::new(4, 0, 0), false, 4)).is_none());
        assert!(plan_flood_fill(&grid, &store, &request(GridCoord::new(0, 3, 0), true, 2)).is_none());
    }

    #[test]
    fn test_diagonal_cells_not_connected() {
        let grid = Grid::new(4);
        let mut store = VoxelStore::default();
        store.set(GridCoord::new(0, 0, 0), Color::ACTIVE);
        store.set(GridCoord::new(1, 0, 1), Color::ACTIVE);

        let plan = plan_flood_fill(&grid, &store, &request(GridCoord::new(0, 0, 0), false, 4)).unwrap();
        assert_eq!(plan.cells, vec![GridCoord::new(0, 0, 0)]);
    }
}
