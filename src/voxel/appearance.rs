//! Display state handed to the renderer for each cell

use super::color::{Color, Palette};
use super::grid::GridCoord;
use super::store::VoxelStore;
use super::visibility::VisibilityMask;

/// How one cell should be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellAppearance {
    pub visible: bool,
    pub color: Color,
    /// Sprite edge length in metres
    pub scale: f32,
}

/// Resolve a cell's appearance.
///
/// Filled cells use their color at full size, empty cells the base color at
/// half size, and the hovered cell the hover color at full size.
pub fn cell_appearance(
    store: &VoxelStore,
    visibility: &VisibilityMask,
    palette: &Palette,
    voxel_size: f32,
    hovered: Option<GridCoord>,
    coord: GridCoord,
) -> CellAppearance {
    let visible = visibility.is_visible(coord);
    if hovered == Some(coord) {
        return CellAppearance { visible, color: palette.hover, scale: voxel_size };
    }
    match store.get(coord) {
        Some(color) => CellAppearance { visible, color, scale: voxel_size },
        None => CellAppearance { visible, color: palette.base, scale: voxel_size * 0.5 },
    }
}
