//! Editor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::math::morton::MORTON_AXIS_LIMIT;
use crate::voxel::color::{Color, Palette};
use crate::voxel::grid::Grid;

/// Settings for one editing session. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edge length of the paintable cube in millimetres
    pub size_mm: u32,
    /// Spacing between lattice points in millimetres
    pub resolution_mm: u32,
    /// Color of empty cells
    pub base_color: Color,
    /// Initially selected paint color
    pub active_color: Color,
    /// Highlight for the hovered cell
    pub hover_color: Color,
    /// Show placeholders for empty cells
    pub show_empty: bool,
    /// Layer cutoff at session start
    pub initial_layers: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            size_mm: 160,      // 16 cm cube
            resolution_mm: 10, // 10 mm points -> 16 per axis
            base_color: Color::BASE,
            active_color: Color::ACTIVE,
            hover_color: Color::HOVER,
            show_empty: true,
            initial_layers: 1,
        }
    }
}

impl EditorConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.points_per_axis()?;
        Ok(config)
    }

    /// Lattice points per axis (N)
    pub fn points_per_axis(&self) -> Result<u32> {
        if self.resolution_mm == 0 {
            return Err(Error::Config("resolution_mm must be positive".into()));
        }
        if self.size_mm % self.resolution_mm != 0 {
            return Err(Error::Config(format!(
                "size_mm {} is not a multiple of resolution_mm {}",
                self.size_mm, self.resolution_mm
            )));
        }
        let n = self.size_mm / self.resolution_mm;
        if n == 0 || n > MORTON_AXIS_LIMIT {
            return Err(Error::Config(format!(
                "grid must have 1..={} points per axis, got {}",
                MORTON_AXIS_LIMIT, n
            )));
        }
        Ok(n)
    }

    pub fn grid(&self) -> Result<Grid> {
        Ok(Grid::new(self.points_per_axis()?))
    }

    /// Point spacing in metres
    pub fn voxel_size(&self) -> f32 {
        self.resolution_mm as f32 / 1000.0
    }

    pub fn palette(&self) -> Palette {
        Palette {
            base: self.base_color,
            active: self.active_color,
            hover: self.hover_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.points_per_axis().unwrap(), 16);
        assert!((config.voxel_size() - 0.01).abs() < 1e-6);
        assert_eq!(config.palette(), Palette::default());
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = EditorConfig { resolution_mm: 0, ..Default::default() };
        assert!(config.points_per_axis().is_err());

        let config = EditorConfig { size_mm: 165, ..Default::default() };
        assert!(config.points_per_axis().is_err());

        let config = EditorConfig { size_mm: 0, ..Default::default() };
        assert!(config.points_per_axis().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");
        std::fs::write(&path, r##"{"size_mm": 80, "base_color": "#222034"}"##).unwrap();

        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.points_per_axis().unwrap(), 8);
        assert_eq!(config.base_color, Color::rgb(0x22, 0x20, 0x34));
        assert_eq!(config.active_color, Color::ACTIVE);
    }

    #[test]
    fn test_load_rejects_bad_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.json");
        std::fs::write(&path, r#"{"size_mm": 15, "resolution_mm": 10}"#).unwrap();
        assert!(matches!(EditorConfig::load(&path), Err(Error::Config(_))));
    }
}
