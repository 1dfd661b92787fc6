//! JSON voxel model files: a flat list of `{x, y, z, color}` records.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use super::color::Color;
use super::grid::{Grid, GridCoord};
use super::store::VoxelStore;

/// One painted cell as stored on disk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelRecord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: Color,
}

impl VoxelRecord {
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x, self.y, self.z)
    }
}

/// Parse and validate a model against `grid`.
///
/// Nothing is applied here, so a bad file cannot leave a store half-loaded.
/// Records carrying the store's base color are dropped since they mean "empty".
pub fn parse_model(json: &str, grid: &Grid, base: Color) -> Result<Vec<(GridCoord, Color)>> {
    let records: Vec<VoxelRecord> = serde_json::from_str(json)?;
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let coord = record.coord();
        if !grid.contains(coord) {
            return Err(Error::OutOfBounds {
                x: coord.x,
                y: coord.y,
                z: coord.z,
                size: grid.size(),
            });
        }
        if record.color != base {
            entries.push((coord, record.color));
        }
    }
    Ok(entries)
}

/// Serialize the store as pretty-printed JSON, sorted by coordinate
pub fn model_to_json(store: &VoxelStore) -> Result<String> {
    let mut records: Vec<VoxelRecord> = store
        .entries()
        .map(|(c, color)| VoxelRecord { x: c.x, y: c.y, z: c.z, color })
        .collect();
    records.sort_by_key(|r| r.coord());
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Read and validate a model file
pub fn read_model_file(path: impl AsRef<Path>, grid: &Grid, base: Color) -> Result<Vec<(GridCoord, Color)>> {
    let json = std::fs::read_to_string(path)?;
    parse_model(&json, grid, base)
}

/// Write the store to a model file
pub fn write_model_file(path: impl AsRef<Path>, store: &VoxelStore) -> Result<()> {
    std::fs::write(path, model_to_json(store)?)?;
    Ok(())
}
