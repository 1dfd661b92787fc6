//! Error types for the voxel editor

use thiserror::Error;

/// Main error type for the editor
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid coordinate key: {0:?}")]
    InvalidCoord(String),

    #[error("Voxel ({x}, {y}, {z}) is outside the {size}^3 grid")]
    OutOfBounds { x: i32, y: i32, z: i32, size: u32 },

    #[error("Config error: {0}")]
    Config(String),
}
