//! Lattice coordinates and the bounded N x N x N grid

use std::fmt;
use std::str::FromStr;

use crate::core::error::Error;
use crate::core::types::{IVec3, Vec3};
use crate::math::morton::{MORTON_AXIS_LIMIT, encode_morton_3d};

/// The six axis-aligned neighbor offsets, in +x, -x, +y, -y, +z, -z order
pub const FACE_OFFSETS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Integer coordinate of one lattice point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn as_ivec3(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Neighbor at `offset`; may fall outside the grid
    pub fn offset(&self, offset: IVec3) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }

    /// Packed store key. Only meaningful for non-negative coordinates.
    pub(crate) fn morton_key(&self) -> u32 {
        encode_morton_3d(self.x as u32, self.y as u32, self.z as u32)
    }
}

/// Formats as `x,y,z`
impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for GridCoord {
    type Err = Error;

    /// Parse the `x,y,z` key form; exactly three integer components
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidCoord(s.to_string()))?;
        match parts[..] {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(Error::InvalidCoord(s.to_string())),
        }
    }
}

/// A cube of `size^3` lattice points, each axis spanning `[0, size)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
}

impl Grid {
    /// Create a grid with `size` points per axis (clamped to `1..=1024`)
    pub fn new(size: u32) -> Self {
        Self {
            size: size.clamp(1, MORTON_AXIS_LIMIT),
        }
    }

    /// Points per axis (N)
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        (self.size as usize).pow(3)
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coord.x) && (0..n).contains(&coord.y) && (0..n).contains(&coord.z)
    }

    /// Dense index, x-major then y then z
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let n = self.size as usize;
        Some(coord.x as usize * n * n + coord.y as usize * n + coord.z as usize)
    }

    pub fn coord_at(&self, index: usize) -> GridCoord {
        let n = self.size as usize;
        GridCoord::new((index / (n * n)) as i32, ((index / n) % n) as i32, (index % n) as i32)
    }

    /// All lattice points in dense index order
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.cell_count()).map(|i| self.coord_at(i))
    }

    /// Scene position of a cell with the grid centred on the origin
    pub fn world_position(&self, coord: GridCoord, voxel_size: f32) -> Vec3 {
        let half = self.size as f32 / 2.0;
        (coord.as_ivec3().as_vec3() - Vec3::splat(half) + Vec3::splat(0.5)) * voxel_size
    }
}
