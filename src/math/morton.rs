//! Morton encoding (Z-order curve) for packing grid coordinates into store keys

/// Largest per-axis extent a 32-bit key can address (10 bits per axis)
pub const MORTON_AXIS_LIMIT: u32 = 1 << 10;

/// Spread the low 10 bits of `v` into every third bit
fn part_1by2(v: u32) -> u32 {
    let mut v = v & 0x0000_03ff;
    v = (v ^ (v << 16)) & 0xff00_00ff;
    v = (v ^ (v << 8)) & 0x0300_f00f;
    v = (v ^ (v << 4)) & 0x030c_30c3;
    v = (v ^ (v << 2)) & 0x0924_9249;
    v
}

/// Gather every third bit of `v` back into a 10-bit integer
fn compact_1by2(v: u32) -> u32 {
    let mut v = v & 0x0924_9249;
    v = (v ^ (v >> 2)) & 0x030c_30c3;
    v = (v ^ (v >> 4)) & 0x0300_f00f;
    v = (v ^ (v >> 8)) & 0xff00_00ff;
    v = (v ^ (v >> 16)) & 0x0000_03ff;
    v
}

/// Pack a grid coordinate into a 30-bit Morton key.
/// Each component must be below [`MORTON_AXIS_LIMIT`].
pub fn encode_morton_3d(x: u32, y: u32, z: u32) -> u32 {
    debug_assert!(x < MORTON_AXIS_LIMIT && y < MORTON_AXIS_LIMIT && z < MORTON_AXIS_LIMIT);
    part_1by2(x) | (part_1by2(y) << 1) | (part_1by2(z) << 2)
}

/// Unpack a Morton key into its grid coordinate
pub fn decode_morton_3d(key: u32) -> (u32, u32, u32) {
    (compact_1by2(key), compact_1by2(key >> 1), compact_1by2(key >> 2))
}
