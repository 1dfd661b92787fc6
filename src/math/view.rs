//! Camera direction helpers for grid-local culling

use crate::core::types::{Quat, Vec3};

/// Forward direction of a camera at `position` looking at `target`
pub fn look_direction(position: Vec3, target: Vec3) -> Vec3 {
    (target - position).normalize_or_zero()
}

/// Forward direction of the default editor camera, which sits on the
/// (+x, +y, +z) diagonal looking at the grid centre.
pub fn default_camera_forward() -> Vec3 {
    look_direction(Vec3::new(0.2, 0.2, 0.2), Vec3::ZERO)
}

/// Bring a world-space direction into the local frame of a grid that has
/// been spun by `grid_yaw` radians about the Y axis.
pub fn grid_local_direction(world_forward: Vec3, grid_yaw: f32) -> Vec3 {
    let inverse = Quat::from_rotation_y(grid_yaw).conjugate();
    (inverse * world_forward).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_forward_points_down_the_diagonal() {
        let forward = default_camera_forward();
        let expected = Vec3::splat(-1.0).normalize();
        assert!((forward - expected).length() < 1e-6);
    }

    #[test]
    fn test_unrotated_grid_keeps_direction() {
        let dir = Vec3::new(0.0, -0.5, -1.0).normalize();
        assert!((grid_local_direction(dir, 0.0) - dir).length() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_is_undone() {
        // Grid turned +90 degrees about Y: world -Z lands on local +X
        let local = grid_local_direction(Vec3::NEG_Z, std::f32::consts::FRAC_PI_2);
        assert!((local - Vec3::X).length() < 1e-5);

        let back = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2) * local;
        assert!((back - Vec3::NEG_Z).length() < 1e-5);
    }
}
