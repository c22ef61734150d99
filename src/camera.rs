//! Pinhole camera.
//!
//! The camera always looks at the world origin; only its location and the
//! focal distance are free. Orientation is derived from the location by
//! [`CameraTransform`](crate::transform::CameraTransform).

use crate::math::vec3::Vec3;

/// Camera location in the world frame and projection scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub location: Vec3,
    /// Image-plane distance; larger values magnify.
    pub focal_distance: i32,
}

impl Camera {
    pub fn new(location: Vec3, focal_distance: i32) -> Self {
        Self {
            location,
            focal_distance,
        }
    }

    /// The same camera moved `angle` radians around the world Z axis.
    pub fn orbited(&self, angle: f32) -> Self {
        Self {
            location: self.location.rotate_z(angle),
            ..*self
        }
    }

    /// Distance from the world origin.
    pub fn distance(&self) -> f32 {
        self.location.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn orbit_keeps_height_distance_and_focal() {
        let cam = Camera::new(Vec3::new(10.0, 0.0, 4.0), 30);
        let moved = cam.orbited(PI);

        assert_relative_eq!(moved.location.x, -10.0, epsilon = 1e-5);
        assert_relative_eq!(moved.location.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(moved.location.z, 4.0);
        assert_relative_eq!(moved.distance(), cam.distance(), epsilon = 1e-5);
        assert_eq!(moved.focal_distance, 30);
    }
}
