//! World-to-camera transform derived from the camera location.
//!
//! # Coordinate System
//!
//! Camera space is **left-handed**:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward, toward the world origin
//!
//! # Derivation
//!
//! The location is taken in spherical coordinates: `rho` its distance from
//! the origin, `phi` the polar angle from +Z and `theta` the azimuth in the XY
//! plane. The rotation rows are the camera axes in world coordinates, and the
//! homogeneous matrix translates by `rho` along the camera Z axis, so the
//! world origin always lands at `(0, 0, rho)`.
//!
//! The transform is a value recomputed wholesale from the location; there is
//! no incremental update.

use log::debug;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::math::mat3::Mat3;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    origin: Vec3,
    rho: f32,
    theta: f32,
    phi: f32,
    rotation: Mat3,
    matrix: Mat4,
}

impl CameraTransform {
    /// Derives the transform for a camera at `location`.
    ///
    /// Fails with [`Error::DegenerateCamera`] when `location` is the world
    /// origin. A camera on the Z axis is fine: its azimuth is taken as zero.
    pub fn new(location: Vec3) -> Result<Self> {
        let rho = location.magnitude();
        if rho == 0.0 || !rho.is_finite() {
            return Err(Error::DegenerateCamera {
                x: location.x,
                y: location.y,
                z: location.z,
            });
        }

        let phi = (location.z / rho).clamp(-1.0, 1.0).acos();
        // atan2 is 0 on the Z axis and keeps the quadrant for negative x.
        let theta = location.y.atan2(location.x);

        let rotation = Self::angles_to_rotation_matrix(theta, phi);
        let matrix = Mat4::from_rotation_translation(&rotation, Vec3::new(0.0, 0.0, rho));

        debug!(
            "Camera at {:?}: rho={:.3} theta={:.3} phi={:.3}",
            location, rho, theta, phi
        );

        Ok(Self {
            origin: location,
            rho,
            theta,
            phi,
            rotation,
            matrix,
        })
    }

    pub fn from_camera(camera: &Camera) -> Result<Self> {
        Self::new(camera.location)
    }

    /// Recomputes everything for a new location. On error the previous
    /// transform is kept.
    pub fn update(&mut self, location: Vec3) -> Result<()> {
        *self = Self::new(location)?;
        Ok(())
    }

    /// Camera basis for azimuth `theta` and polar angle `phi`.
    ///
    /// Row 0 is the right axis, row 1 the up axis and row 2 the viewing
    /// direction, which points from the camera at the origin.
    pub fn angles_to_rotation_matrix(theta: f32, phi: f32) -> Mat3 {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        Mat3::new([
            [-sin_t, cos_t, 0.0],
            [-cos_p * cos_t, -cos_p * sin_t, sin_p],
            [-sin_p * cos_t, -sin_p * sin_t, -cos_p],
        ])
    }

    /// Camera location in the world frame.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn rho(&self) -> f32 {
        self.rho
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        self.rotation
    }

    /// The full 4x4 world-to-camera transform.
    pub fn transformation_matrix(&self) -> Mat4 {
        self.matrix
    }
}
