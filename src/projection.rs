//! Pinhole perspective projection onto the terminal image plane.
//!
//! [`PerspectiveProjection`] owns a [`Camera`] and its [`CameraTransform`].
//! World points go through the homogeneous transform into camera space and
//! are then divided by depth and scaled by the focal distance. The vertical
//! image coordinate is halved because terminal cells are about twice as tall
//! as they are wide.

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::transform::CameraTransform;

/// Vertical squash applied on the image plane to make cells look square.
pub const CELL_ASPECT: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveProjection {
    camera: Camera,
    transform: CameraTransform,
}

impl PerspectiveProjection {
    pub fn new(camera: Camera) -> Result<Self> {
        Ok(Self {
            camera,
            transform: CameraTransform::from_camera(&camera)?,
        })
    }

    /// Moves the camera. Only the location feeds the transform; the focal
    /// distance is stored as given.
    pub fn update_camera(&mut self, camera: Camera) -> Result<()> {
        self.transform.update(camera.location)?;
        self.camera = camera;
        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// World frame to camera frame.
    pub fn transform_world_point(&self, point: Vec3) -> Vec3 {
        (self.transform.transformation_matrix() * Vec4::point(point)).truncate()
    }

    /// Camera frame to image plane.
    ///
    /// Fails with [`Error::ZeroDepth`] for points on the camera plane.
    pub fn project_cam_point(&self, point: Vec3) -> Result<Vec2> {
        if point.z == 0.0 {
            return Err(Error::ZeroDepth);
        }
        let scale = self.camera.focal_distance as f32 / point.z;
        Ok(Vec2::new(point.x * scale, CELL_ASPECT * (point.y * scale)))
    }

    /// World frame straight to image plane.
    pub fn project_world_point(&self, point: Vec3) -> Result<Vec2> {
        self.project_cam_point(self.transform_world_point(point))
    }

    pub fn transform_multiple_world_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        points
            .iter()
            .map(|&p| self.transform_world_point(p))
            .collect()
    }

    /// Fails on the first point with zero depth.
    pub fn project_multiple_cam_points(&self, points: &[Vec3]) -> Result<Vec<Vec2>> {
        points.iter().map(|&p| self.project_cam_point(p)).collect()
    }

    pub fn project_multiple_world_points(&self, points: &[Vec3]) -> Result<Vec<Vec2>> {
        let in_cam = self.transform_multiple_world_points(points);
        self.project_multiple_cam_points(&in_cam)
    }

    /// Like [`project_multiple_world_points`](Self::project_multiple_world_points)
    /// but each result carries the point's untouched world-frame z, for depth
    /// based decisions downstream.
    pub fn project_multiple_world_points_with_z_world(&self, points: &[Vec3]) -> Result<Vec<Vec3>> {
        let projected = self.project_multiple_world_points(points)?;
        Ok(projected
            .iter()
            .zip(points)
            .map(|(image, world)| Vec3::new(image.x, image.y, world.z))
            .collect())
    }
}
