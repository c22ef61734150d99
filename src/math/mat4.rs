//! 4x4 homogeneous transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - The bottom row of every matrix built here is `(0, 0, 0, 1)`, so
//!   transforming a point never needs a perspective divide

use std::ops::Mul;

use super::mat3::Mat3;
use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::from_rotation_translation(&Mat3::identity(), Vec3::ZERO)
    }

    /// Builds `[R | t; 0 0 0 1]`: the top-left 3x3 block is `rotation` and the
    /// last column holds `translation`.
    pub fn from_rotation_translation(rotation: &Mat3, translation: Vec3) -> Self {
        let r = |row: usize, col: usize| rotation.get(row, col);
        Mat4::new([
            [r(0, 0), r(0, 1), r(0, 2), translation.x],
            [r(1, 0), r(1, 1), r(1, 2), translation.y],
            [r(2, 0), r(2, 1), r(2, 2), translation.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// The top-left 3x3 block.
    pub fn rotation(&self) -> Mat3 {
        let m = &self.data;
        Mat3::new([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// The last column, without w.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[0][3], self.data[1][3], self.data[2][3])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

/// Transform a point: Mat4 * Vec3 (treats Vec3 as column vector with w=1).
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        (self * Vec4::point(v)).truncate()
    }
}
