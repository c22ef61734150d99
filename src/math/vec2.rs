use super::point::Point;

/// A point on the image plane produced by the perspective projector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Truncates toward zero into a natural-frame [`Point`].
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        v.to_point()
    }
}
