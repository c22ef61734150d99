//! Integer grid points.
//!
//! A [`Point`] is interpreted in one of two frames depending on who holds it:
//!
//! - **Natural frame**: origin at the centre of the terminal, y grows upward.
//!   Every point handed to the public drawing API is in this frame.
//! - **Screen frame**: origin at the top-left cell, y grows downward. Only the
//!   canvas and the rasterizers see points in this frame.
//!
//! ```text
//! (0,0) screen
//!    +------------------------------------> x_screen
//!    |
//!    |                 y_natural
//!    |                    ^
//!    |                    |
//!    |                    +--------> x_natural
//!    |                  (0,0)
//!    v
//!  y_screen
//! ```

use std::fmt;
use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
