//! Bresenham line rasterizer.

use super::{plot, LineRasterizer};
use crate::math::point::Point;
use crate::render::framebuffer::FrameBuffer;

#[derive(Debug, Clone, Copy, Default)]
pub struct BresenhamRasterizer;

impl BresenhamRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for BresenhamRasterizer {
    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// An error term tracks the distance between the ideal line and the
    /// current cell. Each step moves along the major axis and also along the
    /// minor axis whenever the accumulated error crosses the threshold, so
    /// only integer arithmetic is needed. Both endpoints are drawn.
    fn draw_line(
        &self,
        p1: Point,
        p2: Point,
        glyph: char,
        buffer: &mut FrameBuffer,
    ) -> Vec<usize> {
        let mut touched = Vec::new();

        let dx = (p2.x - p1.x).abs();
        let dy = (p2.y - p1.y).abs();
        let x_step = if p1.x < p2.x { 1 } else { -1 };
        let y_step = if p1.y < p2.y { 1 } else { -1 };

        // Positive error favours x movement, negative favours y.
        let mut err = dx - dy;
        let mut x = p1.x;
        let mut y = p1.y;

        loop {
            plot(buffer, Point::new(x, y), glyph, &mut touched);

            if x == p2.x && y == p2.y {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_step;
            }
            // Both branches may fire, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_step;
            }
        }

        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_visits_every_cell_once() {
        let mut fb = FrameBuffer::new(10, 10);
        let touched =
            BresenhamRasterizer.draw_line(Point::new(0, 0), Point::new(5, 5), 'x', &mut fb);
        let pts: Vec<Point> = touched.iter().map(|&i| fb.decode(i)).collect();
        let expected: Vec<Point> = (0..=5).map(|i| Point::new(i, i)).collect();
        assert_eq!(pts, expected);
    }

    #[test]
    fn single_point_line_draws_one_cell() {
        let mut fb = FrameBuffer::new(4, 4);
        let p = Point::new(1, 2);
        let touched = BresenhamRasterizer.draw_line(p, p, 'o', &mut fb);
        assert_eq!(touched, vec![9]);
        assert_eq!(fb.glyph(9), 'o');
    }

    #[test]
    fn steep_line_is_gapless() {
        let mut fb = FrameBuffer::new(10, 20);
        let touched =
            BresenhamRasterizer.draw_line(Point::new(8, 19), Point::new(6, 0), 'x', &mut fb);
        let mut ys: Vec<i32> = touched.iter().map(|&i| fb.decode(i).y).collect();
        ys.sort_unstable();
        assert_eq!(ys, (0..20).collect::<Vec<_>>());
    }
}
