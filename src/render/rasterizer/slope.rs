//! Slope-switching line rasterizer.
//!
//! A vertical segment steps y directly. Otherwise the screen-space slope
//! decides the major axis: `|slope| <= 1` steps x and evaluates
//! `y = y1 + slope * (x - x1)`, steeper lines step y and evaluate
//! `x = x1 + (y - y1) / slope`, so steep lines have no gaps. Every range is
//! half-open (`lo..hi`) and minor coordinates truncate toward zero, both
//! measured from the first endpoint.

use log::trace;

use super::{plot, LineRasterizer};
use crate::math::point::Point;
use crate::render::framebuffer::FrameBuffer;

#[derive(Debug, Clone, Copy, Default)]
pub struct SlopeRasterizer;

impl SlopeRasterizer {
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl LineRasterizer for SlopeRasterizer {
    fn draw_line(
        &self,
        p1: Point,
        p2: Point,
        glyph: char,
        buffer: &mut FrameBuffer,
    ) -> Vec<usize> {
        let mut touched = Vec::new();

        if p1.x == p2.x {
            let (lo, hi) = ordered(p1.y, p2.y);
            for y in lo..hi {
                plot(buffer, Point::new(p1.x, y), glyph, &mut touched);
            }
            return touched;
        }

        let slope = (p2.y - p1.y) as f32 / (p2.x - p1.x) as f32;
        trace!("rasterizing {} -> {} with slope {}", p1, p2, slope);

        if slope.abs() <= 1.0 {
            let (lo, hi) = ordered(p1.x, p2.x);
            for x in lo..hi {
                let y = p1.y as f32 + slope * (x - p1.x) as f32;
                plot(buffer, Point::new(x, y as i32), glyph, &mut touched);
            }
        } else {
            let (lo, hi) = ordered(p1.y, p2.y);
            for y in lo..hi {
                let x = p1.x as f32 + (y - p1.y) as f32 / slope;
                plot(buffer, Point::new(x as i32, y), glyph, &mut touched);
            }
        }

        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::BLANK;

    fn points(fb: &FrameBuffer, touched: &[usize]) -> Vec<Point> {
        touched.iter().map(|&i| fb.decode(i)).collect()
    }

    #[test]
    fn vertical_line_steps_y_half_open() {
        let mut fb = FrameBuffer::new(10, 10);
        let touched = SlopeRasterizer.draw_line(Point::new(3, 7), Point::new(3, 2), 'x', &mut fb);
        let ys: Vec<i32> = points(&fb, &touched).iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![2, 3, 4, 5, 6]);
        assert!(points(&fb, &touched).iter().all(|p| p.x == 3));
    }

    #[test]
    fn shallow_line_has_one_cell_per_column() {
        let mut fb = FrameBuffer::new(20, 10);
        let touched =
            SlopeRasterizer.draw_line(Point::new(0, 0), Point::new(10, 5), BLANK, &mut fb);
        let pts = points(&fb, &touched);
        assert_eq!(pts.len(), 10);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(p.x, i as i32);
            assert_eq!(p.y, i as i32 / 2);
        }
    }

    #[test]
    fn steep_line_has_one_cell_per_row() {
        let mut fb = FrameBuffer::new(20, 20);
        let touched = SlopeRasterizer.draw_line(Point::new(2, 0), Point::new(5, 12), '#', &mut fb);
        let pts = points(&fb, &touched);
        assert_eq!(pts.len(), 12);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(p.y, i as i32);
            assert_eq!(p.x, 2 + (i as f32 / 4.0) as i32);
        }
    }

    #[test]
    fn minor_axis_is_measured_from_first_endpoint() {
        let mut fb = FrameBuffer::new(10, 10);
        let touched = SlopeRasterizer.draw_line(Point::new(6, 3), Point::new(0, 0), 'x', &mut fb);
        let pts = points(&fb, &touched);
        // Walks x from 0 up to (not including) 6, y = 3 + 0.5 * (x - 6).
        assert_eq!(pts.first(), Some(&Point::new(0, 0)));
        assert_eq!(pts.last(), Some(&Point::new(5, 2)));
    }

    #[test]
    fn degenerate_segment_draws_nothing() {
        let mut fb = FrameBuffer::new(5, 5);
        let p = Point::new(2, 2);
        assert!(SlopeRasterizer.draw_line(p, p, 'x', &mut fb).is_empty());
    }

    #[test]
    fn cells_past_the_grid_edge_are_skipped() {
        let mut fb = FrameBuffer::new(4, 4);
        // y = 4 is one past the last row.
        let touched = SlopeRasterizer.draw_line(Point::new(0, 4), Point::new(4, 4), 'x', &mut fb);
        assert!(touched.is_empty());
    }
}
