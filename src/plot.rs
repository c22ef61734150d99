//! Time-series plotting on a [`Canvas`].
//!
//! [`PlotGraph`] lays out an L-shaped pair of axes inside the terminal with a
//! margin of 5% of the width and 10% of the height, puts [`TICK_COUNT`]
//! ticks on the time axis, and draws samples as a polyline whose stroke
//! glyph follows the local slope.
//!
//! Sample heights scale absolutely against `max_y`: a sample of `max_y`
//! reaches the top of the y axis and zero sits on the x axis. `min_y` is only
//! printed as a label.

use log::debug;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::math::point::Point;
use crate::terminal::Terminal;

/// Ticks on the time axis.
pub const TICK_COUNT: i32 = 30;
/// Every n-th tick carries its 1-based index.
const TICK_LABEL_EVERY: i32 = 3;
/// Share of each dimension the axes span.
const AXIS_SPAN: f64 = 0.85;
const PAD_HEIGHT: f64 = 0.1;
const PAD_WIDTH: f64 = 0.05;
/// Terminals taller than this get the time label tucked above the axis.
const TALL_TERMINAL: i32 = 28;

pub struct PlotGraph<T: Terminal> {
    canvas: Canvas<T>,
    term_width: i32,
    term_height: i32,
    pad_w: i32,
    pad_h: i32,
    origin: Point,
    x_limit: Point,
    y_limit: Point,
    tick: i32,
}

/// Stroke glyph for the segment between two samples.
fn stroke_glyph(p1: Point, p2: Point) -> char {
    let slope = (p1.y as f32 - p2.y as f32) / (p1.x as f32 - p2.x as f32);
    if slope < 0.0 {
        '\\'
    } else if slope > 0.0 {
        '/'
    } else if slope == 0.0 {
        '-'
    } else {
        // 0/0: both samples share a column.
        '|'
    }
}

impl<T: Terminal> PlotGraph<T> {
    /// Takes over `canvas`, re-reading the terminal size.
    pub fn new(mut canvas: Canvas<T>) -> Result<Self> {
        canvas.resize_to_terminal()?;
        let mut plot = Self {
            canvas,
            term_width: 0,
            term_height: 0,
            pad_w: 0,
            pad_h: 0,
            origin: Point::ORIGIN,
            x_limit: Point::ORIGIN,
            y_limit: Point::ORIGIN,
            tick: 0,
        };
        plot.sync_geometry();
        Ok(plot)
    }

    /// Picks up the canvas size, which follows the terminal between frames.
    fn sync_geometry(&mut self) {
        self.term_width = self.canvas.width() as i32;
        self.term_height = self.canvas.height() as i32;
        self.pad_h = (PAD_HEIGHT * self.term_height as f64) as i32;
        self.pad_w = (PAD_WIDTH * self.term_width as f64) as i32;
    }

    /// Clears the canvas and draws both axes, their arrows and labels, and
    /// the time ticks.
    pub fn draw_axis(&mut self, y_label: &str) {
        self.sync_geometry();
        let (w, h) = (self.term_width, self.term_height);

        self.origin = Point::new(-w / 2 + self.pad_w, -h / 2 + self.pad_h);
        self.x_limit = Point::new(
            (self.origin.x as f64 + AXIS_SPAN * w as f64) as i32,
            self.origin.y,
        );
        self.y_limit = Point::new(
            self.origin.x,
            (self.origin.y as f64 + AXIS_SPAN * h as f64) as i32,
        );
        debug!(
            "Axis for {}x{}: origin {} x-limit {} y-limit {}",
            w, h, self.origin, self.x_limit, self.y_limit
        );

        let time_label = if h > TALL_TERMINAL {
            self.x_limit + Point::new(-5, -2)
        } else {
            self.x_limit + Point::new(2, 0)
        };
        let value_label = self.y_limit + Point::new(-2, 1);

        self.canvas.clear();
        self.canvas.draw_line(self.origin, self.x_limit, '-');
        self.canvas.draw_line(self.origin, self.y_limit, '|');
        self.canvas.draw_text(self.x_limit, ">");
        self.canvas.draw_text(self.y_limit, "^");
        self.canvas.draw_text(time_label, "Time");
        self.canvas.draw_text(value_label, y_label);

        self.tick = (self.x_limit.x - self.origin.x) / TICK_COUNT;
        for i in 1..=TICK_COUNT {
            let mark = self.origin + Point::new(self.tick * i, 0);
            self.canvas.draw_text(mark, "+");
            if i % TICK_LABEL_EVERY == 0 {
                self.canvas.draw_text(mark + Point::new(0, -1), &i.to_string());
            }
        }
    }

    /// Redraws the axes and plots `values` one tick apart, joined by
    /// slope-dependent strokes and marked with `'*'`.
    ///
    /// Fails with [`Error::ZeroScale`] when `max_y` is zero.
    pub fn plot_points(
        &mut self,
        values: &[f32],
        min_y: f32,
        max_y: f32,
        y_label: &str,
    ) -> Result<()> {
        if max_y == 0.0 {
            return Err(Error::ZeroScale);
        }
        self.draw_axis(y_label);

        let y_len = (self.y_limit.y - self.origin.y) as f32;
        let mut previous: Option<Point> = None;

        for (i, &value) in values.iter().enumerate() {
            let height = value * y_len / max_y;
            let p = Point::new(
                self.origin.x + self.tick * (i as i32 + 1),
                // Heights beyond i32 saturate and are clamped by the canvas.
                self.origin.y.saturating_add(height as i32),
            );

            if let Some(prev) = previous {
                self.canvas.draw_line(p, prev, stroke_glyph(p, prev));
                self.canvas.draw_text(prev, "*");
            }
            self.canvas.draw_text(p, "*");
            previous = Some(p);
        }

        if !values.is_empty() {
            let max_text = self.y_limit + Point::new(-4, 0);
            let min_text = self.origin + Point::new(-4, 0);
            self.canvas.draw_text(max_text, &(max_y as i32).to_string());
            self.canvas.draw_text(min_text, &(min_y as i32).to_string());
        }
        Ok(())
    }

    /// Axis origin in the natural frame, as of the last `draw_axis`.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn x_limit(&self) -> Point {
        self.x_limit
    }

    pub fn y_limit(&self) -> Point {
        self.y_limit
    }

    /// Cells between ticks on the time axis.
    pub fn tick_spacing(&self) -> i32 {
        self.tick
    }

    /// `(pad_w, pad_h)` margins in cells.
    pub fn padding(&self) -> (i32, i32) {
        (self.pad_w, self.pad_h)
    }

    pub fn canvas(&self) -> &Canvas<T> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<T> {
        &mut self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::HeadlessTerminal;
    use std::time::Duration;

    fn plot(width: usize, height: usize) -> PlotGraph<HeadlessTerminal> {
        PlotGraph::new(Canvas::new(HeadlessTerminal::new(width, height)).unwrap()).unwrap()
    }

    fn cell(plot: &PlotGraph<HeadlessTerminal>, x: usize, y: usize) -> char {
        plot.canvas().framebuffer().rows()[y].chars().nth(x).unwrap()
    }

    #[test]
    fn stroke_glyph_follows_slope_sign() {
        let a = Point::new(0, 0);
        assert_eq!(stroke_glyph(Point::new(2, 3), a), '/');
        assert_eq!(stroke_glyph(Point::new(2, -3), a), '\\');
        assert_eq!(stroke_glyph(Point::new(2, 0), a), '-');
        assert_eq!(stroke_glyph(a, a), '|');
    }

    #[test]
    fn padding_comes_from_terminal_size() {
        let p = plot(80, 24);
        assert_eq!(p.padding(), (4, 2));
    }

    #[test]
    fn axis_geometry_on_80_by_24() {
        let mut p = plot(80, 24);
        p.draw_axis("Value");

        assert_eq!(p.origin(), Point::new(-36, -10));
        assert_eq!(p.x_limit(), Point::new(32, -10));
        assert_eq!(p.y_limit(), Point::new(-36, 10));
        assert_eq!(p.tick_spacing(), 2);

        // Screen frame: origin (4, 22), arrows at (72, 22) and (4, 2).
        assert_eq!(cell(&p, 5, 22), '-');
        assert_eq!(cell(&p, 4, 10), '|');
        assert_eq!(cell(&p, 72, 22), '>');
        assert_eq!(cell(&p, 4, 2), '^');

        let rows = p.canvas().framebuffer().rows();
        assert_eq!(&rows[22][74..78], "Time");
        assert_eq!(&rows[1][2..7], "Value");
    }

    #[test]
    fn thirty_ticks_with_every_third_labelled() {
        let mut p = plot(80, 24);
        p.draw_axis("Value");

        let frame = p.canvas().render();
        assert_eq!(frame.matches('+').count(), 30);

        let rows = p.canvas().framebuffer().rows();
        let labels: Vec<&str> = rows[23].split_whitespace().collect();
        let expected: Vec<String> = (1..=10).map(|i| (i * 3).to_string()).collect();
        assert_eq!(labels, expected);
        assert_eq!(&rows[23][64..66], "30");
    }

    #[test]
    fn tall_terminal_moves_time_label_above_axis() {
        let mut p = plot(100, 30);
        p.draw_axis("Load");
        let rows = p.canvas().framebuffer().rows();
        assert_eq!(&rows[29][85..89], "Time");
    }

    #[test]
    fn zero_max_is_rejected() {
        let mut p = plot(80, 24);
        assert!(matches!(
            p.plot_points(&[1.0], 0.0, 0.0, "Value"),
            Err(Error::ZeroScale)
        ));
    }

    #[test]
    fn empty_series_draws_axes_only() {
        let mut p = plot(80, 24);
        p.plot_points(&[], 0.0, 10.0, "Value").unwrap();
        assert_eq!(cell(&p, 0, 2), ' ');
        assert_eq!(cell(&p, 0, 22), ' ');
        assert_eq!(p.canvas().render().matches('*').count(), 0);
    }

    #[test]
    fn min_y_only_changes_its_label() {
        let series = [1.0, 4.0, 9.0, 2.0];
        let mut a = plot(80, 24);
        let mut b = plot(80, 24);
        a.plot_points(&series, 0.0, 10.0, "Value").unwrap();
        b.plot_points(&series, 5.0, 10.0, "Value").unwrap();

        let fa: Vec<char> = a.canvas().render().chars().collect();
        let fb: Vec<char> = b.canvas().render().chars().collect();
        let differing: Vec<usize> = (0..fa.len()).filter(|&i| fa[i] != fb[i]).collect();

        // Only the min label at screen (0, 22) differs.
        assert_eq!(differing, vec![22 * 80]);
        assert_eq!(fa[22 * 80], '0');
        assert_eq!(fb[22 * 80], '5');
    }

    #[test]
    fn huge_samples_clamp_to_the_bottom_edge() {
        let mut p = plot(80, 24);
        p.plot_points(&[1.0, -1.0e12], 0.0, 10.0, "Value").unwrap();

        assert_eq!(cell(&p, 6, 20), '*');
        // The stroke runs off the bottom of the grid below the first sample.
        assert_eq!(cell(&p, 6, 21), '\\');
        assert_eq!(cell(&p, 7, 22), '\\');
        assert_eq!(cell(&p, 7, 23), '\\');
        assert_eq!(p.canvas().render().matches('*').count(), 1);
    }

    #[test]
    fn axes_follow_a_terminal_resize() {
        let mut p = plot(80, 24);
        p.plot_points(&[3.0, 4.0], 0.0, 10.0, "Value").unwrap();
        p.canvas_mut().terminal_mut().resize(100, 30);
        p.canvas_mut().render_and_wait(Duration::ZERO).unwrap();

        p.draw_axis("Value");
        assert_eq!(p.padding(), (5, 3));
        assert_eq!(p.origin(), Point::new(-45, -12));
        assert_eq!(p.canvas().framebuffer().len(), 3000);
        assert_eq!(p.canvas().terminal().frames().len(), 1);
    }
}
