//! The drawing surface every higher layer renders through.
//!
//! [`Canvas`] owns a [`FrameBuffer`] sized to its [`Terminal`] and is the only
//! place natural-frame points become screen-frame cells. All public geometry
//! is given in the natural frame; [`Canvas::fix_frame`] converts it and out of
//! range coordinates are clamped into `[0, width] x [0, height]` rather than
//! rejected. Cells that end up one past the last column or row are dropped.

use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::math::point::Point;
use crate::render::{FrameBuffer, LineRasterizer, RasterizerDispatcher, RasterizerType, BLANK};
use crate::terminal::{Terminal, TerminalInfo};

/// Widest coordinate a screen-frame conversion can hold.
const SCREEN_LIMIT: i64 = i32::MAX as i64;

pub struct Canvas<T: Terminal> {
    terminal: T,
    buffer: FrameBuffer,
    rasterizer: RasterizerDispatcher,
}

fn checked_size(size: (usize, usize)) -> Result<(usize, usize)> {
    match size {
        (0, _) | (_, 0) => Err(Error::InvalidDimensions {
            width: size.0,
            height: size.1,
        }),
        _ => Ok(size),
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(-SCREEN_LIMIT - 1, SCREEN_LIMIT) as i32
}

impl<T: Terminal> Canvas<T> {
    /// Queries the terminal once and allocates a blank buffer of that size.
    pub fn new(terminal: T) -> Result<Self> {
        let (width, height) = checked_size(terminal.size()?)?;
        info!("Terminal shape (w, h): {}, {}", width, height);

        TerminalInfo::from_env().log();

        Ok(Self {
            terminal,
            buffer: FrameBuffer::new(width, height),
            rasterizer: RasterizerDispatcher::default(),
        })
    }

    /// Selects the line rasterizer, builder style.
    pub fn with_rasterizer(mut self, rasterizer_type: RasterizerType) -> Self {
        self.set_rasterizer(rasterizer_type);
        self
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// Live `(width, height)` of the terminal, which may differ from the
    /// buffer's until the next [`resize_to_terminal`](Self::resize_to_terminal).
    pub fn terminal_size(&self) -> Result<(usize, usize)> {
        self.terminal.size()
    }

    /// Buffer width in cells.
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Buffer height in cells.
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// Reallocates both buffers at the current size with every cell blank.
    pub fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.buffer.reset(width, height);
    }

    /// Re-reads the terminal size and clears at that size. Prior content is
    /// dropped even when the size did not change.
    pub fn resize_to_terminal(&mut self) -> Result<()> {
        let (width, height) = checked_size(self.terminal.size()?)?;
        if (width, height) != (self.width(), self.height()) {
            debug!(
                "Terminal resized from {}x{} to {}x{}",
                self.width(),
                self.height(),
                width,
                height
            );
        }
        self.buffer.reset(width, height);
        Ok(())
    }

    /// Converts a natural-frame point to the screen frame.
    ///
    /// The arithmetic is widened, so points near the `i32` limits saturate
    /// on their own side instead of wrapping.
    pub fn fix_frame(&self, p: Point) -> Point {
        let x = i64::from(p.x) + (self.width() / 2) as i64;
        let y = -i64::from(p.y) + (self.height() / 2) as i64;
        Point::new(saturate(x), saturate(y))
    }

    fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0, self.width() as i32),
            p.y.clamp(0, self.height() as i32),
        )
    }

    fn to_screen(&self, p: Point) -> Point {
        self.clamp(self.fix_frame(p))
    }

    /// Rasterizes the segment `p1`-`p2` with the active rasterizer.
    ///
    /// A non-blank `glyph` is painted explicitly; [`BLANK`] adds one to each
    /// cell's overdraw count instead. Returns the flat index of every cell
    /// touched.
    pub fn draw_line(&mut self, p1: Point, p2: Point, glyph: char) -> Vec<usize> {
        let a = self.to_screen(p1);
        let b = self.to_screen(p2);
        self.rasterizer.draw_line(a, b, glyph, &mut self.buffer)
    }

    /// Fills the single cell under `p`.
    pub fn draw_point(&mut self, p: Point, glyph: char) -> Option<usize> {
        let idx = self.buffer.encode(self.to_screen(p))?;
        self.buffer.fill(idx, glyph);
        Some(idx)
    }

    /// Writes `text` left to right from `anchor`. Spaces leave their cell
    /// untouched and characters past the right edge are dropped.
    pub fn draw_text(&mut self, anchor: Point, text: &str) {
        let start = self.to_screen(anchor);
        for (i, ch) in text.chars().enumerate() {
            if ch == BLANK {
                continue;
            }
            if let Some(idx) = self.buffer.encode(Point::new(start.x + i as i32, start.y)) {
                self.buffer.fill(idx, ch);
            }
        }
    }

    /// Draws blank-glyph crosshairs through the centre of the grid.
    pub fn draw_frame(&mut self) {
        let half_w = (self.width() / 2) as i32;
        let half_h = (self.height() / 2) as i32;
        self.draw_line(Point::new(-half_w, 0), Point::new(half_w, 0), BLANK);
        self.draw_line(Point::new(0, half_h), Point::new(0, -half_h), BLANK);
    }

    /// The finished frame: one flat row-major string of `width * height`
    /// characters with unpainted cells resolved to their density glyph.
    pub fn render(&self) -> String {
        self.buffer.render()
    }

    /// Renders and hands the frame to the terminal.
    pub fn present(&mut self) -> Result<()> {
        let frame = self.render();
        self.terminal.present(&frame)
    }

    /// One animation frame: present, block for `delay`, then pick up any
    /// terminal resize and clear.
    pub fn render_and_wait(&mut self, delay: Duration) -> Result<()> {
        self.present()?;
        thread::sleep(delay);
        self.resize_to_terminal()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }
}
