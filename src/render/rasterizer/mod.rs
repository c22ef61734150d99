//! Line rasterization algorithms.
//!
//! Rasterizers work purely in the screen frame on endpoints the canvas has
//! already converted and clamped. They can be swapped at runtime for testing
//! and benchmarking.
//!
//! Available algorithms:
//! - [`SlopeRasterizer`]: picks the major axis from the slope and evaluates
//!   the line equation per step (half-open ranges)
//! - [`BresenhamRasterizer`]: integer error accumulation, both endpoints drawn

mod bresenham;
mod slope;

pub use bresenham::BresenhamRasterizer;
pub use slope::SlopeRasterizer;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::framebuffer::FrameBuffer;
use crate::math::point::Point;

/// Trait for line rasterization algorithms.
pub trait LineRasterizer {
    /// Fills the cells between two screen-frame points.
    ///
    /// Cells that land outside the grid are skipped. Returns the flat index
    /// of every filled cell in the order visited.
    fn draw_line(&self, p1: Point, p2: Point, glyph: char, buffer: &mut FrameBuffer)
        -> Vec<usize>;
}

/// Fills one screen-frame cell if it is on the grid and records its index.
#[inline]
pub(crate) fn plot(buffer: &mut FrameBuffer, p: Point, glyph: char, touched: &mut Vec<usize>) {
    if let Some(idx) = buffer.encode(p) {
        buffer.fill(idx, glyph);
        touched.push(idx);
    }
}

/// Available line rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterizerType {
    /// Slope-switching rasterizer. Steps x for shallow lines, y for steep ones.
    #[default]
    Slope,
    /// Bresenham's integer line algorithm.
    Bresenham,
}

impl fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizerType::Slope => write!(f, "slope"),
            RasterizerType::Bresenham => write!(f, "bresenham"),
        }
    }
}

impl FromStr for RasterizerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slope" => Ok(RasterizerType::Slope),
            "bresenham" => Ok(RasterizerType::Bresenham),
            other => Err(format!(
                "unknown rasterizer '{other}', expected 'slope' or 'bresenham'"
            )),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug, Clone, Default)]
pub struct RasterizerDispatcher {
    slope: SlopeRasterizer,
    bresenham: BresenhamRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            slope: SlopeRasterizer::new(),
            bresenham: BresenhamRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl LineRasterizer for RasterizerDispatcher {
    #[inline]
    fn draw_line(
        &self,
        p1: Point,
        p2: Point,
        glyph: char,
        buffer: &mut FrameBuffer,
    ) -> Vec<usize> {
        match self.active {
            RasterizerType::Slope => self.slope.draw_line(p1, p2, glyph, buffer),
            RasterizerType::Bresenham => self.bresenham.draw_line(p1, p2, glyph, buffer),
        }
    }
}
