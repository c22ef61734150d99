//! Character frame buffer with overdraw-density encoding.
//!
//! Two parallel arrays of `width * height` cells back the grid:
//!
//! - a **glyph** array holding characters painted explicitly, and
//! - a **count** array recording how many blank (unlabelled) strokes crossed
//!   each cell.
//!
//! At render time a cell that was never painted explicitly shows the density
//! glyph for its count, so overlapping strokes darken instead of fighting
//! over one character. An explicit glyph always wins over the count.

use crate::math::point::Point;

/// The glyph that means "nothing painted here".
pub const BLANK: char = ' ';

/// Density ramp indexed by overdraw count; counts past the end saturate.
const DENSITY_RAMP: [char; 7] = [' ', '.', ':', '*', '$', '%', '@'];

/// Maps an overdraw count to its density glyph.
#[inline]
pub fn density_glyph(count: u32) -> char {
    DENSITY_RAMP[(count as usize).min(DENSITY_RAMP.len() - 1)]
}

/// A `width * height` grid of cells indexed row-major in the screen frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    glyphs: Vec<char>,
    counts: Vec<u32>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            glyphs: vec![BLANK; size],
            counts: vec![0; size],
            width,
            height,
        }
    }

    /// Reallocates both arrays for the new dimensions and blanks every cell.
    pub fn reset(&mut self, width: usize, height: usize) {
        let size = width * height;
        self.glyphs = vec![BLANK; size];
        self.counts = vec![0; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Flat index of a screen-frame point, or `None` if it falls off the grid.
    #[inline]
    pub fn encode(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && (p.x as usize) < self.width && p.y >= 0 && (p.y as usize) < self.height {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Screen-frame point of a flat index.
    #[inline]
    pub fn decode(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Paints `glyph` into cell `index`, or bumps its overdraw count when
    /// `glyph` is blank.
    #[inline]
    pub fn fill(&mut self, index: usize, glyph: char) {
        if glyph != BLANK {
            self.glyphs[index] = glyph;
        } else {
            self.counts[index] += 1;
        }
    }

    /// The explicitly painted glyph at `index` (blank if none).
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }

    /// The overdraw count at `index`.
    pub fn count(&self, index: usize) -> u32 {
        self.counts[index]
    }

    /// The character the cell shows once rendered.
    pub fn resolved(&self, index: usize) -> char {
        match self.glyphs[index] {
            BLANK => density_glyph(self.counts[index]),
            glyph => glyph,
        }
    }

    /// Resolves every cell into one flat, row-major string of
    /// `width * height` characters.
    pub fn render(&self) -> String {
        (0..self.len()).map(|i| self.resolved(i)).collect()
    }

    /// The rendered grid split into rows, for inspection.
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return Vec::new();
        }
        let flat: Vec<char> = (0..self.len()).map(|i| self.resolved(i)).collect();
        flat.chunks(self.width).map(|row| row.iter().collect()).collect()
    }
}
