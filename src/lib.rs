//! ASCII graphics for the terminal.
//!
//! Everything is drawn into a character [`Canvas`] sized to the terminal.
//! Geometry is given in a natural frame with the origin at the centre of the
//! screen and y pointing up; the canvas converts it to rows and columns.
//! Lines shade by overdraw, so crossings and dense regions read darker.
//!
//! On top of the canvas sit a perspective camera for 3D wireframes
//! ([`PerspectiveProjection`], [`Scene`]) and a scrolling time-series plot
//! ([`PlotGraph`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use termgfx::prelude::*;
//!
//! # fn main() -> termgfx::Result<()> {
//! let mut canvas = Canvas::new(StdoutTerminal::new())?;
//! canvas.draw_frame();
//! canvas.draw_line(Point::new(-10, -5), Point::new(10, 5), BLANK);
//! canvas.present()?;
//! # Ok(())
//! # }
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod math;
pub mod mesh;
pub mod plot;
pub mod projection;
pub mod render;
pub mod scene;
pub mod terminal;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use canvas::Canvas;
pub use config::Config;
pub use error::{Error, Result};
pub use mesh::Mesh;
pub use plot::PlotGraph;
pub use projection::PerspectiveProjection;
pub use render::RasterizerType;
pub use scene::{RenderMode, Scene};
pub use terminal::{HeadlessTerminal, StdoutTerminal, Terminal};
pub use transform::CameraTransform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use termgfx::prelude::*;
/// ```
pub mod prelude {
    // Camera & projection
    pub use crate::camera::Camera;
    pub use crate::projection::PerspectiveProjection;
    pub use crate::transform::CameraTransform;

    // Drawing
    pub use crate::canvas::Canvas;
    pub use crate::plot::PlotGraph;
    pub use crate::render::{RasterizerType, BLANK};
    pub use crate::scene::{RenderMode, Scene};

    // Geometry
    pub use crate::mesh::Mesh;

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::point::Point;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Terminal
    pub use crate::terminal::{HeadlessTerminal, StdoutTerminal, Terminal};

    pub use crate::error::{Error, Result};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        BresenhamRasterizer, FrameBuffer, LineRasterizer, RasterizerDispatcher, SlopeRasterizer,
    };
}
