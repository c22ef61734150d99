//! Error types for termgfx operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or projecting.
#[derive(Error, Debug)]
pub enum Error {
    /// The OS could not report the terminal window size.
    #[error("terminal size query failed: {0}")]
    TerminalQuery(#[source] io::Error),

    /// Writing a frame or reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The camera sits on the world origin, so no viewing direction exists.
    #[error("camera location {x}, {y}, {z} is degenerate: distance from the world origin is zero")]
    DegenerateCamera {
        /// Camera x.
        x: f32,
        /// Camera y.
        y: f32,
        /// Camera z.
        z: f32,
    },

    /// A point lies on the camera plane (zero depth) and cannot be projected.
    #[error("point lies at zero camera-space depth")]
    ZeroDepth,

    /// `max_y` of zero leaves the plot without a vertical scale.
    #[error("plot scale is zero: max_y must be non-zero")]
    ZeroScale,

    /// Terminal or buffer dimensions that cannot hold a frame.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: usize,
        /// Height value.
        height: usize,
    },

    /// An OBJ model could not be loaded.
    #[error("failed to load model: {0}")]
    ModelLoad(#[from] tobj::LoadError),

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
