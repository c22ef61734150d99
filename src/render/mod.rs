//! Low-level rendering: the character frame buffer and line rasterizers.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{density_glyph, FrameBuffer, BLANK};
pub use rasterizer::{
    BresenhamRasterizer, LineRasterizer, RasterizerDispatcher, RasterizerType, SlopeRasterizer,
};
