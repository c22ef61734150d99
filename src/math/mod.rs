//! Small fixed-size linear algebra used by the projection pipeline.

pub mod mat3;
pub mod mat4;
pub mod point;
pub mod vec2;
pub mod vec3;
pub mod vec4;
