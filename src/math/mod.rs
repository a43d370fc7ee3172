//! Small linear-algebra kernel for the viewing pipeline.
//!
//! Everything is `f64`; the clipper and the transform tests compare
//! coordinates against canonical bounds at 1e-9 tolerance.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
