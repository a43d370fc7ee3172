//! A CPU-based 3D wireframe viewing pipeline.
//!
//! Scenes (camera parameters, clip-volume bounds, polyhedral line-models)
//! are normalized into a canonical view volume, their edges clipped against
//! it with an outcode-based line clipper, and the survivors projected into
//! device-space 2D segments ready to rasterize. SDL2 is used only for
//! window management and display; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use wireview::prelude::*;
//!
//! let scene = Scene::sample();
//! let pipeline = Pipeline::new(800, 600);
//! let segments = pipeline.render_frame(&scene)?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{ClipBounds, Pan, ProjectionKind, ViewSpec};
pub use clipper::{ClipVolume, Outcode};
pub use pipeline::{Pipeline, Segment};
pub use projection::{DegenerateViewError, ViewTransform};
pub use scene::{InvalidSceneError, LoadError, Model, Scene};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wireview::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{ClipBounds, Pan, ProjectionKind, ViewSpec};

    // Pipeline
    pub use crate::pipeline::{Pipeline, Segment};

    // Scene
    pub use crate::scene::{Model, Scene};

    // Projection
    pub use crate::projection::{DegenerateViewError, ViewTransform};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rasterization
    pub use crate::raster::Canvas;

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::{clip_segment, ClipVolume};
}
