//! Per-frame viewing pipeline driver.
//!
//! One [`Pipeline::render_frame`] call runs the whole pipeline for a scene:
//! build the normalizing and projection matrices, transform every model
//! vertex into the canonical view volume, clip every edge against it, then
//! project the survivors into device coordinates. The output is a flat draw
//! list of 2D segments for whatever raster sink the caller uses.
//!
//! The call is synchronous and side-effect free: it borrows the [`Scene`]
//! immutably for its whole duration, so a caller replacing the scene
//! between frames can never observe a half-updated mix. `render_frame` is
//! not meant to overlap a concurrent scene mutation; single-threaded
//! callers get that serialization from the borrow checker for free.

use crate::clipper::clip_segment;
use crate::colors;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::projection::{DegenerateViewError, ViewTransform};
use crate::scene::Scene;

/// One device-space line segment ready to rasterize.
///
/// Endpoints already have w divided out; `color` is packed ARGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Vec2,
    pub p1: Vec2,
    pub color: u32,
}

/// The viewing pipeline for a fixed device size.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    width: u32,
    height: u32,
}

impl Pipeline {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps canonical projected coordinates ([-1, 1] in x and y) onto the
    /// device: scale by half the device size, then shift the origin to the
    /// center.
    fn device_matrix(&self) -> Mat4 {
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        Mat4::new([
            [half_w, 0.0, 0.0, half_w],
            [0.0, half_h, 0.0, half_h],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Computes the draw list for one frame of a scene.
    ///
    /// The scene is not mutated; transformed vertices live only in this
    /// call's transient buffers. A degenerate camera fails the frame (the
    /// caller keeps its previous output) without touching the process.
    /// Expects a scene that passed [`Scene::validate`]; edge indices are
    /// not re-checked here.
    pub fn render_frame(&self, scene: &Scene) -> Result<Vec<Segment>, DegenerateViewError> {
        let transform = ViewTransform::build(&scene.view)?;
        // Projection and device mapping commute with clipping output, so
        // they are composed once and applied per surviving endpoint.
        let to_device = Mat4::compose(&[self.device_matrix(), transform.project]);

        let mut segments = Vec::new();
        let mut canonical: Vec<Vec4> = Vec::new();

        for model in &scene.models {
            canonical.clear();
            canonical.extend(model.vertices.iter().map(|&v| transform.normalize * v));

            for (i, j) in model.edges() {
                let clipped = clip_segment(canonical[i], canonical[j], transform.volume);
                if let Some((c0, c1)) = clipped {
                    segments.push(Segment {
                        p0: (to_device * c0).to_screen(),
                        p1: (to_device * c1).to_screen(),
                        color: colors::EDGE,
                    });
                }
            }
        }

        Ok(segments)
    }
}
