//! Line clipping against the canonical view volume.
//!
//! [`outcode`] classifies points against the volume's six boundaries;
//! [`line`] hosts the iterative Cohen-Sutherland clip loop shared by the
//! parallel and perspective volumes.

pub mod line;
pub mod outcode;

pub use line::clip_segment;
pub use outcode::{Boundary, ClipVolume, Outcode};
