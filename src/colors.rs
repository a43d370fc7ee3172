//! Packed ARGB (0xAARRGGBB) color constants for the demo renderer.

pub const BACKGROUND: u32 = 0xFFFFFFFF;
/// Edge stroke color.
pub const EDGE: u32 = 0xFF4287F5;
/// Square endpoint markers.
pub const MARKER: u32 = 0xFF000000;
