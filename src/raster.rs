//! CPU line rasterization into a packed ARGB color buffer.
//!
//! This is the sink side of the pipeline: it knows nothing about 3D, it
//! just draws device-space segments. Lines use Bresenham's algorithm and
//! every segment endpoint gets a small square marker.

use std::path::Path;

use crate::colors;
use crate::pipeline::Segment;

/// Half-extent in pixels of the square drawn at each segment endpoint.
const MARKER_RADIUS: i32 = 3;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![colors::BACKGROUND; (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Draws a line using Bresenham's algorithm.
    ///
    /// Integer error accumulation only: each step advances along the major
    /// axis and steps the minor axis whenever the accumulated error says
    /// the ideal line has drifted past half a pixel.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut error = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Fills a small square centered on (x, y).
    pub fn draw_marker(&mut self, x: i32, y: i32, color: u32) {
        for dy in -MARKER_RADIUS..=MARKER_RADIUS {
            for dx in -MARKER_RADIUS..=MARKER_RADIUS {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a pipeline segment: the line plus both endpoint markers.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let x0 = segment.p0.x.round() as i32;
        let y0 = segment.p0.y.round() as i32;
        let x1 = segment.p1.x.round() as i32;
        let y1 = segment.p1.y.round() as i32;

        self.draw_line(x0, y0, x1, y1, segment.color);
        self.draw_marker(x0, y0, colors::MARKER);
        self.draw_marker(x1, y1, colors::MARKER);
    }

    /// The buffer as raw ARGB8888 bytes for presentation.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Saves the canvas as a PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        // Unpack ARGB u32 into RGBA bytes for the encoder.
        let rgba: Vec<u8> = self
            .color_buffer
            .iter()
            .flat_map(|&argb| {
                let [a, r, g, b] = argb.to_be_bytes();
                [r, g, b, a]
            })
            .collect();
        image::save_buffer(
            path,
            &rgba,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }
}
