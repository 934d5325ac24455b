//! Framebuffer-backed canvas.
//!
//! Rasterizes stroked paths into an RGBA [`Framebuffer`], honoring the
//! translate/scale transform stack including the negative-x mirror pass.

use crate::canvas::{Canvas, Transform};
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Canvas implementation backed by an in-memory pixel buffer.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    fb: Framebuffer,
    background: Rgba,
    transform: Transform,
    stack: Vec<Transform>,
    stroke_color: Rgba,
    line_width: f32,
    // Current path in device coordinates; verbs transform eagerly the way
    // 2D contexts do.
    path: Vec<Point>,
}

impl RasterCanvas {
    /// Create a raster canvas with a transparent background.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            fb: Framebuffer::new(width, height)?,
            background: Rgba::TRANSPARENT,
            transform: Transform::IDENTITY,
            stack: Vec::new(),
            stroke_color: Rgba::BLACK,
            line_width: 1.0,
            path: Vec::new(),
        })
    }

    /// Set the colour used when the surface is cleared.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Borrow the underlying framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the canvas, yielding the framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        let radius = (self.line_width / 2.0).round().max(0.0) as i64;
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + dx * t;
            let y = from.y + dy * t;
            self.stamp(x.round() as i64, y.round() as i64, radius);
        }
    }

    // Stamp a filled disc of the given radius, clipped to the buffer.
    fn stamp(&mut self, cx: i64, cy: i64, radius: i64) {
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                if ox * ox + oy * oy > radius * radius {
                    continue;
                }
                let x = cx + ox;
                let y = cy + oy;
                if x >= 0 && y >= 0 {
                    self.fb.blend_pixel(x as u32, y as u32, self.stroke_color);
                }
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.fb.width(), self.fb.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Zero dimensions are a host glitch; keep the old surface.
        let _ = self.fb.resize(width, height);
    }

    fn clear(&mut self) {
        self.fb.clear(self.background);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        self.transform = self.stack.pop().unwrap_or(Transform::IDENTITY);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.scale(sx, sy);
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.5);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.transform.apply(Point::new(x, y));
        self.path.push(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.transform.apply(Point::new(x, y));
        self.path.push(p);
    }

    fn stroke(&mut self) {
        let segments: Vec<(Point, Point)> = self
            .path
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        for (from, to) in segments {
            self.stroke_segment(from, to);
        }
    }
}
