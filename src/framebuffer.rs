//! RGBA pixel buffer backing the raster canvas.
//!
//! Tightly packed RGBA8 pixels in row-major order, suitable for direct PNG
//! encoding. The buffer can be resized in place when the host reports new
//! surface dimensions.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Bytes per RGBA pixel.
const BYTES_PER_PIXEL: usize = 4;

/// A tightly packed RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Resize the buffer, discarding previous contents.
    ///
    /// The new buffer is cleared to transparent black. Used by hosts to push
    /// dimension changes in before the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero; the old buffer is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        self.pixels.clear();
        self.pixels.resize(size, 0);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a pixel coordinate, or `None` out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.byte_index(x, y);
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(Rgba::from_array(arr))
    }

    /// Set the color at a pixel coordinate; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.byte_index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Source-over blend a color onto a pixel; out-of-bounds writes are
    /// ignored.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        if color.a == 255 {
            // Opaque source replaces the destination outright.
            self.set_pixel(x, y, color);
            return;
        }
        if color.a == 0 {
            return;
        }

        let idx = self.byte_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let src = color.to_array();
        for c in 0..3 {
            let s = f32::from(src[c]) / 255.0;
            let d = f32::from(self.pixels[idx + c]) / 255.0;
            let out = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
            self.pixels[idx + c] = (out * 255.0).round() as u8;
        }
        self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
    }

    #[inline]
    fn byte_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }
}
