//! Frame renderer holding the animation state.
//!
//! [`CurveAnimator`] owns the single piece of mutable animation state (the
//! rotating hue offset) and orchestrates one frame: clear, center the
//! coordinate frame, advance the hue, sample the curve at the current
//! surface scale, stroke it segment by segment with per-point colour and
//! wave, then stroke the mirrored wing and restore the transform.

use crate::canvas::Canvas;
use crate::curve::{fit_scale, ButterflyCurve, DEFAULT_SAMPLES};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::style;

/// Degrees the hue offset rotates per frame.
pub const DEFAULT_HUE_STEP: f32 = 0.5;

/// Default stroke width in device pixels.
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Animated butterfly-curve renderer.
///
/// The point-sequence length is fixed for the lifetime of the animator;
/// only coordinates and colours change between frames. The hue offset is
/// the sole mutable state, advanced exactly once per rendered frame by the
/// single execution flow, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct CurveAnimator {
    samples: usize,
    hue_step: f32,
    line_width: f32,
    hue_offset: f32,
}

impl Default for CurveAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveAnimator {
    /// Create an animator with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            hue_step: DEFAULT_HUE_STEP,
            line_width: DEFAULT_LINE_WIDTH,
            hue_offset: 0.0,
        }
    }

    /// Set the number of curve samples per frame.
    #[must_use]
    pub const fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the per-frame hue rotation in degrees.
    #[must_use]
    pub const fn hue_step(mut self, degrees: f32) -> Self {
        self.hue_step = degrees;
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub const fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 samples are configured.
    pub fn build(self) -> Result<Self> {
        if self.samples < 3 {
            return Err(Error::SampleCount {
                count: self.samples,
            });
        }
        Ok(self)
    }

    /// Current hue offset in [0, 360).
    #[must_use]
    pub const fn hue_offset(&self) -> f32 {
        self.hue_offset
    }

    /// Configured samples per frame.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.samples
    }

    /// Advance the hue offset by one frame, wrapping modulo 360.
    pub fn advance(&mut self) {
        self.hue_offset = (self.hue_offset + self.hue_step).rem_euclid(360.0);
    }

    /// Render one frame onto the canvas at the given timestamp.
    ///
    /// The curve scale is re-derived from the canvas dimensions on every
    /// call, so host resizes take effect on the next frame with no stale
    /// caching.
    pub fn render_frame<C: Canvas>(&mut self, canvas: &mut C, time_ms: f64) {
        let (width, height) = canvas.dimensions();

        canvas.clear();
        canvas.save();
        canvas.translate(width as f32 / 2.0, height as f32 / 2.0);

        self.advance();

        let points = ButterflyCurve::new()
            .samples(self.samples)
            .scale(fit_scale(width as f32, height as f32))
            .sample();

        canvas.set_line_width(self.line_width);
        self.stroke_wing(canvas, &points, time_ms);

        // Mirrored wing: negate x and stroke the identical sequence. The
        // wave is recomputed per point; both passes use the same progress
        // indexing, so the values agree.
        canvas.scale(-1.0, 1.0);
        self.stroke_wing(canvas, &points, time_ms);

        canvas.restore();
    }

    /// Stroke one wing, segment by segment.
    ///
    /// Each segment is begun and stroked individually so the colour can
    /// change along the curve; a segment takes the colour of its end point.
    fn stroke_wing<C: Canvas>(&self, canvas: &mut C, points: &[Point], time_ms: f64) {
        let n = points.len();
        let mut prev: Option<Point> = None;

        for (i, point) in points.iter().enumerate() {
            let progress = i as f32 / n as f32;
            let color = style::stroke_color(self.hue_offset, progress).to_rgba();
            let wave = style::wave_offset(progress, time_ms);
            let waved = Point::new(point.x + wave, point.y);

            if let Some(prev) = prev {
                canvas.set_stroke_color(color);
                canvas.begin_path();
                canvas.move_to(prev.x, prev.y);
                canvas.line_to(waved.x, waved.y);
                canvas.stroke();
            }
            prev = Some(waved);
        }
    }
}
