//! Parametric butterfly-curve sampling.
//!
//! Implements Temple Fay's butterfly curve:
//!
//! ```text
//! r(t) = e^cos(t) - 2*cos(4t) + sin(t/12)^5
//! x(t) = sin(t) * r(t) * S * 0.25
//! y(t) = cos(t) * r(t) * S * 0.25
//! ```
//!
//! Sampling is a total, deterministic function: identical inputs reproduce
//! bit-identical output.
//!
//! # References
//!
//! - Fay, T. H. (1989). "The Butterfly Curve." *The American Mathematical
//!   Monthly*, 96(5), 442-443.

use crate::error::{Error, Result};
use crate::geometry::Point;
use std::f32::consts::TAU;

/// Default number of points sampled along the curve.
pub const DEFAULT_SAMPLES: usize = 200;

/// Fraction of the curve scale applied to raw radii.
const RADIUS_SCALE: f32 = 0.25;

/// Fraction of the smaller surface dimension used as the curve scale.
const FIT_FRACTION: f32 = 0.4;

/// Radial component of the butterfly curve at parameter `t`.
#[must_use]
pub fn butterfly_radius(t: f32) -> f32 {
    t.cos().exp() - 2.0 * (4.0 * t).cos() + (t / 12.0).sin().powi(5)
}

/// Derive the curve scale from the current surface dimensions.
///
/// The scale tracks the smaller dimension so the wings stay inside the
/// surface regardless of aspect ratio. Hosts must feed *current* dimensions
/// every frame; nothing is cached across a resize.
#[must_use]
pub fn fit_scale(width: f32, height: f32) -> f32 {
    width.min(height) * FIT_FRACTION
}

/// Butterfly-curve sampler.
///
/// Builder for an ordered point sequence tracing one closed butterfly curve,
/// with `t` uniformly spaced over [0, 2π).
#[derive(Debug, Clone, Copy)]
pub struct ButterflyCurve {
    samples: usize,
    scale: f32,
}

impl Default for ButterflyCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl ButterflyCurve {
    /// Create a sampler with the default sample count and unit scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            scale: 1.0,
        }
    }

    /// Set the number of sample points.
    #[must_use]
    pub const fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the scale factor.
    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Validate the sampler configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 samples are requested or the scale
    /// is not a positive finite number.
    pub fn build(self) -> Result<Self> {
        if self.samples < 3 {
            return Err(Error::SampleCount {
                count: self.samples,
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidScale { scale: self.scale });
        }
        Ok(self)
    }

    /// Get the configured sample count.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.samples
    }

    /// Get the configured scale factor.
    #[must_use]
    pub const fn scale_factor(&self) -> f32 {
        self.scale
    }

    /// Evaluate the curve at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Point {
        let r = butterfly_radius(t);
        Point::new(
            t.sin() * r * self.scale * RADIUS_SCALE,
            t.cos() * r * self.scale * RADIUS_SCALE,
        )
    }

    /// Sample the full curve.
    ///
    /// Returns exactly `samples` points for `t = i/N * 2π`, `i` in `0..N`.
    #[must_use]
    pub fn sample(&self) -> Vec<Point> {
        let n = self.samples;
        (0..n)
            .map(|i| self.point_at((i as f32 / n as f32) * TAU))
            .collect()
    }
}
