//! # Mariposa
//!
//! Animated parametric butterfly-curve renderer with hue cycling and wave
//! perturbation.
//!
//! Mariposa computes a closed butterfly curve from its parametric equations,
//! maps each point to a slowly rotating HSL colour, applies a time-varying
//! horizontal ripple, and strokes the result twice (once as generated, once
//! mirrored about the vertical axis) onto any surface implementing the
//! [`Canvas`](canvas::Canvas) trait.
//!
//! The crate is deliberately host-agnostic: frame scheduling and surface
//! lifetime are capabilities the host injects. A deterministic
//! [`ManualClock`](driver::ManualClock) and a pixel-backed
//! [`RasterCanvas`](canvas::RasterCanvas) are provided so the full animation
//! loop can run headless.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mariposa::prelude::*;
//!
//! let animator = CurveAnimator::new().build()?;
//! let canvas = RasterCanvas::new(800, 600)?;
//! let mut driver = AnimationDriver::with_canvas(animator, canvas);
//!
//! // One frame at t = 16ms; pixels land in the canvas framebuffer.
//! driver.step(16.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/animation code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and HSL to RGB conversion.
pub mod color;

/// Geometric primitives.
pub mod geometry;

/// Parametric butterfly-curve sampling.
pub mod curve;

/// Per-point colour cycling and wave perturbation.
pub mod style;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Drawing-surface abstraction and implementations.
pub mod canvas;

/// RGBA pixel buffer backing the raster canvas.
pub mod framebuffer;

/// Frame renderer holding the animation state.
pub mod animator;

/// Frame scheduling and the animation loop.
pub mod driver;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for mariposa operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use mariposa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::CurveAnimator;
    pub use crate::canvas::{Canvas, RasterCanvas, TraceCanvas, Transform};
    pub use crate::color::{Hsla, Rgba};
    pub use crate::curve::ButterflyCurve;
    pub use crate::driver::{AnimationDriver, FrameClock, ManualClock};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
}
