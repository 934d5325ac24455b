//! Per-point colour cycling and wave perturbation.
//!
//! Pure mappings from `(hue offset, progress, time)` to a stroke colour and
//! a horizontal ripple offset. Nothing here mutates state; the rotating hue
//! offset itself lives in [`CurveAnimator`](crate::animator::CurveAnimator).

use crate::color::Hsla;

/// Hue span of the gradient along one pass of the curve, in degrees.
pub const HUE_SPAN: f32 = 60.0;

/// Stroke saturation (fixed).
pub const STROKE_SATURATION: f32 = 0.70;

/// Stroke lightness (fixed).
pub const STROKE_LIGHTNESS: f32 = 0.60;

/// Peak horizontal displacement of the wave, in surface units.
pub const WAVE_AMPLITUDE: f32 = 5.0;

/// Wave angular frequency along the curve.
pub const WAVE_FREQUENCY: f32 = 10.0;

/// Wave time scale (milliseconds to radians).
pub const WAVE_TIME_SCALE: f64 = 0.001;

/// Hue for a point at `progress` (index / N) given the current hue offset.
///
/// At `progress = 0` this is exactly the offset; at `progress = 1` it would
/// be `(offset + HUE_SPAN) mod 360`, though sampling never reaches 1.
#[must_use]
pub fn cycled_hue(offset: f32, progress: f32) -> f32 {
    (offset + progress * HUE_SPAN).rem_euclid(360.0)
}

/// Stroke colour for a point: cycled hue at fixed saturation and lightness.
#[must_use]
pub fn stroke_color(offset: f32, progress: f32) -> Hsla {
    Hsla::hsl(
        cycled_hue(offset, progress),
        STROKE_SATURATION,
        STROKE_LIGHTNESS,
    )
}

/// Horizontal ripple offset for a point at `progress` and time `time_ms`.
///
/// Applied to the x coordinate only. Bounded in
/// [-`WAVE_AMPLITUDE`, `WAVE_AMPLITUDE`] for all inputs.
#[must_use]
pub fn wave_offset(progress: f32, time_ms: f64) -> f32 {
    let phase = time_ms * WAVE_TIME_SCALE + f64::from(progress * WAVE_FREQUENCY);
    (phase.sin() * f64::from(WAVE_AMPLITUDE)) as f32
}
