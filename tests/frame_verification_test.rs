//! End-to-end verification of the animation loop.
//!
//! Drives the full stack (driver -> animator -> canvas) with a deterministic
//! clock and asserts the observable frame output: hue progression, mirror
//! symmetry, resize behaviour, and that pixels actually change over time.

#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use mariposa::prelude::*;

fn small_animator() -> CurveAnimator {
    CurveAnimator::new()
        .samples(32)
        .build()
        .expect("valid animator config")
}

// ============================================================================
// Hue progression
// ============================================================================

#[test]
fn hue_offset_after_720_frames_wraps_to_zero() {
    let mut driver = AnimationDriver::with_canvas(small_animator(), TraceCanvas::new(100, 100));
    let mut clock = ManualClock::at_60fps(720);
    assert_eq!(driver.run(&mut clock), 720);
    assert_abs_diff_eq!(driver.animator().hue_offset(), 0.0);
}

#[test]
fn hue_offset_after_100_frames_is_50() {
    let mut driver = AnimationDriver::with_canvas(small_animator(), TraceCanvas::new(100, 100));
    let mut clock = ManualClock::at_60fps(100);
    driver.run(&mut clock);
    assert_abs_diff_eq!(driver.animator().hue_offset(), 50.0);
}

// ============================================================================
// Mirror symmetry
// ============================================================================

#[test]
fn mirrored_wing_negates_device_x_and_keeps_colours() {
    let samples = 48;
    let animator = CurveAnimator::new().samples(samples).build().unwrap();
    let mut driver = AnimationDriver::with_canvas(animator, TraceCanvas::new(600, 600));
    driver.step(123.0);

    let strokes = driver.canvas().unwrap().strokes();
    assert_eq!(strokes.len(), 2 * (samples - 1));

    let (first, mirrored) = strokes.split_at(samples - 1);
    let center_x = 300.0;
    for (a, b) in first.iter().zip(mirrored) {
        assert_eq!(a.color, b.color);
        assert_abs_diff_eq!(a.device_from.y, b.device_from.y, epsilon = 1e-3);
        assert_abs_diff_eq!(
            a.device_from.x - center_x,
            -(b.device_from.x - center_x),
            epsilon = 1e-3
        );
    }
}

// ============================================================================
// Resize contract
// ============================================================================

#[test]
fn second_frame_uses_fresh_scale_after_resize() {
    let mut driver = AnimationDriver::with_canvas(small_animator(), TraceCanvas::new(800, 600));
    driver.step(0.0);
    let extent_800 = max_device_y_extent(driver.canvas().unwrap(), 300.0);

    // Host shrinks the surface between frames: 800x600 -> 400x300.
    driver.resize(400, 300);
    driver.canvas_mut().unwrap().clear_log();
    driver.step(16.0);
    let extent_400 = max_device_y_extent(driver.canvas().unwrap(), 150.0);

    // fit scale halves (240 -> 120), so the rendered extent halves too.
    assert_abs_diff_eq!(extent_800 / extent_400, 2.0, epsilon = 0.05);
}

fn max_device_y_extent(canvas: &TraceCanvas, center_y: f32) -> f32 {
    canvas
        .strokes()
        .iter()
        .map(|s| (s.device_to.y - center_y).abs())
        .fold(0.0, f32::max)
}

// ============================================================================
// Missing surface
// ============================================================================

#[test]
fn frames_without_surface_are_skipped_not_fatal() {
    let mut driver: AnimationDriver<TraceCanvas> = AnimationDriver::new(small_animator());
    let mut clock = ManualClock::at_60fps(10);
    assert_eq!(driver.run(&mut clock), 0);
    assert_eq!(driver.frames_skipped(), 10);

    // Attaching a surface later resumes rendering where the host left off.
    driver.attach(TraceCanvas::new(100, 100));
    let mut clock = ManualClock::new(1000.0, 16.0, 5);
    assert_eq!(driver.run(&mut clock), 5);
}

// ============================================================================
// Pixels
// ============================================================================

#[test]
fn rendered_frame_produces_visible_pixels() {
    let canvas = RasterCanvas::new(200, 200)
        .unwrap()
        .with_background(Rgba::rgb(26, 26, 46));
    let mut driver = AnimationDriver::with_canvas(small_animator(), canvas);
    driver.step(0.0);

    let fb = driver.canvas().unwrap().framebuffer();
    let stroked = count_non_background(fb, Rgba::rgb(26, 26, 46));
    assert!(stroked > 0, "frame must stroke at least some pixels");
}

#[test]
fn wave_makes_consecutive_frames_differ() {
    let mut driver = AnimationDriver::with_canvas(
        small_animator(),
        RasterCanvas::new(200, 200).unwrap(),
    );
    driver.step(0.0);
    let first = driver.canvas().unwrap().framebuffer().pixels().to_vec();

    // Half a wave period later the ripple has visibly moved.
    driver.step(1500.0);
    let second = driver.canvas().unwrap().framebuffer().pixels().to_vec();

    assert_ne!(first, second);
}

#[test]
fn frame_exports_as_png() {
    let mut driver = AnimationDriver::with_canvas(
        small_animator(),
        RasterCanvas::new(64, 64).unwrap(),
    );
    driver.step(16.0);

    let bytes = mariposa::output::PngEncoder::to_bytes(driver.canvas().unwrap().framebuffer())
        .expect("PNG encoding succeeds");
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

fn count_non_background(fb: &Framebuffer, background: Rgba) -> usize {
    let mut n = 0;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get_pixel(x, y) != Some(background) {
                n += 1;
            }
        }
    }
    n
}
