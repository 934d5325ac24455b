//! Frame scheduling and the animation loop.
//!
//! The host's display-refresh callback is abstracted as a [`FrameClock`]:
//! a source of monotonically increasing timestamps that yields `None` once
//! the animation is cancelled. [`AnimationDriver`] consumes a clock
//! cooperatively, rendering exactly one frame per tick; an absent surface
//! skips the frame silently and keeps the loop alive.

use crate::animator::CurveAnimator;
use crate::canvas::Canvas;

/// Injectable "request next tick" capability.
///
/// Real hosts bridge their refresh callback into this trait; tests use
/// [`ManualClock`] for deterministic stepping.
pub trait FrameClock {
    /// Timestamp of the next frame in milliseconds, or `None` when the
    /// animation has been cancelled.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Deterministic frame clock stepping a fixed interval.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
    remaining: u64,
}

impl ManualClock {
    /// Create a clock starting at `start_ms`, advancing `step_ms` per frame,
    /// for at most `frames` ticks.
    #[must_use]
    pub const fn new(start_ms: f64, step_ms: f64, frames: u64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms,
            remaining: frames,
        }
    }

    /// A 60 Hz clock (16.667 ms per frame) starting at zero.
    #[must_use]
    pub fn at_60fps(frames: u64) -> Self {
        Self::new(0.0, 1000.0 / 60.0, frames)
    }

    /// Frames left before the clock cancels.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameClock for ManualClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        Some(now)
    }
}

/// Drives a [`CurveAnimator`] against an optional surface.
///
/// The surface is optional on purpose: hosts may detach it during teardown
/// or before the first layout, and a frame that falls in that window is
/// skipped, never an error. The previous frame's pixels simply persist
/// until a surface is attached again.
#[derive(Debug)]
pub struct AnimationDriver<C: Canvas> {
    animator: CurveAnimator,
    canvas: Option<C>,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl<C: Canvas> AnimationDriver<C> {
    /// Create a driver with no surface attached.
    #[must_use]
    pub const fn new(animator: CurveAnimator) -> Self {
        Self {
            animator,
            canvas: None,
            frames_rendered: 0,
            frames_skipped: 0,
        }
    }

    /// Create a driver with a surface already attached.
    #[must_use]
    pub fn with_canvas(animator: CurveAnimator, canvas: C) -> Self {
        let mut driver = Self::new(animator);
        driver.attach(canvas);
        driver
    }

    /// Attach a drawing surface, replacing any current one.
    pub fn attach(&mut self, canvas: C) {
        self.canvas = Some(canvas);
    }

    /// Detach the drawing surface, returning it to the host.
    pub fn detach(&mut self) -> Option<C> {
        self.canvas.take()
    }

    /// Forward a host dimension change to the attached surface.
    ///
    /// No-op while detached; the next attached surface carries its own
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(canvas) = &mut self.canvas {
            canvas.resize(width, height);
        }
    }

    /// Borrow the animator.
    #[must_use]
    pub const fn animator(&self) -> &CurveAnimator {
        &self.animator
    }

    /// Borrow the attached surface, if any.
    #[must_use]
    pub const fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    /// Mutably borrow the attached surface, if any.
    pub fn canvas_mut(&mut self) -> Option<&mut C> {
        self.canvas.as_mut()
    }

    /// Frames rendered so far.
    #[must_use]
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Frames skipped for want of a surface.
    #[must_use]
    pub const fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Render one frame at the given timestamp.
    ///
    /// Returns `true` if a frame was rendered, `false` if it was skipped
    /// because no surface is attached.
    pub fn step(&mut self, time_ms: f64) -> bool {
        match &mut self.canvas {
            Some(canvas) => {
                self.animator.render_frame(canvas, time_ms);
                self.frames_rendered += 1;
                true
            }
            None => {
                self.frames_skipped += 1;
                false
            }
        }
    }

    /// Run the animation until the clock cancels.
    ///
    /// Returns the number of frames rendered during this run. All work is
    /// synchronous; the clock is consulted strictly between frames, which is
    /// the only point where cancellation can occur.
    pub fn run(&mut self, clock: &mut impl FrameClock) -> u64 {
        let start = self.frames_rendered;
        while let Some(time_ms) = clock.next_frame() {
            self.step(time_ms);
        }
        self.frames_rendered - start
    }
}
