//! Deterministic Animation Walkthrough
//!
//! Steps the animation with a manual clock and a command-recording canvas,
//! printing what each frame does. No pixels involved.
//!
//! Run with: `cargo run --example animation_steps`

use mariposa::prelude::*;

fn main() {
    println!("Deterministic Animation Walkthrough");
    println!("===================================\n");

    let animator = CurveAnimator::new()
        .samples(200)
        .build()
        .expect("valid animator config");
    let mut driver = AnimationDriver::with_canvas(animator, TraceCanvas::new(800, 600));

    let mut clock = ManualClock::at_60fps(5);
    while let Some(time_ms) = clock.next_frame() {
        driver.canvas_mut().expect("canvas attached").clear_log();
        driver.step(time_ms);

        let canvas = driver.canvas().expect("canvas attached");
        let strokes = canvas.strokes();
        println!(
            "frame t={:7.2}ms  hue={:5.1}  segments={} (both wings)",
            time_ms,
            driver.animator().hue_offset(),
            strokes.len(),
        );
    }

    println!("\nDetaching the surface: frames are skipped, never fatal.");
    let _ = driver.detach();
    let mut clock = ManualClock::new(1000.0, 16.0, 3);
    driver.run(&mut clock);
    println!(
        "rendered={} skipped={}",
        driver.frames_rendered(),
        driver.frames_skipped()
    );
}
