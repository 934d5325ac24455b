//! Butterfly Frame Export Example
//!
//! Renders one animation frame headless and saves it as a PNG.
//!
//! Run with: `cargo run --example butterfly_png`

use mariposa::output::PngEncoder;
use mariposa::prelude::*;

fn main() {
    println!("Butterfly Frame Export Example");
    println!("==============================\n");

    // Step 1: Build the animator
    println!("Step 1: Building animator...");
    let animator = CurveAnimator::new().build().expect("valid animator config");
    println!("  Samples per frame: {}", animator.sample_count());

    // Step 2: Attach a raster surface with the classic dark background
    println!("\nStep 2: Creating raster canvas...");
    let canvas = RasterCanvas::new(800, 600)
        .expect("valid dimensions")
        .with_background(Rgba::rgb(26, 26, 46));
    let mut driver = AnimationDriver::with_canvas(animator, canvas);
    println!("  Canvas dimensions: 800x600 pixels");

    // Step 3: Advance a few frames so the wave has some phase
    println!("\nStep 3: Rendering frames...");
    let mut clock = ManualClock::at_60fps(90);
    let rendered = driver.run(&mut clock);
    println!("  Frames rendered: {rendered}");
    println!("  Hue offset now: {:.1} degrees", driver.animator().hue_offset());

    // Step 4: Save the last frame
    println!("\nStep 4: Saving to PNG...");
    let output_path = "butterfly.png";
    let fb = driver
        .canvas()
        .expect("canvas is attached")
        .framebuffer();
    PngEncoder::write_to_file(fb, output_path).expect("Failed to write PNG");
    println!("  Saved to: {output_path}");
}
