//! Command-recording canvas.
//!
//! Records the exact drawing-command stream instead of producing pixels.
//! `strokes()` replays the log through the same transform semantics a real
//! surface would apply, which makes frame output assertable in tests without
//! rasterizing anything.

use crate::canvas::{Canvas, Transform};
use crate::color::Rgba;
use crate::geometry::Point;

/// One recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Surface cleared.
    Clear,
    /// Dimensions updated.
    Resize(u32, u32),
    /// Transform state pushed.
    Save,
    /// Transform state popped.
    Restore,
    /// Coordinate frame translated.
    Translate(f32, f32),
    /// Coordinate frame scaled.
    Scale(f32, f32),
    /// Stroke colour set.
    StrokeColor(Rgba),
    /// Line width set.
    LineWidth(f32),
    /// New path begun.
    BeginPath,
    /// Subpath started.
    MoveTo(f32, f32),
    /// Subpath extended.
    LineTo(f32, f32),
    /// Current path stroked.
    Stroke,
}

/// A stroked line segment reconstructed from the command log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedSegment {
    /// Segment start in local (pre-transform) coordinates.
    pub from: Point,
    /// Segment end in local (pre-transform) coordinates.
    pub to: Point,
    /// Segment start in device coordinates.
    pub device_from: Point,
    /// Segment end in device coordinates.
    pub device_to: Point,
    /// Stroke colour in effect.
    pub color: Rgba,
    /// Line width in effect.
    pub width: f32,
}

/// Canvas implementation that records commands instead of drawing.
#[derive(Debug, Clone)]
pub struct TraceCanvas {
    width: u32,
    height: u32,
    commands: Vec<Command>,
}

impl TraceCanvas {
    /// Create a trace canvas with the given dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Get the recorded command log.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Discard the recorded command log.
    pub fn clear_log(&mut self) {
        self.commands.clear();
    }

    /// Replay the command log into stroked segments.
    ///
    /// Tracks the transform stack, stroke colour, and line width the way a
    /// real surface would, and emits one [`StrokedSegment`] per line in each
    /// stroked path.
    #[must_use]
    pub fn strokes(&self) -> Vec<StrokedSegment> {
        let mut segments = Vec::new();
        let mut transform = Transform::IDENTITY;
        let mut stack: Vec<Transform> = Vec::new();
        let mut color = Rgba::BLACK;
        let mut width = 1.0;
        // Path points in local coordinates, with the transform captured at
        // the time each verb executed.
        let mut path: Vec<(Point, Transform)> = Vec::new();

        for command in &self.commands {
            match *command {
                Command::Save => stack.push(transform),
                Command::Restore => transform = stack.pop().unwrap_or(Transform::IDENTITY),
                Command::Translate(dx, dy) => transform.translate(dx, dy),
                Command::Scale(sx, sy) => transform.scale(sx, sy),
                Command::StrokeColor(c) => color = c,
                Command::LineWidth(w) => width = w,
                Command::BeginPath => path.clear(),
                Command::MoveTo(x, y) | Command::LineTo(x, y) => {
                    path.push((Point::new(x, y), transform));
                }
                Command::Stroke => {
                    for pair in path.windows(2) {
                        let (from, from_t) = pair[0];
                        let (to, to_t) = pair[1];
                        segments.push(StrokedSegment {
                            from,
                            to,
                            device_from: from_t.apply(from),
                            device_to: to_t.apply(to),
                            color,
                            width,
                        });
                    }
                }
                Command::Clear | Command::Resize(..) => {}
            }
        }

        segments
    }
}

impl Canvas for TraceCanvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.commands.push(Command::Resize(width, height));
    }

    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn save(&mut self) {
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        self.commands.push(Command::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(Command::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(Command::Scale(sx, sy));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(Command::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(Command::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(Command::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands_in_order() {
        let mut canvas = TraceCanvas::new(100, 100);
        canvas.clear();
        canvas.save();
        canvas.translate(50.0, 50.0);
        canvas.restore();

        assert_eq!(
            canvas.commands(),
            &[
                Command::Clear,
                Command::Save,
                Command::Translate(50.0, 50.0),
                Command::Restore,
            ]
        );
    }

    #[test]
    fn test_strokes_apply_transform() {
        let mut canvas = TraceCanvas::new(100, 100);
        canvas.save();
        canvas.translate(50.0, 50.0);
        canvas.set_stroke_color(Rgba::WHITE);
        canvas.set_line_width(2.0);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.stroke();
        canvas.restore();

        let strokes = canvas.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].from, Point::ORIGIN);
        assert_eq!(strokes[0].device_from, Point::new(50.0, 50.0));
        assert_eq!(strokes[0].device_to, Point::new(60.0, 50.0));
        assert_eq!(strokes[0].color, Rgba::WHITE);
    }

    #[test]
    fn test_mirror_scale_negates_device_x() {
        let mut canvas = TraceCanvas::new(100, 100);
        canvas.scale(-1.0, 1.0);
        canvas.begin_path();
        canvas.move_to(10.0, 5.0);
        canvas.line_to(20.0, 5.0);
        canvas.stroke();

        let strokes = canvas.strokes();
        assert_eq!(strokes[0].device_from, Point::new(-10.0, 5.0));
        assert_eq!(strokes[0].device_to, Point::new(-20.0, 5.0));
    }

    #[test]
    fn test_resize_updates_dimensions_and_ignores_zero() {
        let mut canvas = TraceCanvas::new(100, 100);
        canvas.resize(400, 300);
        assert_eq!(canvas.dimensions(), (400, 300));
        canvas.resize(0, 300);
        assert_eq!(canvas.dimensions(), (400, 300));
    }

    #[test]
    fn test_begin_path_discards_previous_points() {
        let mut canvas = TraceCanvas::new(100, 100);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(5.0, 5.0);
        canvas.begin_path();
        canvas.move_to(1.0, 1.0);
        canvas.line_to(2.0, 2.0);
        canvas.stroke();

        let strokes = canvas.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].from, Point::new(1.0, 1.0));
    }
}
