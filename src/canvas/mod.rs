//! Drawing-surface abstraction and implementations.
//!
//! The [`Canvas`] trait captures exactly the capability set the frame
//! renderer needs from a host surface: clearing, a save/restore transform
//! stack, translate and scale, stroke state, and path stroking. Hosts push
//! dimension changes in through [`Canvas::resize`]; the renderer re-derives
//! its curve scale from `dimensions()` every frame, so nothing stale
//! survives a resize.
//!
//! Two implementations ship with the crate:
//!
//! - [`RasterCanvas`] rasterizes strokes into an RGBA
//!   [`Framebuffer`](crate::framebuffer::Framebuffer).
//! - [`TraceCanvas`] records the command stream for inspection, the
//!   substitute that makes the animation deterministic under test.

mod raster;
mod trace;

pub use raster::RasterCanvas;
pub use trace::{Command, StrokedSegment, TraceCanvas};

use crate::color::Rgba;
use crate::geometry::Point;

/// A 2D drawing surface the frame renderer strokes onto.
///
/// Modeled on immediate-mode 2D contexts: paths are built with
/// `begin_path`/`move_to`/`line_to` and rendered with `stroke` using the
/// current stroke colour and line width. Transform calls compose; `save`
/// pushes the current transform and `restore` pops it.
pub trait Canvas {
    /// Current drawable dimensions in device pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Update the drawable dimensions.
    ///
    /// Zero dimensions are ignored; the surface keeps its previous size.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the entire surface.
    fn clear(&mut self);

    /// Push the current transform state.
    fn save(&mut self);

    /// Pop the most recently saved transform state.
    ///
    /// A restore without a matching save resets to the identity transform.
    fn restore(&mut self);

    /// Translate the coordinate frame.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Scale the coordinate frame. Negative factors mirror.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Set the stroke colour for subsequent strokes.
    fn set_stroke_color(&mut self, color: Rgba);

    /// Set the line width for subsequent strokes.
    fn set_line_width(&mut self, width: f32);

    /// Begin a new path, discarding any current one.
    fn begin_path(&mut self);

    /// Start a new subpath at the given coordinates.
    fn move_to(&mut self, x: f32, y: f32);

    /// Extend the current subpath with a line to the given coordinates.
    fn line_to(&mut self, x: f32, y: f32);

    /// Stroke the current path with the current colour and width.
    fn stroke(&mut self);
}

/// A translate/scale 2D transform.
///
/// The renderer only ever translates and scales (including the negative-x
/// mirror), so a full affine matrix is unnecessary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// X scale factor.
    pub sx: f32,
    /// Y scale factor.
    pub sy: f32,
    /// X translation in device pixels.
    pub tx: f32,
    /// Y translation in device pixels.
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Compose a translation onto this transform.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.tx += dx * self.sx;
        self.ty += dy * self.sy;
    }

    /// Compose a scale onto this transform.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.sx *= sx;
        self.sy *= sy;
    }

    /// Map a local point to device coordinates.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.sx + self.tx, p.y * self.sy + self.ty)
    }
}
