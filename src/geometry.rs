//! Geometric primitives.
//!
//! Curve points live in a surface-centered coordinate frame: the origin is
//! the middle of the drawing surface, established by the frame renderer's
//! translate before any stroking happens.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reflect the point about the vertical axis (negate x, keep y).
    #[must_use]
    pub const fn mirror_x(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_mirror_x() {
        let p = Point::new(2.5, -1.0);
        assert_eq!(p.mirror_x(), Point::new(-2.5, -1.0));
        assert_eq!(p.mirror_x().mirror_x(), p);
    }

    #[test]
    fn test_origin() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }
}
