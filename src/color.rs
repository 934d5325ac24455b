//! Color types and HSL to RGB conversion.
//!
//! The animation works in HSL space (a rotating hue with fixed saturation and
//! lightness) and converts to RGBA only at stroke time.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue (0.0-360.0 degrees; values outside are wrapped on conversion).
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Lightness (0.0-1.0).
    pub l: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Convert to RGBA using the chroma decomposition.
    ///
    /// Hue is wrapped into [0, 360); saturation and lightness are assumed to
    /// be in [0, 1].
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rgba_with_alpha() {
        let c = Rgba::rgb(10, 20, 30).with_alpha(128);
        assert_eq!(c, Rgba::new(10, 20, 30, 128));
    }

    #[test]
    fn test_rgba_array_round_trip() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }

    #[test]
    fn test_hsla_primaries() {
        let red = Hsla::hsl(0.0, 1.0, 0.5).to_rgba();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));

        let green = Hsla::hsl(120.0, 1.0, 0.5).to_rgba();
        assert_eq!((green.r, green.g, green.b), (0, 255, 0));

        let blue = Hsla::hsl(240.0, 1.0, 0.5).to_rgba();
        assert_eq!((blue.r, blue.g, blue.b), (0, 0, 255));
    }

    #[test]
    fn test_hsla_gray_when_desaturated() {
        let gray = Hsla::hsl(200.0, 0.0, 0.5).to_rgba();
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_hsla_secondary_sectors() {
        let cyan = Hsla::hsl(180.0, 1.0, 0.5).to_rgba();
        assert_eq!((cyan.r, cyan.g, cyan.b), (0, 255, 255));

        let magenta = Hsla::hsl(300.0, 1.0, 0.5).to_rgba();
        assert_eq!((magenta.r, magenta.g, magenta.b), (255, 0, 255));
    }

    #[test]
    fn test_hsla_hue_wraps() {
        let a = Hsla::hsl(30.0, 0.7, 0.6).to_rgba();
        let b = Hsla::hsl(390.0, 0.7, 0.6).to_rgba();
        let c = Hsla::hsl(-330.0, 0.7, 0.6).to_rgba();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_from_hsla_trait() {
        let rgba: Rgba = Hsla::hsl(0.0, 1.0, 0.5).into();
        assert_eq!(rgba.r, 255);
    }

    #[test]
    fn test_hsla_alpha_scales() {
        let half = Hsla::new(0.0, 1.0, 0.5, 0.5).to_rgba();
        assert_eq!(half.a, 128);
    }
}
