//! RGBA color (linear space)

use thiserror::Error;

/// Error parsing a CSS-style hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Expected `#rgb`, `#rrggbb`, or `#rrggbbaa`
    #[error("hex color must have 3, 6, or 8 digits: {0:?}")]
    InvalidLength(String),

    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from a packed hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a CSS hex string: `#rgb`, `#rrggbb`, or `#rrggbbaa`
    ///
    /// The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_ascii() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        match digits.len() {
            3 => {
                let nibble = |i: usize| byte(i..i + 1).map(|v| v * 16 + v);
                Ok(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255))
            }
            6 => Ok(Self::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }

    /// Render as a lowercase CSS hex string (`#rrggbb`, or `#rrggbbaa` when
    /// alpha is not fully opaque)
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to u8 array [r, g, b, a], rounding to the nearest step
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c = Color::parse_hex("#00f2ff").unwrap();
        assert_eq!(c.to_rgba8(), [0x00, 0xf2, 0xff, 0xff]);
        assert_eq!(c.to_hex_string(), "#00f2ff");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(
            Color::parse_hex("334155").unwrap(),
            Color::parse_hex("#334155").unwrap()
        );
    }

    #[test]
    fn test_parse_short_form_expands() {
        let c = Color::parse_hex("#f80").unwrap();
        assert_eq!(c.to_rgba8(), [0xff, 0x88, 0x00, 0xff]);
    }

    #[test]
    fn test_parse_with_alpha() {
        let c = Color::parse_hex("#10b98180").unwrap();
        assert_eq!(c.to_rgba8(), [0x10, 0xb9, 0x81, 0x80]);
        assert_eq!(c.to_hex_string(), "#10b98180");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#00f2ЯЯ"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        for hex in ["#00f2ff", "#10b981", "#a855f7", "#f97316", "#0c1214", "#000000"] {
            let c = Color::parse_hex(hex).unwrap();
            assert_eq!(c.to_hex_string(), hex, "round trip failed for {hex}");
        }
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::parse_hex("#00f2ff").unwrap();
        let b = Color::parse_hex("#10b981").unwrap();
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn test_from_hex_packed() {
        assert_eq!(Color::from_hex(0x00F2FF), Color::parse_hex("#00f2ff").unwrap());
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.4);
        assert_eq!(c.a, 0.4);
        assert_eq!(c.r, 1.0);
    }
}
