//! Color values
//!
//! The color channel works on opaque sRGB bytes ([`Rgb`]); the sampler emits
//! [`Rgba`] pixels once the alpha channel has been composited in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradientError, Result};

/// Opaque sRGB color, one byte per component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse a strict `#RRGGBB` string (either case)
    pub fn from_hex_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| GradientError::InvalidStop(format!("'{}' is not a #RRGGBB color", s)))?;

        let hex = u32::from_str_radix(digits, 16)
            .map_err(|e| GradientError::InvalidStop(format!("'{}': {}", s, e)))?;
        Ok(Self::from_hex(hex))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// Convert from HSV: hue in degrees (wrapped into [0, 360)), saturation
    /// and value in [0, 1]
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(unit_to_byte(r + m), unit_to_byte(g + m), unit_to_byte(b + m))
    }

    /// Convert to HSV as `(hue_degrees, saturation, value)`
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        (h, s, max)
    }
}

impl FromStr for Rgb {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_str(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = GradientError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex_str(&s)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// A sampled pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// `0xRRGGBBAA`
    pub fn to_packed(&self) -> u32 {
        u32::from_be_bytes(self.to_array())
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// CSS `rgba()` with a fractional alpha, e.g. `rgba(255, 0, 255, 0.5)`
pub fn css_rgba(rgb: Rgb, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
}

/// Map an opacity in [0, 1] to a byte, rounding to nearest
pub fn opacity_to_byte(opacity: f32) -> u8 {
    unit_to_byte(opacity)
}

fn unit_to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_str() {
        assert_eq!(Rgb::from_hex_str("#ff0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_hex_str("#FF0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_rejects_non_strict() {
        for bad in ["ff0080", "#fff", "#ff00801", "#gg0000", "", "#", "#ff 080"] {
            assert!(
                matches!(Rgb::from_hex_str(bad), Err(GradientError::InvalidStop(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_hex_string_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(10, 0, 171).to_hex_string(), "#0a00ab");
        assert_eq!(Rgb::new(10, 0, 171).to_string(), "#0a00ab");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let rgb: Rgb = serde_json::from_str("\"#A0B0C0\"").unwrap();
        assert_eq!(rgb, Rgb::new(0xa0, 0xb0, 0xc0));
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }

    #[test]
    fn test_hsv_conversion() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::RED);
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0), Rgb::GREEN);
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0), Rgb::BLUE);
        assert_eq!(Rgb::from_hsv(360.0, 1.0, 1.0), Rgb::RED);
        assert_eq!(Rgb::from_hsv(42.0, 0.0, 1.0), Rgb::WHITE);

        let (h, s, v) = Rgb::BLUE.to_hsv();
        assert!((h - 240.0).abs() < 1e-3);
        assert_eq!((s, v), (1.0, 1.0));
        assert_eq!(Rgb::BLACK.to_hsv(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_packed() {
        assert_eq!(Rgba::new(255, 0, 128, 64).to_packed(), 0xff008040);
    }

    #[test]
    fn test_css_rgba() {
        assert_eq!(css_rgba(Rgb::new(255, 0, 255), 0.5), "rgba(255, 0, 255, 0.5)");
        assert_eq!(css_rgba(Rgb::WHITE, 1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_opacity_to_byte() {
        assert_eq!(opacity_to_byte(0.0), 0);
        assert_eq!(opacity_to_byte(1.0), 255);
        assert_eq!(opacity_to_byte(0.5), 128);
        assert_eq!(opacity_to_byte(2.0), 255);
    }
}
