//! Text encoders for a sampled pixel sequence
//!
//! Every format wraps its entries as `[\n  <e0>,\n  <e1> \n]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::GradientError;

/// Output format for [`encode`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// `0xrrggbbaa`
    #[default]
    #[serde(rename = "hex", alias = "PackedHexWord")]
    PackedHexWord,
    /// `'#rrggbbaa'`
    #[serde(rename = "hex-string", alias = "HexColorString")]
    HexColorString,
    /// `[r,g,b,a]`
    #[serde(rename = "tuple", alias = "NumericTuple")]
    NumericTuple,
    /// `'rgba(r,g,b,a)'` with the alpha left as a 0-255 byte
    #[serde(rename = "css", alias = "CssRgba")]
    CssRgba,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::PackedHexWord,
        Format::HexColorString,
        Format::NumericTuple,
        Format::CssRgba,
    ];

    /// Short name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            Format::PackedHexWord => "hex",
            Format::HexColorString => "hex-string",
            Format::NumericTuple => "tuple",
            Format::CssRgba => "css",
        }
    }

    /// Text for a single pixel
    pub fn pixel(self, px: Rgba) -> String {
        let Rgba { r, g, b, a } = px;
        match self {
            Format::PackedHexWord => format!("0x{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            Format::HexColorString => format!("'#{:02x}{:02x}{:02x}{:02x}'", r, g, b, a),
            Format::NumericTuple => format!("[{},{},{},{}]", r, g, b, a),
            // Raw alpha byte, not a CSS [0, 1] alpha
            Format::CssRgba => format!("'rgba({},{},{},{})'", r, g, b, a),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" | "PackedHexWord" => Ok(Format::PackedHexWord),
            "hex-string" | "HexColorString" => Ok(Format::HexColorString),
            "tuple" | "NumericTuple" => Ok(Format::NumericTuple),
            "css" | "CssRgba" => Ok(Format::CssRgba),
            other => Err(GradientError::UnknownFormat(other.to_string())),
        }
    }
}

/// Encode a sampled sequence as text
pub fn encode(samples: &[Rgba], format: Format) -> String {
    let body = samples
        .iter()
        .map(|&px| format.pixel(px))
        .collect::<Vec<_>>()
        .join(",\n  ");
    format!("[\n  {} \n]", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PX: Rgba = Rgba::new(255, 0, 128, 64);

    #[test]
    fn test_single_pixel_shapes() {
        assert_eq!(encode(&[PX], Format::PackedHexWord), "[\n  0xff008040 \n]");
        assert_eq!(encode(&[PX], Format::NumericTuple), "[\n  [255,0,128,64] \n]");
        assert_eq!(encode(&[PX], Format::HexColorString), "[\n  '#ff008040' \n]");
        assert_eq!(encode(&[PX], Format::CssRgba), "[\n  'rgba(255,0,128,64)' \n]");
    }

    #[test]
    fn test_hex_zero_padding() {
        let px = Rgba::new(1, 0, 15, 10);
        assert_eq!(Format::PackedHexWord.pixel(px), "0x01000f0a");
        assert_eq!(Format::HexColorString.pixel(px), "'#01000f0a'");
    }

    #[test]
    fn test_join() {
        let text = encode(&[PX, Rgba::TRANSPARENT], Format::NumericTuple);
        assert_eq!(text, "[\n  [255,0,128,64],\n  [0,0,0,0] \n]");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(encode(&[], Format::PackedHexWord), "[\n   \n]");
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert_eq!("CssRgba".parse::<Format>().unwrap(), Format::CssRgba);
        assert!("png".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(
            serde_json::to_string(&Format::HexColorString).unwrap(),
            "\"hex-string\""
        );
        let f: Format = serde_json::from_str("\"tuple\"").unwrap();
        assert_eq!(f, Format::NumericTuple);
    }
}
