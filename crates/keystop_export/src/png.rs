//! PNG bytes and `data:` URLs

use std::io::Cursor;

use base64::Engine;
use image::{ImageFormat, RgbaImage};
use keystop_core::Gradient;

use crate::error::{ExportError, Result};
use crate::render::render;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// PNG-encode an image
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyImage { width, height });
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Wrap PNG bytes as a `data:image/png;base64,` URL
pub fn png_data_url(png: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    format!("{}{}", DATA_URL_PREFIX, encoded)
}

/// Render, encode and wrap a gradient in one go
pub fn data_url(gradient: &Gradient) -> Result<String> {
    let png = encode_png(&render(gradient)?)?;
    Ok(png_data_url(&png))
}
