//! Painting a sampled gradient onto a canvas-sized image

use image::{ImageBuffer, Rgba as Pixel, RgbaImage};
use keystop_core::{check_size, sample, Axis, Gradient, Rgba};
use tracing::debug;

use crate::error::Result;

/// Sample the gradient and fill a `width` x `height` image with it. Each
/// column (horizontal axis) or row (vertical axis) takes one sample.
/// Canvases larger than [`keystop_core::MAX_DIMENSION`] are rejected before
/// anything is allocated.
pub fn render(gradient: &Gradient) -> Result<RgbaImage> {
    check_size(gradient.width, gradient.height)?;
    let samples = sample(gradient)?;
    Ok(paint(&samples, gradient.axis, gradient.width, gradient.height))
}

/// Fill an image from samples already taken along `axis`
pub fn paint(samples: &[Rgba], axis: Axis, width: u32, height: u32) -> RgbaImage {
    debug!(width, height, ?axis, "painting gradient");
    ImageBuffer::from_fn(width, height, |x, y| {
        let i = match axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        };
        Pixel(samples.get(i as usize).copied().unwrap_or(Rgba::TRANSPARENT).to_array())
    })
}
