//! Two-channel compositing
//!
//! A browser canvas gets decoupled color and opacity by painting the alpha
//! ramp first and then the color ramp with `source-out`, which keeps the
//! source color and takes coverage from the destination. The numeric
//! equivalent is simply: color from the color ramp, alpha from the alpha ramp.

use crate::color::{opacity_to_byte, Rgb, Rgba};
use crate::error::Result;
use crate::interpolate::Ramp;
use crate::stop::{AlphaStops, ColorStops};

/// Sorted color and alpha ramps, ready for repeated compositing
#[derive(Clone, Debug)]
pub struct Compositor {
    color: Ramp<Rgb>,
    alpha: Ramp<f32>,
}

impl Compositor {
    pub fn new(color: &ColorStops, alpha: &AlphaStops) -> Result<Self> {
        Ok(Self {
            color: Ramp::new(color)?,
            alpha: Ramp::new(alpha)?,
        })
    }

    /// RGBA sample at `t`
    pub fn at(&self, t: f32) -> Rgba {
        let rgb = self.color.at(t);
        let opacity = self.alpha.at(t);
        rgb.with_alpha(opacity_to_byte(opacity))
    }
}

/// Composite both channels at a single position
pub fn composite(color: &ColorStops, alpha: &AlphaStops, t: f32) -> Result<Rgba> {
    Ok(Compositor::new(color, alpha)?.at(t))
}
