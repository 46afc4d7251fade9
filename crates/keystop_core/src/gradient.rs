//! The gradient aggregate: two independent stop lists, an axis and a canvas size

use crate::color::Rgb;
use crate::error::{GradientError, Result};
use crate::stop::{AlphaStops, ColorStops};

/// Canvas size presets offered by the editor
pub const SIZES: [u32; 7] = [4, 8, 16, 32, 64, 128, 256];

/// Default canvas width and height
pub const DEFAULT_SIZE: u32 = 128;

/// Largest accepted canvas width or height
pub const MAX_DIMENSION: u32 = 4096;

/// Reject a canvas larger than [`MAX_DIMENSION`] on either side. Zero is
/// allowed.
pub fn check_size(width: u32, height: u32) -> Result<()> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GradientError::Dimension {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Direction the gradient runs along
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Axis::Horizontal
    }

    pub fn toggled(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Linear gradient with decoupled color and alpha stops
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub color: ColorStops,
    pub alpha: AlphaStops,
    pub axis: Axis,
    pub width: u32,
    pub height: u32,
}

impl Default for Gradient {
    /// White to black, fully opaque, 128x128, horizontal
    fn default() -> Self {
        Self {
            color: ColorStops::default(),
            alpha: AlphaStops::default(),
            axis: Axis::Horizontal,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl Gradient {
    pub fn new(color: ColorStops, alpha: AlphaStops) -> Self {
        Self {
            color,
            alpha,
            ..Self::default()
        }
    }

    /// Two-color, fully opaque gradient
    pub fn two(from: Rgb, to: Rgb) -> Self {
        Self::new(ColorStops::two(from, to), AlphaStops::default())
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Number of samples along the active axis
    pub fn axis_length(&self) -> u32 {
        match self.axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Stop position of a pixel along the active axis
    pub fn position_at(&self, pixel: u32) -> f32 {
        let length = self.axis_length();
        if length <= 1 {
            return 0.0;
        }
        (pixel as f32 / (length - 1) as f32).clamp(0.0, 1.0)
    }
}
