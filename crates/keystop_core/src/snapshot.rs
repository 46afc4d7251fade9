//! JSON snapshots of a gradient
//!
//! The persisted shape is
//!
//! ```json
//! {
//!   "width": 128,
//!   "height": 128,
//!   "horizontal": true,
//!   "color": [{ "value": "#ffffff", "stop": 0.0 }, { "value": "#000000", "stop": 1.0 }],
//!   "alpha": [{ "value": 1.0, "stop": 0.0 }, { "value": 1.0, "stop": 1.0 }]
//! }
//! ```
//!
//! Stops are stored in insertion order.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{GradientError, Result};
use crate::gradient::{check_size, Axis, Gradient};
use crate::stop::{AlphaStops, ColorStops, Stop};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStopRecord {
    pub value: String,
    pub stop: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlphaStopRecord {
    pub value: f32,
    pub stop: f32,
}

/// Serializable form of a [`Gradient`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSnapshot {
    pub width: u32,
    pub height: u32,
    pub horizontal: bool,
    pub color: Vec<ColorStopRecord>,
    pub alpha: Vec<AlphaStopRecord>,
}

impl GradientSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON, two-space indent
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Gradient> for GradientSnapshot {
    fn from(gradient: &Gradient) -> Self {
        Self {
            width: gradient.width,
            height: gradient.height,
            horizontal: gradient.axis.is_horizontal(),
            color: gradient
                .color
                .iter()
                .map(|s| ColorStopRecord {
                    value: s.value.to_hex_string(),
                    stop: s.position,
                })
                .collect(),
            alpha: gradient
                .alpha
                .iter()
                .map(|s| AlphaStopRecord {
                    value: s.value,
                    stop: s.position,
                })
                .collect(),
        }
    }
}

impl TryFrom<GradientSnapshot> for Gradient {
    type Error = GradientError;

    /// Validates the canvas size and every stop; positions and opacities
    /// must already be in [0, 1] and neither list may be empty
    fn try_from(snapshot: GradientSnapshot) -> Result<Self> {
        check_size(snapshot.width, snapshot.height)?;
        if snapshot.color.is_empty() || snapshot.alpha.is_empty() {
            return Err(GradientError::InvalidState(
                "snapshot must contain at least one color and one alpha stop".to_string(),
            ));
        }

        let color = snapshot
            .color
            .iter()
            .map(|r| Stop::try_new(r.stop, Rgb::from_hex_str(&r.value)?))
            .collect::<Result<Vec<_>>>()?;
        let alpha = snapshot
            .alpha
            .iter()
            .map(|r| Stop::try_opacity(r.stop, r.value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Gradient {
            color: ColorStops::new(color),
            alpha: AlphaStops::new(alpha),
            axis: Axis::from_horizontal(snapshot.horizontal),
            width: snapshot.width,
            height: snapshot.height,
        })
    }
}

impl Gradient {
    /// Parse a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        GradientSnapshot::from_json(json)?.try_into()
    }

    /// Pretty JSON snapshot
    pub fn to_json(&self) -> Result<String> {
        GradientSnapshot::from(self).to_json()
    }
}
