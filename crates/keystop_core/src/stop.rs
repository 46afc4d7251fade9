//! Stops and stop lists
//!
//! A [`StopList`] holds the keystops of one channel. Lists are kept in
//! insertion order; sorting happens on demand when a channel is interpolated,
//! so stops that share a position keep their relative order.

use smallvec::SmallVec;

use crate::color::Rgb;
use crate::error::{ChannelKind, GradientError, Result};

/// A value that can be carried by a stop and blended between two stops
pub trait ChannelValue: Copy + PartialEq + std::fmt::Debug {
    /// Which channel this value type belongs to
    const CHANNEL: ChannelKind;

    /// Linear blend, `t` in [0, 1]
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl ChannelValue for Rgb {
    const CHANNEL: ChannelKind = ChannelKind::Color;

    /// Per component, in sRGB byte space
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        Rgb::new(
            lerp_byte(a.r, b.r, t),
            lerp_byte(a.g, b.g, t),
            lerp_byte(a.b, b.b, t),
        )
    }
}

impl ChannelValue for f32 {
    const CHANNEL: ChannelKind = ChannelKind::Alpha;

    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

fn lerp_byte(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// A (position, value) anchor along a channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop<V> {
    /// Position along the gradient (0.0 to 1.0)
    pub position: f32,
    pub value: V,
}

impl<V: ChannelValue> Stop<V> {
    /// Create a stop, clamping the position into [0, 1] (NaN becomes 0)
    pub fn new(position: f32, value: V) -> Self {
        Self {
            position: clamp_position(position),
            value,
        }
    }

    /// Create a stop, rejecting positions outside [0, 1]
    pub fn try_new(position: f32, value: V) -> Result<Self> {
        check_unit("position", position)?;
        Ok(Self { position, value })
    }
}

impl Stop<f32> {
    /// Create an alpha stop, rejecting a position or opacity outside [0, 1]
    pub fn try_opacity(position: f32, opacity: f32) -> Result<Self> {
        check_unit("opacity", opacity)?;
        Self::try_new(position, opacity)
    }
}

pub(crate) fn clamp_position(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

pub(crate) fn check_unit(what: &str, v: f32) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(GradientError::InvalidStop(format!(
            "{} {} is outside [0, 1]",
            what, v
        )))
    }
}

/// Ordered-on-demand stops of a single channel
#[derive(Clone, Debug, PartialEq)]
pub struct StopList<V> {
    stops: SmallVec<[Stop<V>; 4]>,
}

/// Color channel stops
pub type ColorStops = StopList<Rgb>;

/// Alpha channel stops, opacity in [0, 1]
pub type AlphaStops = StopList<f32>;

impl<V: ChannelValue> StopList<V> {
    /// Create a list from stops in insertion order. May be empty; an empty
    /// list only fails once it is interpolated.
    pub fn new(stops: impl IntoIterator<Item = Stop<V>>) -> Self {
        Self {
            stops: stops.into_iter().collect(),
        }
    }

    /// Two stops at 0 and 1
    pub fn two(from: V, to: V) -> Self {
        Self::new([Stop::new(0.0, from), Stop::new(1.0, to)])
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stop<V>> {
        self.stops.get(index)
    }

    /// Stops in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Stop<V>> {
        self.stops.iter()
    }

    /// Append a stop; returns its index
    pub fn push(&mut self, stop: Stop<V>) -> usize {
        self.stops.push(stop);
        self.stops.len() - 1
    }

    /// Remove a stop. The last remaining stop cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Stop<V>> {
        self.check_index(index)?;
        if self.stops.len() == 1 {
            return Err(GradientError::InvalidState(format!(
                "cannot remove the last {} stop",
                V::CHANNEL
            )));
        }
        Ok(self.stops.remove(index))
    }

    /// Move a stop; the position is clamped into [0, 1]
    pub fn set_position(&mut self, index: usize, position: f32) -> Result<()> {
        self.check_index(index)?;
        self.stops[index].position = clamp_position(position);
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: V) -> Result<()> {
        self.check_index(index)?;
        self.stops[index].value = value;
        Ok(())
    }

    /// Stops sorted by position; ties keep insertion order
    pub fn sorted(&self) -> SmallVec<[Stop<V>; 4]> {
        let mut sorted = self.stops.clone();
        // slice::sort_by is stable
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        sorted
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(GradientError::StopIndex {
                channel: V::CHANNEL,
                index,
                len: self.stops.len(),
            })
        }
    }
}

impl Default for ColorStops {
    fn default() -> Self {
        Self::two(Rgb::WHITE, Rgb::BLACK)
    }
}

impl Default for AlphaStops {
    fn default() -> Self {
        Self::two(1.0, 1.0)
    }
}

impl<V: ChannelValue> FromIterator<Stop<V>> for StopList<V> {
    fn from_iter<I: IntoIterator<Item = Stop<V>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
