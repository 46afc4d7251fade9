//! Channel interpolation
//!
//! Evaluating a channel at `t`:
//!
//! - at or past the last stop: the last stop's value
//! - at or before the first stop: the first stop's value
//! - otherwise: a linear blend between the bracketing stops, where the lower
//!   stop is the *last* one positioned at or before `t`
//!
//! The last-edge check runs first and the lower bracket is the last stop at or
//! before `t`, so among stops sharing a position the later one wins.

use smallvec::SmallVec;

use crate::error::{GradientError, Result};
use crate::stop::{ChannelValue, Stop, StopList};

/// A stop list sorted once for repeated evaluation
#[derive(Clone, Debug)]
pub struct Ramp<V> {
    stops: SmallVec<[Stop<V>; 4]>,
}

impl<V: ChannelValue> Ramp<V> {
    /// Sort `stops` for evaluation. Fails on an empty list.
    pub fn new(stops: &StopList<V>) -> Result<Self> {
        if stops.is_empty() {
            return Err(GradientError::InvalidState(format!(
                "cannot interpolate an empty {} stop list",
                V::CHANNEL
            )));
        }
        Ok(Self {
            stops: stops.sorted(),
        })
    }

    /// Channel value at `t`. NaN is treated as 0.
    pub fn at(&self, t: f32) -> V {
        let t = if t.is_nan() { 0.0 } else { t };
        let stops = &self.stops[..];
        // Non-empty by construction
        let first = stops[0];
        let last = stops[stops.len() - 1];

        if t >= last.position {
            return last.value;
        }
        if t <= first.position {
            return first.value;
        }

        // first.position < t < last.position, so 1 <= lower_count < len
        let lower_count = stops.partition_point(|s| s.position <= t);
        let lo = stops[lower_count - 1];
        let hi = stops[lower_count];

        let span = hi.position - lo.position;
        if span <= 0.0 {
            return hi.value;
        }
        V::lerp(lo.value, hi.value, (t - lo.position) / span)
    }
}

/// Evaluate one channel at `t`. Sorts on every call; use [`Ramp`] to
/// evaluate many positions.
pub fn interpolate<V: ChannelValue>(stops: &StopList<V>, t: f32) -> Result<V> {
    Ok(Ramp::new(stops)?.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::stop::{AlphaStops, ColorStops};

    fn alpha(stops: &[(f32, f32)]) -> AlphaStops {
        stops.iter().map(|&(p, v)| Stop::new(p, v)).collect()
    }

    #[test]
    fn test_empty_list_is_invalid_state() {
        let empty = AlphaStops::new([]);
        assert!(matches!(
            interpolate(&empty, 0.5),
            Err(GradientError::InvalidState(_))
        ));
    }

    #[test]
    fn test_single_stop_is_constant() {
        let list = alpha(&[(0.3, 0.7)]);
        for t in [0.0, 0.3, 0.9, 1.0] {
            assert_eq!(interpolate(&list, t).unwrap(), 0.7);
        }
    }

    #[test]
    fn test_edge_clamp() {
        let list: ColorStops = [
            Stop::new(0.0, Rgb::RED),
            Stop::new(0.4, Rgb::GREEN),
            Stop::new(1.0, Rgb::BLUE),
        ]
        .into_iter()
        .collect();
        assert_eq!(interpolate(&list, 0.0).unwrap(), Rgb::RED);
        assert_eq!(interpolate(&list, 1.0).unwrap(), Rgb::BLUE);
    }

    #[test]
    fn test_clamps_outside_stop_range() {
        let list = alpha(&[(0.25, 0.2), (0.75, 0.8)]);
        assert_eq!(interpolate(&list, 0.0).unwrap(), 0.2);
        assert_eq!(interpolate(&list, 0.1).unwrap(), 0.2);
        assert_eq!(interpolate(&list, 0.9).unwrap(), 0.8);
        assert_eq!(interpolate(&list, 1.0).unwrap(), 0.8);
    }

    #[test]
    fn test_midpoint_is_mean() {
        let list = alpha(&[(0.2, 0.0), (0.6, 1.0)]);
        let v = interpolate(&list, 0.4).unwrap();
        assert!((v - 0.5).abs() < 1e-6);

        let colors = ColorStops::two(Rgb::new(0, 40, 200), Rgb::new(100, 0, 100));
        assert_eq!(interpolate(&colors, 0.5).unwrap(), Rgb::new(50, 20, 150));
    }

    #[test]
    fn test_unsorted_input() {
        let list = alpha(&[(1.0, 1.0), (0.0, 0.0)]);
        let v = interpolate(&list, 0.25).unwrap();
        assert!((v - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_position_later_wins() {
        let list = alpha(&[(0.5, 0.1), (0.5, 0.9)]);
        assert_eq!(interpolate(&list, 0.5).unwrap(), 0.9);

        let list = alpha(&[(0.0, 0.0), (0.5, 0.1), (0.5, 0.9), (1.0, 1.0)]);
        assert_eq!(interpolate(&list, 0.5).unwrap(), 0.9);
        // Hard edge on either side
        assert!((interpolate(&list, 0.25).unwrap() - 0.05).abs() < 1e-6);
        assert!((interpolate(&list, 0.75).unwrap() - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_nan_position_is_start() {
        let list = alpha(&[(0.0, 0.25), (1.0, 0.75)]);
        assert_eq!(interpolate(&list, f32::NAN).unwrap(), 0.25);
    }

    #[test]
    fn test_ramp_matches_interpolate() {
        let list = alpha(&[(0.0, 0.0), (0.3, 1.0), (1.0, 0.5)]);
        let ramp = Ramp::new(&list).unwrap();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_eq!(ramp.at(t), interpolate(&list, t).unwrap());
        }
    }
}
