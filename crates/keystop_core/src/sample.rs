//! Sampling a gradient into a pixel sequence

use tracing::debug;

use crate::color::Rgba;
use crate::composite::Compositor;
use crate::error::Result;
use crate::gradient::Gradient;

/// Sample the gradient at `axis_length` evenly spaced positions.
///
/// Both stop lists are checked before anything else, so an empty list fails
/// even for a zero-length axis. A zero-length axis yields no samples.
pub fn sample(gradient: &Gradient) -> Result<Vec<Rgba>> {
    let compositor = Compositor::new(&gradient.color, &gradient.alpha)?;
    let length = gradient.axis_length();

    let samples = match length {
        0 => Vec::new(),
        1 => vec![compositor.at(0.0)],
        _ => {
            let last = (length - 1) as f32;
            (0..length).map(|i| compositor.at(i as f32 / last)).collect()
        }
    };

    debug!(
        length,
        color_stops = gradient.color.len(),
        alpha_stops = gradient.alpha.len(),
        "resampled gradient"
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::composite::composite;
    use crate::error::GradientError;
    use crate::gradient::Axis;
    use crate::stop::{AlphaStops, ColorStops, Stop};

    #[test]
    fn test_white_to_black_four_samples() {
        let g = Gradient::two(Rgb::WHITE, Rgb::BLACK).with_size(4, 1);
        let samples = sample(&g).unwrap();

        assert_eq!(
            samples,
            vec![
                Rgba::new(255, 255, 255, 255),
                Rgba::new(170, 170, 170, 255),
                Rgba::new(85, 85, 85, 255),
                Rgba::new(0, 0, 0, 255),
            ]
        );
        assert!(samples.windows(2).all(|w| w[0].r > w[1].r));
    }

    #[test]
    fn test_length_follows_axis() {
        let g = Gradient::default().with_size(16, 64);
        assert_eq!(sample(&g).unwrap().len(), 16);
        let g = g.with_axis(Axis::Vertical);
        assert_eq!(sample(&g).unwrap().len(), 64);
    }

    #[test]
    fn test_single_sample_is_start() {
        let color: ColorStops = [Stop::new(0.0, Rgb::RED), Stop::new(1.0, Rgb::BLUE)]
            .into_iter()
            .collect();
        let alpha = AlphaStops::two(0.2, 0.9);
        let g = Gradient::new(color.clone(), alpha.clone()).with_size(1, 1);

        let samples = sample(&g).unwrap();
        assert_eq!(samples, vec![composite(&color, &alpha, 0.0).unwrap()]);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let g = Gradient::default().with_size(0, 10);
        assert!(sample(&g).unwrap().is_empty());
    }

    #[test]
    fn test_empty_list_aborts() {
        let mut g = Gradient::default();
        g.color = ColorStops::new([]);
        assert!(matches!(sample(&g), Err(GradientError::InvalidState(_))));
    }

    #[test]
    fn test_idempotent() {
        let g = Gradient::new(
            [
                Stop::new(0.3, Rgb::new(12, 200, 7)),
                Stop::new(0.0, Rgb::BLUE),
                Stop::new(0.8, Rgb::WHITE),
            ]
            .into_iter()
            .collect(),
            [Stop::new(0.1, 0.0), Stop::new(0.9, 1.0)].into_iter().collect(),
        )
        .with_size(37, 3);
        assert_eq!(sample(&g).unwrap(), sample(&g).unwrap());
    }

    #[test]
    fn test_channel_independence() {
        let base = Gradient::new(
            [Stop::new(0.0, Rgb::RED), Stop::new(0.6, Rgb::new(10, 220, 90))]
                .into_iter()
                .collect(),
            [Stop::new(0.2, 1.0), Stop::new(1.0, 0.1)].into_iter().collect(),
        )
        .with_size(25, 1);
        let before = sample(&base).unwrap();

        let mut alpha_changed = base.clone();
        alpha_changed.alpha = [Stop::new(0.5, 0.3), Stop::new(0.7, 0.0), Stop::new(0.0, 0.9)]
            .into_iter()
            .collect();
        let after = sample(&alpha_changed).unwrap();
        assert!(before.iter().zip(&after).all(|(a, b)| a.rgb() == b.rgb()));

        let mut color_changed = base.clone();
        color_changed.color = ColorStops::two(Rgb::BLACK, Rgb::WHITE);
        let after = sample(&color_changed).unwrap();
        assert!(before.iter().zip(&after).all(|(a, b)| a.a == b.a));
    }
}
