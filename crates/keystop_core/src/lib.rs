//! Keystop Core
//!
//! Gradient composition and sampling engine for a linear gradient editor.
//! Color and opacity are driven by two independent stop lists, so color
//! keystops and alpha keystops can sit at different positions.
//!
//! # Pipeline
//!
//! - [`StopList`]: ordered-on-demand stops of one channel
//! - [`Ramp`]: linear interpolation between bracketing stops, clamped at the ends
//! - [`Compositor`]: color ramp + alpha ramp into one [`Rgba`] sample
//! - [`sample`]: one sample per pixel along the gradient's axis
//! - [`encode`]: text output in one of several [`Format`]s
//!
//! # Example
//!
//! ```
//! use keystop_core::{encode, sample, Format, Gradient, Rgb};
//!
//! let gradient = Gradient::two(Rgb::WHITE, Rgb::BLACK).with_size(4, 1);
//! let samples = sample(&gradient).unwrap();
//! assert_eq!(samples[1].r, 170);
//!
//! let text = encode(&samples, Format::PackedHexWord);
//! assert!(text.starts_with("[\n  0xffffffff,"));
//! ```

pub mod color;
pub mod composite;
pub mod edit;
pub mod encode;
pub mod error;
pub mod gradient;
pub mod interpolate;
pub mod sample;
pub mod session;
pub mod snapshot;
pub mod stop;

pub use color::{css_rgba, Rgb, Rgba};
pub use composite::{composite, Compositor};
pub use edit::Edit;
pub use encode::{encode, Format};
pub use error::{ChannelKind, GradientError, Result};
pub use gradient::{check_size, Axis, Gradient, DEFAULT_SIZE, MAX_DIMENSION, SIZES};
pub use interpolate::{interpolate, Ramp};
pub use sample::sample;
pub use session::Session;
pub use snapshot::{AlphaStopRecord, ColorStopRecord, GradientSnapshot};
pub use stop::{AlphaStops, ChannelValue, ColorStops, Stop, StopList};
