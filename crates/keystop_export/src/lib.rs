//! Keystop Export
//!
//! Paints a sampled gradient into an RGBA image the size of the editor's
//! canvas, and turns it into PNG bytes or a `data:image/png;base64,` URL.
//!
//! # Example
//!
//! ```
//! use keystop_core::Gradient;
//!
//! let url = keystop_export::data_url(&Gradient::default().with_size(4, 4)).unwrap();
//! assert!(url.starts_with("data:image/png;base64,"));
//! ```

pub mod error;
pub mod png;
pub mod render;

pub use error::{ExportError, Result};
pub use png::{data_url, encode_png, png_data_url};
pub use render::{paint, render};
