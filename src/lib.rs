//! Fuzzy pixel-buffer filter engine.
//!
//! Deterministic, stateless image filters over an in-memory RGBA buffer:
//! channel isolation, inversion, greyscale, pixelation, box/motion blur and
//! general 3x3 convolution with a catalog of named kernels.
//!
//! ## Image Format
//!
//! One format only: RGBA, 8 bits per channel, stored as an
//! `ndarray::Array3<u8>` of shape `(height, width, 4)`. The flat byte view
//! is row-major - pixel `(x, y)` lives at `(x + y*width)*4` - so canvas
//! `ImageData`-style sources map straight onto a [`PixelBuffer`].
//!
//! ## Architecture
//!
//! - [`buffer`] - the owned pixel grid plus the `Pixel`/`Dimension` value
//!   types with clamped construction
//! - [`kernel`] - 3x3 convolution matrices and the named kernel catalog
//! - [`filters`] - the filter passes themselves, one module per family
//! - [`session`] - the fluent [`Fuzzy`] handle chaining filters over one
//!   exclusively owned buffer
//! - [`surface`] - adapter-side helpers: dimension negotiation, resampling
//!
//! Filters either mutate in place in a defined sequential order (blur,
//! pixelate) or run from a read-only snapshot (convolution); see the
//! [`filters`] module docs. Bad scalar parameters clamp or default instead
//! of failing; structural problems ([`FilterError`]) fail before any
//! mutation.

pub mod buffer;
pub mod error;
pub mod filters;
pub mod kernel;
pub mod session;
pub mod surface;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{Dimension, Pixel, PixelBuffer};
pub use error::FilterError;
pub use filters::blur::Direction;
pub use filters::color::ColorFilter;
pub use kernel::ConvolutionMatrix;
pub use session::Fuzzy;
