//! Filter passes over an RGBA pixel buffer.
//!
//! Every filter is a deterministic, CPU-only pass that runs to completion or
//! fails before touching a pixel. Two execution disciplines exist:
//!
//! - **In-place, order-dependent** - [`blur`] and [`pixelate`] read neighbor
//!   state already mutated earlier in the same pass. Their iteration order
//!   (outer loop over x, inner over y, writes visible to later reads) is part
//!   of the contract and must not be reordered or parallelized.
//! - **Snapshot-based** - [`convolve`] computes every destination pixel from
//!   a read-only copy of the source and never observes partial updates, so
//!   destination rows may be partitioned across workers.
//!
//! Alpha handling varies by filter and is documented per module: the
//! per-pixel filters leave alpha untouched, blur restores each destination
//! pixel's own alpha, convolution forces alpha to opaque.

pub mod blur;
pub mod color;
pub mod convolve;
pub mod greyscale;
pub mod pixelate;
pub mod region;
