//! Image brightening utility - library crate.
//!
//! Provides the pixel buffer, the pointwise brightness transform and the
//! decode -> transform -> encode pipeline for use by the command-line binary.

pub mod buffer;
pub mod image_io;
pub mod pipeline;
pub mod transform;
