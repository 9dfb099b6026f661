//! Pointwise brightness transform.
//!
//! Every output sample depends only on the input sample at the same
//! `(x, y, c)` coordinate, so the whole stage is a pure function applied
//! uniformly over the buffer, with an optional row-parallel variant.

use crate::buffer::PixelBuffer;
use rayon::prelude::*;

/// Default brightening factor.
pub const DEFAULT_FACTOR: f32 = 1.5;

/// Brighten a single 8-bit sample.
///
/// Widens to `f32`, multiplies by `factor`, clamps above at 255.0 and
/// narrows back with a truncating cast. The clamp must precede the cast:
/// reordering would change results at the 255 boundary. Total over all
/// inputs; no lower clamp is needed because samples are non-negative.
pub fn brighten_sample(value: u8, factor: f32) -> u8 {
    (value as f32 * factor).min(255.0) as u8
}

/// Brighten every sample of `input` into a freshly allocated buffer
/// with identical extents.
pub fn brighten(input: &PixelBuffer, factor: f32) -> PixelBuffer {
    let mut output = PixelBuffer::new(input.width(), input.height(), input.channels());
    for (dst, &src) in output.data_mut().iter_mut().zip(input.data()) {
        *dst = brighten_sample(src, factor);
    }
    output
}

/// Row-parallel version of [`brighten`].
///
/// Workers read the input immutably and each writes a disjoint output
/// row, so no synchronization is needed beyond the implicit join.
/// Produces byte-identical results to the sequential path.
pub fn brighten_parallel(input: &PixelBuffer, factor: f32) -> PixelBuffer {
    let mut output = PixelBuffer::new(input.width(), input.height(), input.channels());
    let row_len = input.width() * input.channels();
    if row_len == 0 {
        return output;
    }
    output
        .data_mut()
        .par_chunks_mut(row_len)
        .zip(input.data().par_chunks(row_len))
        .for_each(|(out_row, in_row)| {
            for (dst, &src) in out_row.iter_mut().zip(in_row) {
                *dst = brighten_sample(src, factor);
            }
        });
    output
}
