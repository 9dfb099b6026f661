//! Owned interleaved 8-bit pixel buffer.
//!
//! Samples are indexed by `(x, y, c)` where `c` is the color channel,
//! stored row-major with interleaved channels:
//! `index = (y * width + x) * channels + c`.

/// Owned 8-bit sample buffer with fixed width, height and channel count.
///
/// Dimensions are set at construction and never change; the flat data
/// length is always `width * height * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer with the given extents.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![0u8; width * height * channels],
        }
    }

    /// Wrap raw interleaved samples, checking the length against the extents.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, String> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(format!(
                "Buffer length mismatch: {}x{}x{} needs {expected} samples, got {}",
                width,
                height,
                channels,
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of interleaved color channels (3 for RGB, 4 for RGBA)
    pub fn channels(&self) -> usize {
        self.channels
    }

    fn index(&self, x: usize, y: usize, c: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && c < self.channels);
        (y * self.width + x) * self.channels + c
    }

    /// Read the sample at `(x, y, c)`.
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[self.index(x, y, c)]
    }

    /// Write the sample at `(x, y, c)`.
    pub fn set(&mut self, x: usize, y: usize, c: usize, value: u8) {
        let idx = self.index(x, y, c);
        self.data[idx] = value;
    }

    /// Flat view of all samples in storage order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable flat view of all samples in storage order.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the raw samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
