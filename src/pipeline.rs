use crate::buffer::PixelBuffer;
use crate::image_io;
use crate::transform;
use std::path::Path;

/// All pipeline parameters controlled by the user.
#[derive(Debug, Clone)]
pub struct BrightenParams {
    /// Multiplier applied to every sample before the 255 clamp.
    pub factor: f32,
    /// Apply the transform row-parallel instead of sequentially.
    pub parallel: bool,
}

impl Default for BrightenParams {
    fn default() -> Self {
        Self {
            factor: transform::DEFAULT_FACTOR,
            parallel: false,
        }
    }
}

/// Run the brightness transform on a decoded buffer.
///
/// Returns a freshly allocated output buffer whose width, height and
/// channel count exactly match the input's.
pub fn process(input: &PixelBuffer, params: &BrightenParams) -> PixelBuffer {
    if params.parallel {
        transform::brighten_parallel(input, params.factor)
    } else {
        transform::brighten(input, params.factor)
    }
}

/// Run the full pipeline: decode -> transform -> encode.
///
/// The first failing stage aborts the run; there is no retry and no
/// partial output.
pub fn run(input_path: &Path, output_path: &Path, params: &BrightenParams) -> Result<(), String> {
    let input = image_io::load_image(input_path)?;
    log::info!(
        "Loaded {}: {}x{}, {} channels",
        input_path.display(),
        input.width(),
        input.height(),
        input.channels()
    );

    let output = process(&input, params);
    debug_assert_eq!(
        (output.width(), output.height(), output.channels()),
        (input.width(), input.height(), input.channels())
    );

    image_io::save_image(&output, output_path)?;
    log::info!("Wrote {}", output_path.display());
    Ok(())
}
