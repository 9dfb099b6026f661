use brighten::buffer::PixelBuffer;
use brighten::image_io;
use brighten::pipeline::{self, BrightenParams};
use brighten::transform;
use std::fs;
use std::path::PathBuf;

/// Fresh directory under the system temp dir, unique per test.
fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("brighten-{label}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn two_pixel_rgb_scenario() {
    // 2x1 pixels, 3 channels: (100, 50, 10) and (0, 255, 128)
    let input = PixelBuffer::from_raw(2, 1, 3, vec![100, 50, 10, 0, 255, 128]).unwrap();
    let output = pipeline::process(&input, &BrightenParams::default());

    assert_eq!(output.data(), &[150, 75, 15, 0, 255, 192]);
    assert_eq!(output.get(0, 0, 0), 150);
    assert_eq!(output.get(1, 0, 2), 192);
}

#[test]
fn output_shape_matches_input_for_rgba() {
    let input = PixelBuffer::new(13, 9, 4);
    let output = pipeline::process(&input, &BrightenParams::default());
    assert_eq!(output.width(), 13);
    assert_eq!(output.height(), 9);
    assert_eq!(output.channels(), 4);
}

#[test]
fn parallel_pipeline_matches_sequential() {
    let data: Vec<u8> = (0..32 * 16 * 3).map(|i| (i % 256) as u8).collect();
    let input = PixelBuffer::from_raw(32, 16, 3, data).unwrap();

    let sequential = pipeline::process(&input, &BrightenParams::default());
    let parallel = pipeline::process(
        &input,
        &BrightenParams {
            parallel: true,
            ..Default::default()
        },
    );
    assert_eq!(sequential, parallel);
}

#[test]
fn png_round_trip_through_disk() {
    let dir = temp_dir("roundtrip");
    let input_path = dir.join("gradient.png");
    let output_path = dir.join("gradient-brighter.png");

    // Horizontal brightness ramp, 16x4 RGB
    let mut input = PixelBuffer::new(16, 4, 3);
    for y in 0..4 {
        for x in 0..16 {
            let v = (x * 17) as u8;
            for c in 0..3 {
                input.set(x, y, c, v);
            }
        }
    }
    image_io::save_image(&input, &input_path).expect("failed to write input png");

    pipeline::run(&input_path, &output_path, &BrightenParams::default())
        .expect("pipeline run failed");

    // PNG is lossless, so the decoded output must be bit-exact
    let written = image_io::load_image(&output_path).expect("failed to read output png");
    let expected = transform::brighten(&input, transform::DEFAULT_FACTOR);
    assert_eq!(written, expected);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_file_is_a_fatal_error() {
    let dir = temp_dir("missing");
    let input_path = dir.join("does-not-exist.png");
    let output_path = dir.join("never-written.png");

    let err = pipeline::run(&input_path, &output_path, &BrightenParams::default()).unwrap_err();
    assert!(err.contains("Failed to load image"), "unexpected error: {err}");
    assert!(!output_path.exists(), "no partial output should be written");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unwritable_destination_is_a_fatal_error() {
    let dir = temp_dir("unwritable");
    let input_path = dir.join("flat.png");
    image_io::save_image(&PixelBuffer::new(4, 4, 3), &input_path).expect("failed to write input");

    // Destination directory does not exist
    let output_path = dir.join("no-such-dir").join("out.png");
    let err = pipeline::run(&input_path, &output_path, &BrightenParams::default()).unwrap_err();
    assert!(err.contains("Failed to save image"), "unexpected error: {err}");

    fs::remove_dir_all(&dir).ok();
}
