use brighten::pipeline::{self, BrightenParams};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "brighten")]
#[command(about = "Brighten an image and write the result to disk", long_about = None)]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Output image path; defaults to `<input stem>-brighter.<ext>`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Brightening factor applied to every sample
    #[arg(long, default_value_t = 1.5)]
    factor: f32,

    /// Process rows in parallel
    #[arg(long)]
    parallel: bool,
}

/// `images/parrot.png` -> `images/parrot-brighter.png`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let mut name = format!("{stem}-brighter");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let params = BrightenParams {
        factor: cli.factor,
        parallel: cli.parallel,
    };

    if let Err(err) = pipeline::run(&cli.input, &output, &params) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    println!("Success!");
}
