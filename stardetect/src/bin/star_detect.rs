//! Command line star detection tool.
//!
//! Runs the detection pipeline on an image, prints the detection count,
//! and writes the annotated result next to the input. Optionally dumps
//! the intermediate stage images for inspection.
//!
//! # Usage
//!
//! ```bash
//! # Detect stars in the bundled sample location
//! cargo run --release --bin star_detect
//!
//! # Detect stars in a specific image with a stricter threshold
//! cargo run --release --bin star_detect -- sky.png --c 8
//!
//! # Also write a 3x2 montage of the processing stages
//! cargo run --release --bin star_detect -- sky.png --montage stages.png
//! ```

use std::path::PathBuf;

use clap::Parser;

use stardetect::{detect_stars_with_stages, viz, DetectorConfig};

#[derive(Parser)]
#[command(author, version, about = "Detect stars in a night-sky image", long_about = None)]
struct Args {
    /// Path to the input image (PNG, JPEG, ...)
    #[arg(default_value = "data/starfield.png")]
    image: PathBuf,

    /// Contrast gain applied before thresholding
    #[arg(long, default_value_t = 1.5)]
    alpha: f64,

    /// Brightness offset applied before thresholding
    #[arg(long, default_value_t = 30.0)]
    beta: f64,

    /// Gaussian denoising kernel size (odd)
    #[arg(long, default_value_t = 5)]
    blur_kernel_size: usize,

    /// Adaptive threshold neighborhood size (odd, > 1)
    #[arg(long, default_value_t = 11)]
    block_size: usize,

    /// Constant subtracted from the local mean; larger detects fewer pixels
    #[arg(long, default_value_t = 5.0)]
    c: f64,

    /// Structuring element size for morphological opening
    #[arg(long, default_value_t = 3)]
    morph_kernel_size: usize,

    /// Where to write the annotated image (default: <input>.detected.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a 3x2 montage of the pipeline stages to this path
    #[arg(long)]
    montage: Option<PathBuf>,

    /// Write each pipeline stage as an individual PNG into this directory
    #[arg(long)]
    stages_dir: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> DetectorConfig {
        DetectorConfig {
            alpha: self.alpha,
            beta: self.beta,
            blur_kernel_size: self.blur_kernel_size,
            block_size: self.block_size,
            c: self.c,
            morph_kernel_size: self.morph_kernel_size,
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.image.with_extension("detected.png"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    log::info!("detecting stars in {:?}", args.image);

    let (result, stages) = detect_stars_with_stages(&args.image, &config)?;

    println!("Detected {} stars.", result.stars.len());

    let output = args.output_path();
    result.annotated.save(&output)?;
    println!("Annotated image written to {}", output.display());

    if let Some(path) = &args.montage {
        viz::stage_montage(&stages).save(path)?;
        println!("Stage montage written to {}", path.display());
    }

    if let Some(dir) = &args.stages_dir {
        viz::save_stages(&stages, dir)?;
        println!("Stage images written to {}", dir.display());
    }

    Ok(())
}
