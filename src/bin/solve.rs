use anyhow::Context;
use captcha_ocr::Captcha;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "captcha-solve")]
#[command(about = "Recognize a single captcha file and write the text to a file")]
#[command(version)]
struct Args {
    /// Pixel-grid text file to recognize
    image: PathBuf,

    /// Where to write the recognized text
    save_path: PathBuf,

    /// Directory of training images (input<NN>.txt)
    #[arg(long, env = "CAPTCHA_INPUT_DIR", default_value = "sampleCaptchas/input")]
    input_dir: PathBuf,

    /// Directory of training labels (output<NN>.txt)
    #[arg(long, env = "CAPTCHA_OUTPUT_DIR", default_value = "sampleCaptchas/output")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let captcha = Captcha::from_dirs(&args.input_dir, &args.output_dir).with_context(|| {
        format!(
            "Failed to train from {} and {}",
            args.input_dir.display(),
            args.output_dir.display()
        )
    })?;

    let text = captcha
        .solve_file(&args.image, &args.save_path)
        .with_context(|| format!("Failed to solve {}", args.image.display()))?;

    println!("{}", text);
    Ok(())
}
