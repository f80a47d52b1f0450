use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "captcha-ocr-server")]
#[command(about = "Captcha recognition server backed by per-character templates")]
#[command(version)]
pub struct Args {
    /// Host address to bind to
    #[arg(long, env = "CAPTCHA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CAPTCHA_PORT", default_value = "9393")]
    pub port: u16,

    /// Directory of training images (input<NN>.txt)
    #[arg(long, env = "CAPTCHA_INPUT_DIR", default_value = "sampleCaptchas/input")]
    pub input_dir: PathBuf,

    /// Directory of training labels (output<NN>.txt)
    #[arg(long, env = "CAPTCHA_OUTPUT_DIR", default_value = "sampleCaptchas/output")]
    pub output_dir: PathBuf,

    /// Maximum request body size in bytes (default: 1MB)
    #[arg(long, env = "CAPTCHA_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_body_size: usize,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            input_dir: args.input_dir,
            output_dir: args.output_dir,
            max_body_size: args.max_body_size,
        }
    }
}
