//! Training corpus on disk
//!
//! Images live in an input directory as `input<NN>.txt`. The label of each
//! image is the content of `output<NN>.txt` in a sibling output directory.

use crate::error::{CaptchaError, Result};
use crate::format;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// A captcha image with its known text
#[derive(Debug, Clone)]
pub struct TrainingSample {
    pub image: RgbImage,
    pub label: String,
}

/// Label file paired with an input image file name, e.g. `input07.txt` → `output07.txt`
pub fn label_path_for(output_dir: &Path, input_file_name: &str) -> PathBuf {
    let index = input_file_name.replace("input", "").replace(".txt", "");
    output_dir.join(format!("output{}.txt", index))
}

/// Load every labelled image pair, in file name order.
///
/// Inputs without a matching label file are skipped.
pub fn load_training_set(input_dir: &Path, output_dir: &Path) -> Result<Vec<TrainingSample>> {
    let entries = fs::read_dir(input_dir).map_err(|e| CaptchaError::io(input_dir, e))?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CaptchaError::io(input_dir, e))?;
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(".txt") {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    let mut samples = Vec::with_capacity(names.len());
    for name in names {
        let image_path = input_dir.join(&name);
        let label_path = label_path_for(output_dir, &name);

        if !label_path.exists() {
            tracing::warn!(
                "Skipping {}: no label at {}",
                image_path.display(),
                label_path.display()
            );
            continue;
        }

        let image = format::load_image(&image_path).map_err(|e| match e {
            CaptchaError::ImageFormat { line, message } => CaptchaError::ImageFormat {
                line,
                message: format!("{}: {}", image_path.display(), message),
            },
            other => other,
        })?;
        let label = fs::read_to_string(&label_path)
            .map_err(|e| CaptchaError::io(&label_path, e))?
            .trim()
            .to_string();

        tracing::debug!("Loaded training pair {} -> {:?}", name, label);
        samples.push(TrainingSample { image, label });
    }

    tracing::info!(
        "Loaded {} training samples from {}",
        samples.len(),
        input_dir.display()
    );

    Ok(samples)
}

/// Persist a recognized string, without a trailing newline
pub fn write_result(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| CaptchaError::io(path, e))
}
