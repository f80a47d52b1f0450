use crate::dataset::{self, TrainingSample};
use crate::engine::{CaptchaEngine, Recognition};
use crate::engines::TemplateEngine;
use crate::error::Result;
use crate::format;
use crate::template::TemplateSet;
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;

/// Trained captcha solver.
///
/// Templates are built once on construction and shared read-only afterwards,
/// so a `Captcha` can be cloned cheaply and used from several threads.
#[derive(Debug, Clone)]
pub struct Captcha {
    engine: TemplateEngine,
}

impl Captcha {
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            engine: TemplateEngine::new(Arc::new(templates)),
        }
    }

    pub fn train(samples: &[TrainingSample]) -> Result<Self> {
        Ok(Self::new(TemplateSet::build(samples)?))
    }

    /// Train from an `input/` + `output/` directory pair
    pub fn from_dirs(input_dir: &Path, output_dir: &Path) -> Result<Self> {
        let samples = dataset::load_training_set(input_dir, output_dir)?;
        Self::train(&samples)
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn templates(&self) -> &TemplateSet {
        self.engine.templates()
    }

    pub fn recognize(&self, image: &RgbImage) -> Result<Recognition> {
        self.engine.recognize(image)
    }

    /// Recognize a pixel-grid file and write the text to `save_path`
    pub fn solve_file(&self, image_path: &Path, save_path: &Path) -> Result<String> {
        let image = format::load_image(image_path)?;
        let recognition = self.recognize(&image)?;
        dataset::write_result(save_path, &recognition.text)?;

        tracing::info!(
            "Recognized {} as {:?}, saved to {}",
            image_path.display(),
            recognition.text,
            save_path.display()
        );

        Ok(recognition.text)
    }
}
