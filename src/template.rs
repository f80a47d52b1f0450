//! Per-character reference templates
//!
//! Training cells are grouped by their label character regardless of the
//! position they came from. Each group is averaged per pixel and channel,
//! and the averaged colour image is binarized into that character's template.

use crate::dataset::TrainingSample;
use crate::error::Result;
use crate::preprocessing::{self, CELL_HEIGHT, CELL_WIDTH};
use image::{GrayImage, ImageBuffer, Rgb, RgbImage};
use std::collections::BTreeMap;

/// Binarized reference image for one character
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub image: GrayImage,
    /// Number of training cells averaged into `image`
    pub samples: usize,
}

/// Running per-channel sums for one character class
struct ClassAccumulator {
    width: u32,
    height: u32,
    sums: Vec<f64>,
    count: usize,
}

impl ClassAccumulator {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sums: vec![0.0; (width * height * 3) as usize],
            count: 0,
        }
    }

    fn add(&mut self, cell: &RgbImage) {
        for (sum, &value) in self.sums.iter_mut().zip(cell.as_raw()) {
            *sum += f64::from(value);
        }
        self.count += 1;
    }

    fn finish(self) -> Template {
        let count = self.count as f64;
        let mean: Vec<f64> = self.sums.into_iter().map(|sum| sum / count).collect();
        // Buffer length is width * height * 3 by construction
        let mean: ImageBuffer<Rgb<f64>, Vec<f64>> =
            ImageBuffer::from_raw(self.width, self.height, mean)
                .unwrap_or_else(|| ImageBuffer::new(self.width, self.height));

        Template {
            image: preprocessing::binarize(&mean),
            samples: self.count,
        }
    }
}

/// Immutable mapping from character to its reference template.
///
/// Iteration is in ascending character order, which also fixes the
/// tie-break used by the classifier.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: BTreeMap<char, Template>,
}

impl TemplateSet {
    /// Build templates from labelled captchas.
    ///
    /// Labels shorter than the number of cells contribute only their leading
    /// cells. An empty training set yields an empty template set.
    pub fn build(samples: &[TrainingSample]) -> Result<Self> {
        let mut classes: BTreeMap<char, ClassAccumulator> = BTreeMap::new();

        for sample in samples {
            let cells = preprocessing::extract_cells(&sample.image)?;

            if sample.label.chars().count() < cells.len() {
                tracing::debug!(
                    "Label {:?} is shorter than {} cells, using leading cells only",
                    sample.label,
                    cells.len()
                );
            }

            for (cell, character) in cells.iter().zip(sample.label.chars()) {
                classes
                    .entry(character)
                    .or_insert_with(|| ClassAccumulator::new(CELL_WIDTH, CELL_HEIGHT))
                    .add(cell);
            }
        }

        let templates: BTreeMap<char, Template> = classes
            .into_iter()
            .map(|(character, acc)| (character, acc.finish()))
            .collect();

        tracing::info!(
            "Built {} templates from {} training samples",
            templates.len(),
            samples.len()
        );

        Ok(Self { templates })
    }

    /// Wrap already-binarized templates
    pub fn from_templates(templates: impl IntoIterator<Item = (char, GrayImage)>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|(character, image)| (character, Template { image, samples: 1 }))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, character: char) -> Option<&GrayImage> {
        self.templates.get(&character).map(|t| &t.image)
    }

    pub fn sample_count(&self, character: char) -> Option<usize> {
        self.templates.get(&character).map(|t| t.samples)
    }

    /// Characters with a template, in ascending order
    pub fn characters(&self) -> Vec<char> {
        self.templates.keys().copied().collect()
    }

    /// Templates in ascending character order
    pub fn iter(&self) -> impl Iterator<Item = (char, &GrayImage)> {
        self.templates.iter().map(|(c, t)| (*c, &t.image))
    }
}
