//! Nearest-template engine
//!
//! Each binarized cell is assigned the character whose template has the
//! smallest L1 distance to it. Templates are visited in ascending character
//! order and only a strictly lower distance replaces the current best, so on
//! a tie the smallest character wins.

use crate::engine::{CaptchaEngine, CellMatch, Recognition, PLACEHOLDER};
use crate::error::CaptchaError;
use crate::preprocessing;
use crate::template::TemplateSet;
use image::{GrayImage, RgbImage};
use std::sync::Arc;

/// Engine matching cells against a shared, read-only template set
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    templates: Arc<TemplateSet>,
}

impl TemplateEngine {
    pub fn new(templates: Arc<TemplateSet>) -> Self {
        if templates.is_empty() {
            tracing::warn!(
                "Template set is empty, every cell will be recognized as '{}'",
                PLACEHOLDER
            );
        }
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Find the closest template for one binarized cell
    pub fn match_cell(&self, cell: &GrayImage) -> CellMatch {
        let mut best: Option<(char, u64)> = None;

        for (character, template) in self.templates.iter() {
            let Some(score) = l1_distance(cell, template) else {
                tracing::trace!(
                    "Skipping template '{}': shape {:?} differs from cell {:?}",
                    character,
                    template.dimensions(),
                    cell.dimensions()
                );
                continue;
            };

            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((character, score));
            }
        }

        match best {
            Some((character, distance)) => CellMatch {
                character,
                distance: Some(distance),
            },
            None => CellMatch {
                character: PLACEHOLDER,
                distance: None,
            },
        }
    }
}

impl CaptchaEngine for TemplateEngine {
    fn name(&self) -> &'static str {
        "template"
    }

    fn description(&self) -> &'static str {
        "Nearest mean-template matching over fixed character cells"
    }

    fn recognize(&self, image: &RgbImage) -> Result<Recognition, CaptchaError> {
        let cells = preprocessing::binarized_cells(image)?;
        let matches: Vec<CellMatch> = cells.iter().map(|cell| self.match_cell(cell)).collect();

        for (i, m) in matches.iter().enumerate() {
            tracing::debug!("Cell {}: '{}' (distance {:?})", i, m.character, m.distance);
        }

        Ok(Recognition::from_cells(matches))
    }
}

/// Sum of absolute pixel differences, or `None` if the shapes differ
pub fn l1_distance(a: &GrayImage, b: &GrayImage) -> Option<u64> {
    if a.dimensions() != b.dimensions() {
        return None;
    }

    Some(
        a.as_raw()
            .iter()
            .zip(b.as_raw())
            .map(|(&x, &y)| (i64::from(x) - i64::from(y)).unsigned_abs())
            .sum(),
    )
}
