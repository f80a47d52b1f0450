use crate::error::CaptchaError;
use image::RgbImage;

/// Character emitted for a cell when no template can be compared against it
pub const PLACEHOLDER: char = '?';

/// Best match for a single character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMatch {
    pub character: char,
    /// L1 distance to the winning template, `None` for the placeholder
    pub distance: Option<u64>,
}

/// Recognition result for one captcha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    pub text: String,
    pub cells: Vec<CellMatch>,
}

impl Recognition {
    pub fn from_cells(cells: Vec<CellMatch>) -> Self {
        Self {
            text: cells.iter().map(|m| m.character).collect(),
            cells,
        }
    }
}

/// Trait that all captcha recognizers must implement
pub trait CaptchaEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "template")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize the characters of a decoded captcha image
    fn recognize(&self, image: &RgbImage) -> Result<Recognition, CaptchaError>;
}
