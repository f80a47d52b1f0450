//! Image preprocessing for captcha cells
//!
//! Crops the fixed captcha region, splits it into character cells and
//! binarizes them for template comparison.

pub mod pipeline;
pub mod steps;

pub use pipeline::{binarize, binarized_cells, extract_cells, GrayF64Image};
pub use steps::crop::{CELL_BOUNDS, CELL_COUNT, CELL_HEIGHT, CELL_WIDTH};
