use crate::error::Result;
use image::{GrayImage, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use std::time::Instant;

use super::steps::{self, crop::CELL_COUNT};

pub use super::steps::grayscale::GrayF64Image;

/// Crop the character band and split it into the fixed cells, left to right.
///
/// Fails with `InvalidImageDimensions` when the image cannot contain the
/// crop region instead of returning truncated cells.
pub fn extract_cells(image: &RgbImage) -> Result<[RgbImage; CELL_COUNT]> {
    let region = steps::crop::apply(image)?;
    Ok(steps::crop::split_cells(&region))
}

/// Grayscale then threshold a cell.
///
/// Generic over the sample type so that 8-bit cells and averaged
/// floating point cells go through exactly the same conversion.
pub fn binarize<P>(cell: &ImageBuffer<Rgb<P>, Vec<P>>) -> GrayImage
where
    P: Primitive + Into<f64>,
    Rgb<P>: Pixel<Subpixel = P>,
{
    let gray = steps::grayscale::apply(cell);
    steps::threshold::apply(&gray)
}

/// Extract and binarize every cell of a captcha image
pub fn binarized_cells(image: &RgbImage) -> Result<[GrayImage; CELL_COUNT]> {
    let start = Instant::now();
    let cells = extract_cells(image)?;
    let binary = cells.each_ref().map(binarize);

    tracing::trace!(
        "Preprocessed {}x{} image in {}us",
        image.width(),
        image.height(),
        start.elapsed().as_micros()
    );

    Ok(binary)
}
