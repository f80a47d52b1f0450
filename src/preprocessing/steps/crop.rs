use crate::error::{CaptchaError, Result};
use image::{imageops, RgbImage};

/// Rows `[CROP_TOP, CROP_BOTTOM)` of the source image hold the characters
pub const CROP_TOP: u32 = 11;
pub const CROP_BOTTOM: u32 = 21;
/// Columns `[CROP_LEFT, CROP_RIGHT)` of the source image hold the characters
pub const CROP_LEFT: u32 = 5;
pub const CROP_RIGHT: u32 = 49;

pub const CELL_COUNT: usize = 5;
pub const CELL_HEIGHT: u32 = CROP_BOTTOM - CROP_TOP;
pub const CELL_WIDTH: u32 = 8;

/// Column ranges of each character cell, relative to the cropped region.
/// A one-pixel gutter separates neighbouring cells.
pub const CELL_BOUNDS: [(u32, u32); CELL_COUNT] = [(0, 8), (9, 17), (18, 26), (27, 35), (36, 44)];

/// Crop the character band out of a full captcha image
pub fn apply(image: &RgbImage) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if width < CROP_RIGHT || height < CROP_BOTTOM {
        return Err(CaptchaError::InvalidImageDimensions {
            width,
            height,
            min_width: CROP_RIGHT,
            min_height: CROP_BOTTOM,
        });
    }

    Ok(imageops::crop_imm(
        image,
        CROP_LEFT,
        CROP_TOP,
        CROP_RIGHT - CROP_LEFT,
        CROP_BOTTOM - CROP_TOP,
    )
    .to_image())
}

/// Slice a cropped band into its fixed character cells, left to right
pub fn split_cells(region: &RgbImage) -> [RgbImage; CELL_COUNT] {
    let height = region.height();
    CELL_BOUNDS.map(|(start, end)| {
        imageops::crop_imm(region, start, 0, end - start, height).to_image()
    })
}
