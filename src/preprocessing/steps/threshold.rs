use super::grayscale::GrayF64Image;
use image::{GrayImage, Luma};

/// Fixed cut-off tuned for the captcha renderer; glyph strokes are darker than this
pub const THRESHOLD: f64 = 70.0;

/// Global threshold: luma strictly above `THRESHOLD` becomes 255, everything else 0
pub fn apply(gray: &GrayF64Image) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y).0[0] > THRESHOLD {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    #[test]
    fn test_threshold_binarizes_image() {
        let gray: GrayF64Image = ImageBuffer::from_fn(50, 1, |x, _| Luma([x as f64 * 5.0]));
        let result = apply(&gray);

        for pixel in result.pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let gray: GrayF64Image = ImageBuffer::from_fn(3, 1, |x, _| Luma([69.0 + x as f64]));
        let result = apply(&gray);

        assert_eq!(result.get_pixel(0, 0).0[0], 0); // 69
        assert_eq!(result.get_pixel(1, 0).0[0], 0); // 70
        assert_eq!(result.get_pixel(2, 0).0[0], 255); // 71
    }
}
