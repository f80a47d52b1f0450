use image::{ImageBuffer, Luma, Pixel, Primitive, Rgb};

/// Luma weights applied to the red, green and blue channels
pub const LUMA_WEIGHTS: [f64; 3] = [0.2989, 0.5870, 0.1140];

/// Floating point grayscale buffer, kept unrounded so thresholding sees exact luma
pub type GrayF64Image = ImageBuffer<Luma<f64>, Vec<f64>>;

/// Weighted luma of a single pixel
pub fn luma<P>(pixel: Rgb<P>) -> f64
where
    P: Primitive + Into<f64>,
{
    let Rgb([r, g, b]) = pixel;
    LUMA_WEIGHTS[0] * r.into() + LUMA_WEIGHTS[1] * g.into() + LUMA_WEIGHTS[2] * b.into()
}

/// Convert an RGB buffer (8-bit samples or averaged floats) to grayscale
pub fn apply<P>(image: &ImageBuffer<Rgb<P>, Vec<P>>) -> GrayF64Image
where
    P: Primitive + Into<f64>,
    Rgb<P>: Pixel<Subpixel = P>,
{
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(*image.get_pixel(x, y))])
    })
}
