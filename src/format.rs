//! Pixel-grid text format
//!
//! ```text
//! <height> <width>
//! r,g,b r,g,b ...
//! ...
//! ```
//!
//! Pixels are listed in row-major order. Line breaks between triples are not
//! significant, only the total count is checked against the header.

use crate::error::{CaptchaError, Result};
use image::RgbImage;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Parse pixel-grid text into an RGB image
pub fn parse_image(text: &str) -> Result<RgbImage> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| CaptchaError::format(1, "missing \"<height> <width>\" header"))?;
    let (height, width) = parse_header(header_line, header)?;

    let expected = (height as usize)
        .checked_mul(width as usize)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or_else(|| {
            CaptchaError::format(
                header_line,
                format!("{}x{} pixels is too large", height, width),
            )
        })?;
    // Each "r,g,b" token takes at least 6 bytes with its separator
    let mut buf = Vec::with_capacity(expected.min(text.len() / 6) * 3);
    let mut count = 0usize;

    for (line_no, line) in lines {
        for token in line.split_whitespace() {
            if count == expected {
                return Err(CaptchaError::format(
                    line_no,
                    format!("more than {} pixels declared by header", expected),
                ));
            }
            buf.extend_from_slice(&parse_pixel(line_no, token)?);
            count += 1;
        }
    }

    if count != expected {
        return Err(CaptchaError::format(
            header_line,
            format!(
                "header declares {}x{} = {} pixels but found {}",
                height, width, expected, count
            ),
        ));
    }

    RgbImage::from_raw(width, height, buf)
        .ok_or_else(|| CaptchaError::Internal("pixel buffer size mismatch".to_string()))
}

fn parse_header(line_no: usize, header: &str) -> Result<(u32, u32)> {
    let mut parts = header.split_whitespace();
    let (Some(h), Some(w), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CaptchaError::format(
            line_no,
            format!("expected \"<height> <width>\", got {:?}", header),
        ));
    };

    let parse_dim = |s: &str| {
        s.parse::<u32>()
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| {
                CaptchaError::format(line_no, format!("invalid dimension {:?}", s))
            })
    };

    Ok((parse_dim(h)?, parse_dim(w)?))
}

fn parse_pixel(line_no: usize, token: &str) -> Result<[u8; 3]> {
    let mut channels = token.split(',');
    let mut pixel = [0u8; 3];

    for channel in pixel.iter_mut() {
        let value = channels.next().ok_or_else(|| {
            CaptchaError::format(line_no, format!("expected r,g,b triple, got {:?}", token))
        })?;
        *channel = value.trim().parse::<u8>().map_err(|_| {
            CaptchaError::format(
                line_no,
                format!("channel value {:?} is not in 0..=255", value),
            )
        })?;
    }

    if channels.next().is_some() {
        return Err(CaptchaError::format(
            line_no,
            format!("expected r,g,b triple, got {:?}", token),
        ));
    }

    Ok(pixel)
}

/// Read and parse a pixel-grid file
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let text = fs::read_to_string(path).map_err(|e| CaptchaError::io(path, e))?;
    parse_image(&text)
}

/// Encode an image as pixel-grid text, one image row per line
pub fn encode_image(image: &RgbImage) -> String {
    let mut out = format!("{} {}\n", image.height(), image.width());

    for row in image.rows() {
        let line: Vec<String> = row
            .map(|p| format!("{},{},{}", p.0[0], p.0[1], p.0[2]))
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", line.join(" "));
    }

    out
}
