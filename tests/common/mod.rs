#![allow(dead_code)]

use captcha_ocr::format::encode_image;
use captcha_ocr::preprocessing::CELL_BOUNDS;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOP";

/// Stroke pattern of a test glyph: a cross whose column and row depend on the character
fn glyph_pixel(c: char, x: u32, y: u32) -> bool {
    let index = ALPHABET.find(c).expect("character not in test alphabet") as u32;
    x == index % 8 || y == index / 8 + 2
}

/// Render a 60x30 captcha with `text` drawn into the fixed cells
pub fn render_captcha(text: &str, ink: [u8; 3], paper: [u8; 3]) -> RgbImage {
    let mut image = RgbImage::from_pixel(60, 30, Rgb(paper));

    for (&(start, _), c) in CELL_BOUNDS.iter().zip(text.chars()) {
        for y in 0..10 {
            for x in 0..8 {
                if glyph_pixel(c, x, y) {
                    image.put_pixel(5 + start + x, 11 + y, Rgb(ink));
                }
            }
        }
    }

    image
}

/// Training corpus laid out as `input/inputNN.txt` + `output/outputNN.txt`
pub struct Corpus {
    pub dir: tempfile::TempDir,
}

impl Corpus {
    pub fn new(samples: &[(RgbImage, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("input")).unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();

        for (i, (image, label)) in samples.iter().enumerate() {
            fs::write(
                dir.path().join("input").join(format!("input{:02}.txt", i)),
                encode_image(image),
            )
            .unwrap();
            fs::write(
                dir.path().join("output").join(format!("output{:02}.txt", i)),
                format!("{}\n", label),
            )
            .unwrap();
        }

        Self { dir }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    pub fn write_image(&self, name: &str, image: &RgbImage) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, encode_image(image)).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A small corpus covering several characters with varying colours
pub fn standard_corpus() -> Corpus {
    Corpus::new(&[
        (render_captcha("1A2B3", [230, 230, 230], [20, 20, 20]), "1A2B3"),
        (render_captcha("C4D5E", [250, 200, 180], [40, 10, 30]), "C4D5E"),
        (render_captcha("3B1FA", [180, 255, 120], [0, 60, 0]), "3B1FA"),
        (render_captcha("GH0E9", [255, 255, 255], [0, 0, 0]), "GH0E9"),
    ])
}
