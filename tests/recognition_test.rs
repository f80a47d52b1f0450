mod common;

use captcha_ocr::format::load_image;
use captcha_ocr::preprocessing::{CELL_HEIGHT, CELL_WIDTH};
use captcha_ocr::{Captcha, CaptchaError, TemplateSet, TrainingSample};
use common::{render_captcha, standard_corpus, Corpus};
use image::RgbImage;
use std::fs;

#[test]
fn test_single_example_round_trip() {
    let image = render_captcha("1A2B3", [200, 30, 30], [0, 0, 40]);
    let captcha = Captcha::train(&[TrainingSample {
        image: image.clone(),
        label: "1A2B3".to_string(),
    }])
    .unwrap();

    assert_eq!(captcha.recognize(&image).unwrap().text, "1A2B3");
}

#[test]
fn test_training_images_reproduce_labels() {
    let corpus = standard_corpus();
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();

    for entry in fs::read_dir(corpus.input_dir()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        let label_path = corpus.output_dir().join(name.replace("input", "output"));
        let label = fs::read_to_string(label_path).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!(
            captcha.recognize(&image).unwrap().text,
            label.trim(),
            "{}",
            name
        );
    }
}

#[test]
fn test_recognizes_unseen_combination() {
    let corpus = standard_corpus();
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();

    // Same glyphs in a new order and new colours
    let image = render_captcha("E3H0A", [160, 160, 255], [30, 30, 30]);
    assert_eq!(captcha.recognize(&image).unwrap().text, "E3H0A");
}

#[test]
fn test_templates_have_cell_shape() {
    let corpus = standard_corpus();
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();
    let templates = captcha.templates();

    assert!(!templates.is_empty());
    for (_, template) in templates.iter() {
        assert_eq!(template.dimensions(), (CELL_WIDTH, CELL_HEIGHT));
    }
    assert_eq!(templates.sample_count('1'), Some(2));
    assert_eq!(templates.sample_count('G'), Some(1));
}

#[test]
fn test_recognize_is_deterministic() {
    let corpus = standard_corpus();
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();
    let image = render_captcha("9DC4B", [255, 255, 255], [0, 0, 0]);

    let first = captcha.recognize(&image).unwrap();
    let second = captcha.recognize(&image).unwrap();
    assert_eq!(first.text, second.text);
    assert_eq!(first.cells, second.cells);
}

#[test]
fn test_empty_templates_yield_placeholders() {
    let captcha = Captcha::new(TemplateSet::default());
    let image = render_captcha("12345", [255, 255, 255], [0, 0, 0]);

    assert_eq!(captcha.recognize(&image).unwrap().text, "?????");
}

#[test]
fn test_empty_corpus_directory() {
    let corpus = Corpus::new(&[]);
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();

    assert!(captcha.templates().is_empty());
}

#[test]
fn test_small_image_is_rejected() {
    let captcha = Captcha::train(&[]).unwrap();
    let err = captcha.recognize(&RgbImage::new(30, 15)).unwrap_err();

    assert!(matches!(err, CaptchaError::InvalidImageDimensions { .. }));
}

#[test]
fn test_short_training_labels_are_tolerated() {
    let captcha = Captcha::train(&[
        TrainingSample {
            image: render_captcha("AB", [255, 255, 255], [0, 0, 0]),
            label: "AB".to_string(),
        },
        TrainingSample {
            image: render_captcha("12345", [255, 255, 255], [0, 0, 0]),
            label: "12345".to_string(),
        },
    ])
    .unwrap();

    assert_eq!(captcha.templates().len(), 7);
    let image = render_captcha("BA", [255, 255, 255], [0, 0, 0]);
    assert_eq!(&captcha.recognize(&image).unwrap().text[..2], "BA");
}

#[test]
fn test_solve_file_writes_result() {
    let corpus = standard_corpus();
    let captcha = Captcha::from_dirs(&corpus.input_dir(), &corpus.output_dir()).unwrap();

    let image = render_captcha("ABCDE", [240, 240, 240], [10, 10, 10]);
    let image_path = corpus.write_image("query.txt", &image);
    let save_path = corpus.path().join("result.txt");

    let text = captcha.solve_file(&image_path, &save_path).unwrap();
    assert_eq!(text, "ABCDE");
    assert_eq!(fs::read_to_string(save_path).unwrap(), "ABCDE");
}
