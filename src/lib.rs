//! Recognizer for fixed-layout, five character captchas.
//!
//! One binarized reference template is learned per character from labelled
//! samples; unseen captchas are read cell by cell by nearest-template matching.

pub mod captcha;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod engines;
pub mod error;
pub mod format;
pub mod preprocessing;
pub mod server;
pub mod template;

pub use captcha::Captcha;
pub use dataset::TrainingSample;
pub use engine::{CaptchaEngine, CellMatch, Recognition, PLACEHOLDER};
pub use error::CaptchaError;
pub use template::TemplateSet;
