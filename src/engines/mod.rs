//! Captcha engine implementations

pub mod template;

pub use template::TemplateEngine;
