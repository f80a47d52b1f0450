use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CaptchaError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CaptchaError {
    #[error(
        "Image is {width}x{height}, but the captcha region needs at least {min_width}x{min_height}"
    )]
    InvalidImageDimensions {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Malformed pixel grid at line {line}: {message}")]
    ImageFormat { line: usize, message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing image in request body")]
    MissingBody,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaptchaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::ImageFormat {
            line,
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            CaptchaError::InvalidImageDimensions { .. } => "INVALID_IMAGE_DIMENSIONS",
            CaptchaError::ImageFormat { .. } => "IMAGE_FORMAT",
            CaptchaError::Io { .. } => "IO_ERROR",
            CaptchaError::MissingBody => "MISSING_BODY",
            CaptchaError::InvalidRequest(_) => "INVALID_REQUEST",
            CaptchaError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for CaptchaError {
    fn into_response(self) -> Response {
        let status = match &self {
            CaptchaError::InvalidImageDimensions { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CaptchaError::ImageFormat { .. } => StatusCode::BAD_REQUEST,
            CaptchaError::MissingBody => StatusCode::BAD_REQUEST,
            CaptchaError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CaptchaError::Io { .. } | CaptchaError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        });

        (status, body).into_response()
    }
}
