//! Error types
//!
//! Input anomalies never surface here: the normalizer and the content table
//! degrade to defaults. What remains are I/O, encoding and collaborator
//! failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output file would leave the output directory: {0:?}")]
    OutputPath(std::path::PathBuf),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
