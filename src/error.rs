use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    ImageDecoding(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Input path is not a file or directory: {0}")]
    InvalidInputPath(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
