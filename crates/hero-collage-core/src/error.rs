use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to decode hero image {}: {source}", .path.display())]
    HeroDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to decode secondary image {}: {source}", .path.display())]
    SecondaryDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode collage to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CollageError>;
