use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("JPEG quality {0} outside [0.1, 1.0]")]
    InvalidQuality(f32),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Edit script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
