use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextureError>;

// Everything that can go wrong between band selection and the PNG on disk
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to write texture to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    // min == max, so (x - min) / (max - min) would divide by zero
    #[error("cannot normalize a constant texture (every value is {value})")]
    ZeroRange { value: f64 },

    #[error("cannot normalize an empty texture")]
    EmptyMap,

    #[error("layer shape mismatch: expected {expected}x{expected}, got {actual}x{actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid texture config: {0}")]
    InvalidConfig(String),
}
