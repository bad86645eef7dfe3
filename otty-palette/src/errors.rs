use std::io;

use thiserror::Error;

/// Errors raised by palette construction and direct slot access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("invalid palette argument: {0}")]
    InvalidArgument(&'static str),

    #[error("color index {index} out of bounds for palette of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },
}

/// A palette document that cannot be decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("palette document JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("palette document is not a JSON object")]
    NotAnObject,

    #[error("palette document is missing field `{0}`")]
    MissingField(&'static str),

    #[error("palette document field `index` is not an integer")]
    InvalidIndex,

    #[error("palette document field `colors` is not a string")]
    InvalidColors,

    #[error("color list is not bracket-delimited: {0:?}")]
    Unbracketed(String),

    #[error("color token {token:?} is not a decimal integer")]
    InvalidToken { token: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Errors emitted while reading or writing palette files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("palette IO failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
