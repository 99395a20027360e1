//! Error types for the encode pipeline.
//!
//! [`EncodeError`] describes why text could not be turned into a module grid.
//! [`GenerationError`] is what the byte-producing operations return: one
//! failure kind that keeps the lower-level [`Cause`] for diagnostics.

use qrcode::types::QrError;
use thiserror::Error;

/// Text or dimensions the matrix encoder cannot handle.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The text has no characters.
    #[error("cannot encode empty text")]
    EmptyText,

    /// The text exceeds [`MAX_TEXT_LEN`](crate::matrix::MAX_TEXT_LEN).
    #[error("text is {len} characters long, at most {max} are supported")]
    TextTooLong { len: usize, max: usize },

    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Width or height exceeds [`MAX_SIDE`](crate::matrix::MAX_SIDE).
    #[error("dimensions {width}x{height} exceed the {max} pixel limit per side")]
    TooLarge { width: u32, height: u32, max: u32 },

    /// The bare symbol (without quiet zone) is larger than the requested image.
    #[error("a {symbol}x{symbol} module symbol does not fit in {width}x{height}")]
    SymbolTooLarge { symbol: u32, width: u32, height: u32 },

    /// The `qrcode` crate rejected the text, e.g. too long for the error correction level.
    #[error("symbol encoding failed: {0}")]
    Symbol(QrError),
}

/// Lower-level reason behind a [`GenerationError`].
#[derive(Debug, Error)]
pub enum Cause {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("temporary file I/O failed: {0}")]
    Resource(#[from] std::io::Error),

    #[error("image compression failed: {0}")]
    Compression(#[from] image::ImageError),
}

/// Failure of [`QrCode::file`](crate::builder::QrCode::file),
/// [`QrCode::stream`](crate::builder::QrCode::stream) or
/// [`QrCode::write_to`](crate::builder::QrCode::write_to).
#[derive(Debug, Error)]
#[error("failed to create QR image from text due to underlying error")]
pub struct GenerationError {
    #[source]
    cause: Cause,
}

impl GenerationError {
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

impl From<Cause> for GenerationError {
    fn from(cause: Cause) -> Self {
        Self { cause }
    }
}

impl From<EncodeError> for GenerationError {
    fn from(err: EncodeError) -> Self {
        Cause::from(err).into()
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Cause::from(err).into()
    }
}

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Cause::from(err).into()
    }
}
