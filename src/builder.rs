//! Fluent entry point: text in, image out.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{EncodeError, GenerationError};
use crate::format::{ErrorCorrection, ImageType};
use crate::helper::{encode_image, rasterize, write_image, PixelImage};
use crate::matrix::{self, DEFAULT_MARGIN};

/// Width and height used when [`QrCode::with_size`] is not called.
pub const DEFAULT_SIZE: u32 = 125;

/// Prefix of the temporary files created by [`QrCode::file`].
pub const TEMP_FILE_PREFIX: &str = "QRCode";

/// Everything that shapes the output besides the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    pub image_type: ImageType,
    pub width: u32,
    pub height: u32,
    pub error_correction: ErrorCorrection,
    /// Quiet zone, in modules.
    pub margin: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            image_type: ImageType::Png,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            error_correction: ErrorCorrection::Low,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// QR code builder.
///
/// Defaults to a 125x125 PNG. Text longer than
/// [`MAX_TEXT_LEN`](crate::matrix::MAX_TEXT_LEN) characters, or too long for
/// the chosen size and error correction, fails at the terminal call.
///
/// # Example
///
/// ```rust
/// use qrpix::builder::QrCode;
/// use qrpix::format::ImageType;
///
/// let file = QrCode::from("hello world").to(ImageType::Jpg).with_size(250, 250).file().unwrap();
/// assert!(file.path().to_string_lossy().ends_with(".jpg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    text: String,
    options: QrOptions,
}

impl QrCode {
    /// Starts a QR code for `text`. Nothing is validated until a terminal
    /// operation runs.
    #[allow(clippy::should_implement_trait)]
    pub fn from(text: impl Into<String>) -> Self {
        Self::with_options(text, QrOptions::default())
    }

    pub fn with_options(text: impl Into<String>, options: QrOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Overrides the output format (PNG by default).
    pub fn to(mut self, image_type: ImageType) -> Self {
        self.options.image_type = image_type;
        self
    }

    /// Overrides the image size in pixels. Zero, or a side over
    /// [`MAX_SIDE`](crate::matrix::MAX_SIDE), surfaces as an encode error later.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.options.error_correction = level;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.options.margin = margin;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &QrOptions {
        &self.options
    }

    /// Renders the code as an in-memory image, exactly `width × height`
    /// pixels, each pure black or white.
    pub fn raster_image(&self) -> Result<PixelImage, EncodeError> {
        let opts = &self.options;
        let grid = matrix::encode(&self.text, opts.width, opts.height, opts.error_correction, opts.margin)?;
        Ok(rasterize(&grid))
    }

    /// Returns the encoded image bytes.
    #[tracing::instrument(skip(self), fields(format = %self.options.image_type))]
    pub fn stream(&self) -> Result<Vec<u8>, GenerationError> {
        let img = self.raster_image()?;
        Ok(encode_image(&img, self.options.image_type)?)
    }

    /// Writes the encoded image to `sink`.
    ///
    /// The image is fully rendered before anything is written, so encode
    /// failures leave the sink untouched.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), GenerationError> {
        let img = self.raster_image()?;
        write_image(&img, self.options.image_type, sink)?;
        Ok(())
    }

    /// Writes the encoded image to a new temporary file named
    /// `QRCode<random>.<extension>`.
    ///
    /// The file is deleted when the returned handle is dropped; call
    /// [`NamedTempFile::persist`] to keep it. On failure no file is left behind.
    #[tracing::instrument(skip(self), fields(format = %self.options.image_type))]
    pub fn file(&self) -> Result<NamedTempFile, GenerationError> {
        let bytes = self.stream()?;
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(&format!(".{}", self.options.image_type.extension()))
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        tracing::debug!(path = %file.path().display(), bytes = bytes.len(), "wrote QR image");
        Ok(file)
    }
}
