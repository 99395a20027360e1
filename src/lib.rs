//! # qrpix
//!
//! A small builder for turning text into QR code images.
//!
//! `qrpix` takes a piece of text, encodes it as a QR symbol (via the `qrcode`
//! crate), lays the symbol out on a pixel grid of the requested size and
//! compresses the result into PNG, JPEG, GIF or BMP. The output can be taken
//! as a temporary file, a byte buffer, any `std::io::Write` sink, or an
//! in-memory `image::RgbImage`.
//!
//! ## Defaults
//!
//! - Size: 125x125 pixels.
//! - Format: PNG.
//! - Error correction: Low, quiet zone of 4 modules.
//!
//! ## Example
//!
//! ```rust
//! use qrpix::{ImageType, QrCode};
//!
//! // Bytes, ready to be served or stored.
//! let png = QrCode::from("https://example.com").stream().unwrap();
//! assert!(!png.is_empty());
//!
//! // A temporary JPEG file, removed when `file` is dropped.
//! let file = QrCode::from("hello").to(ImageType::Jpg).with_size(50, 50).file().unwrap();
//! assert!(file.path().to_string_lossy().ends_with(".jpg"));
//!
//! // Raw pixels.
//! let img = QrCode::from("hello").raster_image().unwrap();
//! assert_eq!(img.dimensions(), (125, 125));
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: the fluent [`QrCode`] builder and its terminal operations.
//! - [`matrix`]: text to module grid.
//! - [`helper`]: module grid to pixels, pixels to container bytes.
//! - [`format`]: output formats and error-correction levels.
//! - [`error`]: error types.

#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod format;
pub mod helper;
pub mod matrix;

pub use builder::{QrCode, QrOptions};
pub use error::{Cause, EncodeError, GenerationError};
pub use format::{ErrorCorrection, ImageType};
