use std::io::Write;

use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageBuffer, Rgb, RgbImage};

use crate::format::ImageType;
use crate::matrix::ModuleGrid;

/// In-memory raster produced from a [`ModuleGrid`].
pub type PixelImage = RgbImage;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// JPEG quality used for every export.
pub const JPEG_QUALITY: u8 = 90;

/// GIF quantizer speed, 1 being the slowest and most accurate.
const GIF_SPEED: i32 = 1;

/// Converts a module grid to an image of the same size, one pixel per module.
///
/// # Example
///
/// ```rust
/// use qrpix::format::ErrorCorrection;
/// use qrpix::helper::rasterize;
/// use qrpix::matrix::encode;
///
/// let grid = encode("Hello, World!", 100, 100, ErrorCorrection::Low, 4).unwrap();
/// let img = rasterize(&grid);
/// assert_eq!(img.dimensions(), (100, 100));
/// ```
pub fn rasterize(grid: &ModuleGrid) -> PixelImage {
    let mut img = ImageBuffer::new(grid.width(), grid.height());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if grid.get(x, y) {
            BLACK
        } else {
            WHITE
        };
    }

    img
}

/// Compresses `img` into the container format `ty` and writes it to `sink`.
///
/// The image is encoded in memory first, so the sink only ever sees a
/// complete file.
///
/// # Errors
///
/// Returns an `image::ImageError` if the encoder rejects the image or the
/// sink fails.
pub fn write_image<W: Write>(img: &PixelImage, ty: ImageType, mut sink: W) -> Result<(), ImageError> {
    let buf = encode_image(img, ty)?;
    sink.write_all(&buf)?;
    sink.flush()?;
    Ok(())
}

/// Compresses `img` into a fresh byte buffer.
pub fn encode_image(img: &PixelImage, ty: ImageType) -> Result<Vec<u8>, ImageError> {
    let (width, height) = img.dimensions();
    let data = img.as_raw();
    let mut buf = Vec::new();
    match ty {
        ImageType::Png => PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
            .write_image(data, width, height, ExtendedColorType::Rgb8)?,
        ImageType::Jpg => JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
            .write_image(data, width, height, ExtendedColorType::Rgb8)?,
        ImageType::Bmp => BmpEncoder::new(&mut buf)
            .write_image(data, width, height, ExtendedColorType::Rgb8)?,
        ImageType::Gif => {
            // The trailer is written when the encoder drops.
            let mut encoder = GifEncoder::new_with_speed(&mut buf, GIF_SPEED);
            encoder.encode(data, width, height, ExtendedColorType::Rgb8)?;
        }
    }
    tracing::debug!(format = %ty, bytes = buf.len(), "image encoded");
    Ok(buf)
}
