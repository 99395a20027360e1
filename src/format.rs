//! Output container formats and error-correction levels.

use std::fmt;
use std::str::FromStr;

use qrcode::EcLevel;
use serde::{Deserialize, Serialize};

/// Container format of the encoded image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Png,
    Jpg,
    Gif,
    Bmp,
}

impl ImageType {
    pub const ALL: [ImageType; 4] = [ImageType::Png, ImageType::Jpg, ImageType::Gif, ImageType::Bmp];

    /// File extension without the leading dot, e.g. `"jpg"`.
    pub const fn extension(self) -> &'static str {
        match self {
            ImageType::Png => "png",
            ImageType::Jpg => "jpg",
            ImageType::Gif => "gif",
            ImageType::Bmp => "bmp",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpg => "image/jpeg",
            ImageType::Gif => "image/gif",
            ImageType::Bmp => "image/bmp",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Returned when a format name is not one of the supported containers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported image type: {0:?}")]
pub struct UnknownImageType(pub String);

impl FromStr for ImageType {
    type Err = UnknownImageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageType::Png),
            "jpg" | "jpeg" => Ok(ImageType::Jpg),
            "gif" => Ok(ImageType::Gif),
            "bmp" => Ok(ImageType::Bmp),
            _ => Err(UnknownImageType(s.to_string())),
        }
    }
}

/// Error correction level of the symbol. Higher levels survive more damage
/// but hold less text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% recovery.
    #[default]
    Low,
    /// ~15% recovery.
    Medium,
    /// ~25% recovery.
    Quartile,
    /// ~30% recovery.
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_type() {
        assert_eq!("PNG".parse::<ImageType>(), Ok(ImageType::Png));
        assert_eq!("jpeg".parse::<ImageType>(), Ok(ImageType::Jpg));
        assert_eq!(" gif ".parse::<ImageType>(), Ok(ImageType::Gif));
        assert!("tiff".parse::<ImageType>().is_err());
    }

    #[test]
    fn test_extension_round_trips_through_parse() {
        for ty in ImageType::ALL {
            assert_eq!(ty.extension().parse::<ImageType>(), Ok(ty));
        }
    }

    #[test]
    fn test_ec_level_mapping() {
        assert_eq!(EcLevel::from(ErrorCorrection::default()), EcLevel::L);
        assert_eq!(EcLevel::from(ErrorCorrection::High), EcLevel::H);
    }
}
