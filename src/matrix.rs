//! Text to module grid.
//!
//! Symbol construction (data encoding, Reed–Solomon, masking) is done by the
//! `qrcode` crate. This module fits the resulting symbol into the requested
//! pixel extent: quiet zone around it, integer scale, centered.

use qrcode::types::Color;

use crate::error::EncodeError;
use crate::format::ErrorCorrection;

/// Longest text (in characters) accepted for encoding.
///
/// This is a fixed limit, not the encoder's capacity: level Low can hold a
/// few more bytes, but longer text is rejected regardless of settings.
pub const MAX_TEXT_LEN: usize = 2950;

/// Largest accepted width or height, in pixels.
pub const MAX_SIDE: u32 = 8192;

/// Quiet zone width, in modules, used unless overridden.
pub const DEFAULT_MARGIN: u32 = 4;

/// A `width × height` grid of modules, `true` meaning dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: u32,
    height: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    fn light(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            modules: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the module at `(x, y)` is dark. Coordinates outside the grid
    /// read as light.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.modules[y as usize * self.width as usize + x as usize]
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    fn fill(&mut self, left: u32, top: u32, side: u32) {
        for y in top..top + side {
            let row = y as usize * self.width as usize;
            for x in left..left + side {
                self.modules[row + x as usize] = true;
            }
        }
    }
}

/// Encodes `text` as a QR symbol and lays it out on a `width × height` grid.
///
/// The symbol plus a `margin`-module quiet zone is scaled by the largest
/// integer factor that fits both sides (at least 1) and centered. If the
/// quiet zone does not fit it is shrunk; if the symbol itself does not fit,
/// [`EncodeError::SymbolTooLarge`] is returned.
///
/// # Example
///
/// ```rust
/// use qrpix::format::ErrorCorrection;
/// use qrpix::matrix::encode;
///
/// let grid = encode("hello", 125, 125, ErrorCorrection::Low, 4).unwrap();
/// assert_eq!((grid.width(), grid.height()), (125, 125));
/// ```
#[tracing::instrument(skip(text), fields(len = text.chars().count()))]
pub fn encode(
    text: &str,
    width: u32,
    height: u32,
    ecc: ErrorCorrection,
    margin: u32,
) -> Result<ModuleGrid, EncodeError> {
    let len = text.chars().count();
    if len == 0 {
        return Err(EncodeError::EmptyText);
    }
    if len > MAX_TEXT_LEN {
        return Err(EncodeError::TextTooLong { len, max: MAX_TEXT_LEN });
    }
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if width > MAX_SIDE || height > MAX_SIDE {
        return Err(EncodeError::TooLarge { width, height, max: MAX_SIDE });
    }

    let code = qrcode::QrCode::with_error_correction_level(text.as_bytes(), ecc.into())
        .map_err(EncodeError::Symbol)?;
    let symbol = code.width() as u32;
    let colors = code.to_colors();

    let side = width.min(height);
    if symbol > side {
        return Err(EncodeError::SymbolTooLarge { symbol, width, height });
    }

    let padded = symbol.saturating_add(margin.saturating_mul(2));
    let scale = (side / padded).max(1);
    let extent = symbol * scale;
    let left = (width - extent) / 2;
    let top = (height - extent) / 2;
    tracing::debug!(symbol, scale, left, top, "placing symbol");

    let mut grid = ModuleGrid::light(width, height);
    for (i, color) in colors.iter().enumerate() {
        if *color == Color::Dark {
            let x = i as u32 % symbol;
            let y = i as u32 / symbol;
            grid.fill(left + x * scale, top + y * scale, scale);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_default_size() {
        let grid = encode("hello", 125, 125, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap();
        assert_eq!((grid.width(), grid.height()), (125, 125));
        assert!(grid.dark_count() > 0);
        assert!(grid.dark_count() < 125 * 125);
        // Quiet zone corners stay light.
        assert!(!grid.get(0, 0));
        assert!(!grid.get(124, 124));
    }

    #[test]
    fn test_symbol_is_centered_with_scale() {
        // "hello" is a version 1 symbol: 21 modules, 29 with the quiet zone.
        // 87 / 29 = 3, so the symbol spans 63 pixels starting at 12.
        let grid = encode("hello", 87, 87, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap();
        // Top-left finder pattern: its outer ring is dark.
        assert!(grid.get(12, 12));
        assert!(grid.get(14, 14));
        assert!(!grid.get(11, 11));
        assert!(!grid.get(12 + 63, 12));
    }

    #[test]
    fn test_quiet_zone_shrinks_before_failing() {
        let grid = encode("hello", 21, 21, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap();
        assert_eq!(grid.width(), 21);
        assert!(grid.get(0, 0));
    }

    #[test]
    fn test_symbol_too_large() {
        let err = encode("hello", 20, 200, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap_err();
        assert!(matches!(err, EncodeError::SymbolTooLarge { symbol: 21, .. }));
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = encode("", 125, 125, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap_err();
        assert!(matches!(err, EncodeError::EmptyText));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        for (w, h) in [(0, 125), (125, 0), (0, 0)] {
            let err = encode("hello", w, h, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap_err();
            assert!(matches!(err, EncodeError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        for (w, h) in [(u32::MAX, u32::MAX), (MAX_SIDE + 1, 125), (125, MAX_SIDE + 1)] {
            let err = encode("hello", w, h, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap_err();
            assert!(matches!(err, EncodeError::TooLarge { max: MAX_SIDE, .. }));
        }
    }

    #[test]
    fn test_rejects_text_over_limit() {
        let text = "a".repeat(MAX_TEXT_LEN + 1);
        let err = encode(&text, 500, 500, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap_err();
        assert!(matches!(err, EncodeError::TextTooLong { len: 2951, max: 2950 }));
    }

    #[test]
    fn test_capacity_depends_on_error_correction() {
        // Fits at level Low (2953 bytes) but not at High (1273 bytes).
        let text = "a".repeat(2000);
        assert!(encode(&text, 400, 400, ErrorCorrection::Low, 0).is_ok());
        let err = encode(&text, 400, 400, ErrorCorrection::High, 0).unwrap_err();
        assert!(matches!(err, EncodeError::Symbol(_)));
    }

    #[test]
    fn test_out_of_range_reads_light() {
        let grid = encode("hello", 30, 30, ErrorCorrection::Low, 0).unwrap();
        assert!(!grid.get(30, 0));
        assert!(!grid.get(0, 1000));
    }

    proptest! {
        #[test]
        fn prop_grid_matches_requested_size(w in 21u32..300, h in 21u32..300) {
            let grid = encode("proptest", w, h, ErrorCorrection::Medium, DEFAULT_MARGIN).unwrap();
            prop_assert_eq!((grid.width(), grid.height()), (w, h));
            prop_assert!(grid.dark_count() > 0);
        }

        #[test]
        fn prop_encoding_is_deterministic(text in "[a-zA-Z0-9 ]{1,64}") {
            let a = encode(&text, 200, 200, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap();
            let b = encode(&text, 200, 200, ErrorCorrection::Low, DEFAULT_MARGIN).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
