//! Text to module grid.
//!
//! Symbol construction (version selection, masking, Reed-Solomon) lives in the `qrcode` crate.
//! This module only pins the error correction level and copies the result into a [`ModuleGrid`]
//! that the rasterizer can read.

use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum ErrorCorrection {
    /// Tolerates ~7% erroneous codewords.
    #[default]
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
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

/// A square grid of dark (`true`) and light (`false`) modules, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from row-major modules.
    ///
    /// Returns `None` unless `modules.len() == width * width`.
    pub fn new(width: u32, modules: Vec<bool>) -> Option<Self> {
        let expected = (width as usize).checked_mul(width as usize)?;
        (modules.len() == expected).then_some(Self { width, modules })
    }

    /// Number of modules along one side.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the color of the module at the given coordinates. Coordinates outside the grid
    /// are light, which is what the quiet zone is drawn from.
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i64, y: i64) -> bool {
        let range = 0..i64::from(self.width);
        range.contains(&x)
            && range.contains(&y)
            && self.modules[y as usize * self.width as usize + x as usize]
    }
}

/// Something that turns text into a QR module grid.
pub trait Encoder {
    /// Encodes `text` at `level`, picking the smallest symbol that fits.
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<ModuleGrid>;
}

/// [`Encoder`] backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl Encoder for QrcodeEncoder {
    fn encode(&self, text: &str, level: ErrorCorrection) -> Result<ModuleGrid> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), level.into()).map_err(
            |e| GenerateError::EncodingCapacity {
                text: text.to_string(),
                reason: e.to_string(),
            },
        )?;

        let width = code.width() as u32;
        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        debug!(width, ?level, "Encoded QR symbol");

        let count = modules.len();
        ModuleGrid::new(width, modules).ok_or(GenerateError::MalformedGrid {
            width,
            modules: count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_payload_fits_version_1() {
        let grid = QrcodeEncoder.encode("Hello ESP32!", ErrorCorrection::Low).unwrap();
        assert_eq!(grid.width(), 21);
    }

    #[test]
    fn test_grid_grows_with_payload() {
        let short = QrcodeEncoder.encode("SMALL TEST", ErrorCorrection::Low).unwrap();
        let long = QrcodeEncoder
            .encode("https://github.com/espressif/esp32-camera", ErrorCorrection::Low)
            .unwrap();
        assert!(long.width() > short.width());
        assert_eq!((long.width() - 17) % 4, 0);
    }

    #[test]
    fn test_higher_level_never_shrinks_symbol() {
        let text = "https://www.espressif.com";
        let low = QrcodeEncoder.encode(text, ErrorCorrection::Low).unwrap();
        let high = QrcodeEncoder.encode(text, ErrorCorrection::High).unwrap();
        assert!(high.width() >= low.width());
    }

    #[test]
    fn test_empty_text_encodes() {
        let grid = QrcodeEncoder.encode("", ErrorCorrection::Low).unwrap();
        assert_eq!(grid.width(), 21);
    }

    #[test]
    fn test_oversized_payload_is_capacity_error() {
        // Version 40-L holds at most 2953 bytes.
        let text = "x".repeat(3000);
        match QrcodeEncoder.encode(&text, ErrorCorrection::Low) {
            Err(GenerateError::EncodingCapacity { text: t, .. }) => assert_eq!(t.len(), 3000),
            other => panic!("expected capacity error, got {other:?}"),
        }
    }

    #[test]
    fn test_finder_pattern_corner() {
        let grid = QrcodeEncoder.encode("QR Scanner Test", ErrorCorrection::Low).unwrap();
        // Top-left finder: dark ring, light ring, dark core.
        assert!(grid.get_module(0, 0));
        assert!(grid.get_module(6, 6));
        assert!(!grid.get_module(1, 1));
        assert!(grid.get_module(3, 3));
        assert!(!grid.get_module(7, 7));
    }

    #[test]
    fn test_out_of_bounds_is_light() {
        let grid = ModuleGrid::new(2, vec![true; 4]).unwrap();
        assert!(grid.get_module(1, 1));
        assert!(!grid.get_module(-1, 0));
        assert!(!grid.get_module(0, 2));
    }

    #[test]
    fn test_grid_rejects_wrong_length() {
        assert!(ModuleGrid::new(3, vec![false; 8]).is_none());
        let err = GenerateError::MalformedGrid {
            width: 3,
            modules: 8,
        };
        assert_eq!(err.to_string(), "encoder returned 8 modules for a grid 3 wide");
    }
}
