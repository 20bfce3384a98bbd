//! Fixed settings for a fixture batch.

use std::path::PathBuf;

use image::Luma;

use crate::encoder::ErrorCorrection;

/// Directory the batch writes into, relative to the working directory.
pub const OUTPUT_DIR: &str = "qr_codes";

/// How a module grid is drawn: pixel size per module, quiet-zone width and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width and height of one module, in pixels.
    pub box_size: u32,
    /// Quiet zone around the symbol, in modules.
    pub border: u32,
    pub foreground: Luma<u8>,
    pub background: Luma<u8>,
}

impl RenderConfig {
    /// Black on white with the given scale.
    pub const fn new(box_size: u32, border: u32) -> Self {
        Self {
            box_size,
            border,
            foreground: Luma([0]),
            background: Luma([255]),
        }
    }

    /// Close-up preset.
    pub const fn small() -> Self {
        Self::new(5, 2)
    }

    /// Distance preset.
    pub const fn large() -> Self {
        Self::new(15, 6)
    }

    /// Side length in pixels of a rendered symbol that is `module_count` modules wide,
    /// or `None` if it does not fit in a `u32`.
    pub fn image_side(&self, module_count: u32) -> Option<u32> {
        self.border
            .checked_mul(2)?
            .checked_add(module_count)?
            .checked_mul(self.box_size)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(10, 4)
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub error_correction: ErrorCorrection,
    pub default_render: RenderConfig,
    pub small_render: RenderConfig,
    pub large_render: RenderConfig,
}

impl GeneratorConfig {
    /// Same presets, different output directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            error_correction: ErrorCorrection::Low,
            default_render: RenderConfig::default(),
            small_render: RenderConfig::small(),
            large_render: RenderConfig::large(),
        }
    }
}
