//! Module grid to bitmap, and bitmap to PNG.

use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageFormat};
use tracing::debug;

use crate::config::RenderConfig;
use crate::encoder::ModuleGrid;
use crate::error::{GenerateError, Result};

/// Something that draws a module grid as a grayscale bitmap.
pub trait Rasterizer {
    fn render(&self, grid: &ModuleGrid, config: &RenderConfig) -> Result<GrayImage>;
}

/// Draws each module as a `box_size` square, framed by `border` light modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrayRasterizer;

impl Rasterizer for GrayRasterizer {
    fn render(&self, grid: &ModuleGrid, config: &RenderConfig) -> Result<GrayImage> {
        let invalid = || GenerateError::InvalidRenderConfig {
            box_size: config.box_size,
            border: config.border,
        };
        if config.box_size == 0 {
            return Err(invalid());
        }

        let side = config.image_side(grid.width()).ok_or_else(invalid)?;
        let border = i64::from(config.border);
        let box_size = config.box_size;
        let mut img = ImageBuffer::new(side, side);

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let qr_x = i64::from(x / box_size) - border;
            let qr_y = i64::from(y / box_size) - border;
            *pixel = if grid.get_module(qr_x, qr_y) {
                config.foreground
            } else {
                config.background
            };
        }

        debug!(
            modules = grid.width(),
            box_size, border, side, "Rasterized QR symbol"
        );
        Ok(img)
    }
}

/// Writes `img` to `path` as PNG, whatever the extension says.
pub fn save_png(img: &GrayImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenerateError::Filesystem {
            path: path.to_path_buf(),
            source,
        })
}
