//! # qr-fixtures
//!
//! Generates a fixed batch of QR code PNGs for hand-testing an ESP32-S3 camera QR scanner.
//!
//! Fifteen sample strings (one of them a timestamp taken at run time) are rendered at the
//! default scale as `qr_codes/qr_code_01.png` .. `qr_code_15.png`, followed by `qr_small.png`
//! and `qr_large.png` for close-up and distance checks. Symbols use low error correction and
//! the smallest version that fits.
//!
//! Encoding is delegated to the [`qrcode`](https://docs.rs/qrcode) crate behind the
//! [`Encoder`] trait; drawing goes through [`Rasterizer`], so either side can be swapped.
//!
//! ## Example
//!
//! ```no_run
//! use qr_fixtures::{BatchGenerator, GeneratorConfig};
//!
//! let manifest = BatchGenerator::new(GeneratorConfig::default()).run()?;
//! println!("{manifest}");
//! # Ok::<(), qr_fixtures::GenerateError>(())
//! ```
//!
//! ## Modules
//!
//! - [`payload`]: the sample strings and their file names.
//! - [`encoder`]: text to module grid.
//! - [`render`]: module grid to PNG.
//! - [`batch`]: the batch job and its manifest.

pub mod batch;
pub mod config;
pub mod encoder;
pub mod error;
pub mod payload;
pub mod render;

pub use batch::{Artifact, BatchGenerator, Manifest};
pub use config::{GeneratorConfig, RenderConfig};
pub use encoder::{Encoder, ErrorCorrection, ModuleGrid, QrcodeEncoder};
pub use error::GenerateError;
pub use render::{GrayRasterizer, Rasterizer};
