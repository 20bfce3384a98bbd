//! The batch job: make the directory, render every payload, report what was written.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{GeneratorConfig, RenderConfig};
use crate::encoder::{Encoder, QrcodeEncoder};
use crate::error::{GenerateError, Result};
use crate::payload::{sample_payloads_now, ArtifactName, Payload, LARGE_TEST, SMALL_TEST};
use crate::render::{save_png, GrayRasterizer, Rasterizer};

const USAGE: [&str; 3] = [
    "Print or display these QR codes on your screen",
    "Point your ESP32 S3 camera at the QR codes",
    "Check the web interface for detection results",
];

/// One PNG written by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: ArtifactName,
    pub text: String,
    pub path: PathBuf,
    pub module_count: u32,
    /// Width and height in pixels.
    pub dimensions: (u32, u32),
}

/// Everything one run produced, in generation order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub output_dir: PathBuf,
    pub artifacts: Vec<Artifact>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, name: ArtifactName) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "All {} QR codes generated in '{}' directory!",
            self.len(),
            self.output_dir.display()
        )?;
        writeln!(f)?;
        writeln!(f, "QR Code Contents:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for (i, artifact) in self.artifacts.iter().enumerate() {
            let suffix = match artifact.name {
                ArtifactName::Indexed(_) => "",
                ArtifactName::Small => " (small size)",
                ArtifactName::Large => " (large size)",
            };
            writeln!(f, "{:2}. {}{}", i + 1, artifact.text, suffix)?;
        }
        writeln!(f)?;
        writeln!(f, "Usage Instructions:")?;
        for (i, step) in USAGE.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }
        Ok(())
    }
}

/// Renders payloads to PNG files with an injected encoder and rasterizer.
pub struct BatchGenerator<E = QrcodeEncoder, R = GrayRasterizer> {
    config: GeneratorConfig,
    encoder: E,
    rasterizer: R,
}

impl BatchGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_parts(config, QrcodeEncoder, GrayRasterizer)
    }
}

impl<E: Encoder, R: Rasterizer> BatchGenerator<E, R> {
    pub fn with_parts(config: GeneratorConfig, encoder: E, rasterizer: R) -> Self {
        Self {
            config,
            encoder,
            rasterizer,
        }
    }

    /// Encodes `text`, draws it with `render` and writes the PNG to `path`,
    /// replacing whatever was there. Errors carry both `text` and `path`.
    pub fn render_one(
        &self,
        name: ArtifactName,
        text: &str,
        path: &Path,
        render: &RenderConfig,
    ) -> Result<Artifact> {
        let artifact = self
            .write_symbol(name, text, path, render)
            .map_err(|source| GenerateError::PayloadFailed {
                text: text.to_string(),
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;
        println!("Generated QR code for '{}' -> {}", text, path.display());
        Ok(artifact)
    }

    fn write_symbol(
        &self,
        name: ArtifactName,
        text: &str,
        path: &Path,
        render: &RenderConfig,
    ) -> Result<Artifact> {
        let grid = self.encoder.encode(text, self.config.error_correction)?;
        let img = self.rasterizer.render(&grid, render)?;
        save_png(&img, path)?;

        Ok(Artifact {
            name,
            text: text.to_string(),
            path: path.to_path_buf(),
            module_count: grid.width(),
            dimensions: img.dimensions(),
        })
    }

    /// Creates the output directory if needed. An existing directory is fine.
    pub fn ensure_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
            path: dir.clone(),
            source,
        })
    }

    /// Renders `payloads` with the default scale, then the small and large specials.
    /// Stops at the first failure.
    pub fn run_with(&self, payloads: &[Payload]) -> Result<Manifest> {
        self.ensure_output_dir()?;
        info!(
            dir = %self.config.output_dir.display(),
            count = payloads.len(),
            "Generating fixture QR codes"
        );
        println!("Generating {} QR codes...", payloads.len());

        let specials = [
            (Payload::new(ArtifactName::Small, SMALL_TEST), self.config.small_render),
            (Payload::new(ArtifactName::Large, LARGE_TEST), self.config.large_render),
        ];
        let jobs = payloads
            .iter()
            .map(|p| (p, self.config.default_render))
            .chain(specials.iter().map(|(p, render)| (p, *render)));

        let mut artifacts = Vec::with_capacity(payloads.len() + specials.len());
        for (payload, render) in jobs {
            let path = self.config.output_dir.join(payload.name.file_name());
            artifacts.push(self.render_one(payload.name, &payload.text, &path, &render)?);
        }

        info!(count = artifacts.len(), "Fixture batch complete");
        Ok(Manifest {
            output_dir: self.config.output_dir.clone(),
            artifacts,
        })
    }

    /// The full fixture batch, timestamped now.
    pub fn run(&self) -> Result<Manifest> {
        self.run_with(&sample_payloads_now())
    }
}
