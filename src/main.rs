//! Writes the scanner test fixtures into `./qr_codes`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use qr_fixtures::{BatchGenerator, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let generator = BatchGenerator::new(GeneratorConfig::default());
    let manifest = generator
        .run()
        .inspect_err(|e| tracing::error!("Fixture generation failed: {e}"))
        .context("QR fixture generation aborted")?;

    println!();
    print!("{manifest}");
    Ok(())
}
