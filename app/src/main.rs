use std::time::Instant;

use anyhow::Context;
use texture_core::{TextureConfig, TextureGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = TextureConfig::default();
    let output = config.output.clone();

    let start = Instant::now();
    let report = TextureGenerator::new(config)?
        .run()
        .with_context(|| format!("failed to generate {}", output.display()))?;

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        raw_min = report.raw_range.0,
        raw_max = report.raw_range.1,
        "done"
    );
    Ok(())
}
