//! Init command handler: write the sample scenario file.

use std::path::Path;

use anyhow::{Context, Result};
use freightnet_lib::Scenario;

pub fn run(output: &Path) -> Result<()> {
    let json = Scenario::sample()
        .to_json_pretty()
        .context("failed to serialize sample scenario")?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write scenario to {}", output.display()))?;
    println!("Sample network written to {}", output.display());
    Ok(())
}
