//! One handler module per subcommand.

pub mod compare;
pub mod init;
pub mod robustness;
pub mod route;
pub mod simulate;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use freightnet_lib::{Network, Scenario};

/// Load the network from a scenario file, or fall back to the built-in
/// sample when no file was given.
pub fn load_network(scenario: Option<&Path>) -> Result<Network> {
    let scenario = match scenario {
        Some(path) => Scenario::from_path(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => Scenario::sample(),
    };
    scenario.build().context("failed to build network")
}
