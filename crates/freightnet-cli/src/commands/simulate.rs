//! Simulate command handler: single-road failure with fallback routes.

use std::path::Path;

use anyhow::Result;
use freightnet_lib::{simulate_edge_failure, CostedPath};

use crate::output::{format_stops, print_json, OutputFormat};

pub fn run(scenario: Option<&Path>, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let mut network = super::load_network(scenario)?;
    let report = simulate_edge_failure(&mut network, from, to)?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "Simulated failure of road {} -> {} (cost {})",
                report.from, report.to, report.cost
            );
            if report.outcomes.is_empty() {
                println!("  No warehouse or customers configured; nothing to reroute.");
                return Ok(());
            }
            for outcome in &report.outcomes {
                println!("  Customer {}:", outcome.customer);
                println!("    Before: {}", describe(&outcome.baseline));
                println!("    After:  {}", describe(&outcome.fallback));
            }
            Ok(())
        }
    }
}

fn describe(route: &Option<CostedPath>) -> String {
    match route {
        Some(path) => format!("{} (cost {})", format_stops(&path.stops), path.cost),
        None => "no route available".to_string(),
    }
}
