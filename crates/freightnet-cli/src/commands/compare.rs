//! Compare command handler: every route between two nodes, ranked by cost.

use std::path::Path;

use anyhow::Result;
use freightnet_lib::{compare_routes, RouteRequest};

use crate::output::{format_stops, print_json, OutputFormat};

pub fn run(
    scenario: Option<&Path>,
    from: &str,
    to: &str,
    top: usize,
    max_paths: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let network = super::load_network(scenario)?;
    let mut request = RouteRequest::new(from, to);
    if let Some(cap) = max_paths {
        request = request.with_max_paths(cap);
    }
    let comparison = compare_routes(&network, &request)?;

    match format {
        OutputFormat::Json => print_json(&comparison),
        OutputFormat::Text => {
            if comparison.routes.is_empty() {
                println!(
                    "No routes found from {} to {}",
                    comparison.origin, comparison.destination
                );
                return Ok(());
            }
            println!(
                "Routes {} -> {}: {} found",
                comparison.origin,
                comparison.destination,
                comparison.routes.len()
            );
            for (index, route) in comparison.routes.iter().take(top).enumerate() {
                println!(
                    "  {}. {} (cost {})",
                    index + 1,
                    format_stops(&route.stops),
                    route.cost
                );
            }
            if comparison.routes.len() > top {
                println!("  ... and {} more", comparison.routes.len() - top);
            }
            Ok(())
        }
    }
}
