//! Route command handler: minimum-cost route between two nodes.

use std::path::Path;

use anyhow::{bail, Result};
use freightnet_lib::{plan_route, RouteRequest};

use crate::output::{format_stops, print_json, OutputFormat};

pub fn run(
    scenario: Option<&Path>,
    from: &str,
    to: &str,
    max_paths: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let network = super::load_network(scenario)?;
    let mut request = RouteRequest::new(from, to);
    if let Some(cap) = max_paths {
        request = request.with_max_paths(cap);
    }

    let Some(plan) = plan_route(&network, &request)? else {
        bail!("no route found from {from} to {to}");
    };

    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Text => {
            println!("Route {} -> {}", plan.origin, plan.destination);
            println!("  Path: {}", format_stops(&plan.stops));
            println!("  Cost: {}", plan.cost);
            println!("  Hops: {}", plan.hop_count());
            Ok(())
        }
    }
}
