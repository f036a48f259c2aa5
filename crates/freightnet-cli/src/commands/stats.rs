//! Stats command handler: topology statistics panel.

use std::path::Path;

use anyhow::Result;

use crate::output::{print_json, OutputFormat};

pub fn run(scenario: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = super::load_network(scenario)?;
    let stats = network.stats();

    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Text => {
            println!("Network statistics");
            println!("  Nodes: {}", stats.nodes);
            println!("  Roads: {}", stats.edges);
            println!("  Density: {:.3}", stats.density);
            println!("  Average degree: {:.2}", stats.average_degree);
            match &stats.warehouse {
                Some(warehouse) => println!("  Warehouse: {warehouse}"),
                None => println!("  Warehouse: none"),
            }
            if stats.customers.is_empty() {
                println!("  Customers: none");
            } else {
                println!("  Customers: {}", stats.customers.join(", "));
            }
            if let Some((id, centrality)) = &stats.most_connected {
                println!("  Most connected: {id} (centrality {centrality:.3})");
            }
            Ok(())
        }
    }
}
