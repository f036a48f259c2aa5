//! Robustness command handler: per-road classification and cut-risk nodes.

use std::path::Path;

use anyhow::Result;
use freightnet_lib::{analyze_robustness, EdgeSeverity};

use crate::output::{print_json, OutputFormat};

pub fn run(scenario: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut network = super::load_network(scenario)?;
    let report = analyze_robustness(&mut network)?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!("Robustness report ({} roads)", report.edges.len());
            for assessment in &report.edges {
                println!(
                    "  {} -> {}: {}",
                    assessment.from, assessment.to, assessment.severity
                );
                if !assessment.severed.is_empty() {
                    println!("    Unreachable customers: {}", assessment.severed.join(", "));
                }
                if assessment.severity == EdgeSeverity::Important {
                    for increase in &assessment.increases {
                        println!(
                            "    {}: cost {} -> {} (+{})",
                            increase.customer, increase.before, increase.after, increase.increase
                        );
                    }
                }
            }
            println!("Cut-risk nodes: {}", report.cut_risk.len());
            for node in &report.cut_risk {
                println!(
                    "  {} (in-degree {}, out-degree {})",
                    node.id, node.in_degree, node.out_degree
                );
            }
            Ok(())
        }
    }
}
