//! Network description files.
//!
//! A scenario is a small hand-authored JSON document listing nodes (with
//! roles) and weighted edges. [`Scenario::build`] validates edge costs and
//! materializes a [`Network`]; [`Scenario::sample`] is the built-in
//! seven-city example network used by the CLI when no file is given.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Network, NodeRole};

/// One node declaration in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioNode {
    pub id: String,
    #[serde(default)]
    pub role: NodeRole,
}

/// One edge declaration in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioEdge {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// A serializable network description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<ScenarioNode>,
    pub edges: Vec<ScenarioEdge>,
}

impl Scenario {
    /// Parse a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading scenario");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the scenario as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Materialize the scenario into a network.
    ///
    /// Edge costs must be finite and non-negative. Edge endpoints that were
    /// not declared under `nodes` are auto-created as intermediates.
    pub fn build(&self) -> Result<Network> {
        for edge in &self.edges {
            if !edge.cost.is_finite() || edge.cost < 0.0 {
                return Err(Error::InvalidCost {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    cost: edge.cost,
                });
            }
        }

        let mut network = Network::new();
        for node in &self.nodes {
            network.add_node(node.id.clone(), node.role);
        }
        for edge in &self.edges {
            network.add_edge(edge.from.clone(), edge.to.clone(), edge.cost);
        }
        debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            "scenario built"
        );
        Ok(network)
    }

    /// The built-in example network: one warehouse, three intermediate hubs,
    /// three customers, fourteen roads.
    pub fn sample() -> Self {
        let node = |id: &str, role: NodeRole| ScenarioNode {
            id: id.to_string(),
            role,
        };
        let edge = |from: &str, to: &str, cost: f64| ScenarioEdge {
            from: from.to_string(),
            to: to.to_string(),
            cost,
        };
        Self {
            name: Some("Brazilian distribution network".to_string()),
            nodes: vec![
                node("Sao Paulo", NodeRole::Warehouse),
                node("Campinas", NodeRole::Intermediate),
                node("Ribeirao Preto", NodeRole::Intermediate),
                node("Sorocaba", NodeRole::Intermediate),
                node("Rio de Janeiro", NodeRole::Customer),
                node("Belo Horizonte", NodeRole::Customer),
                node("Curitiba", NodeRole::Customer),
            ],
            edges: vec![
                edge("Sao Paulo", "Campinas", 100.0),
                edge("Sao Paulo", "Sorocaba", 90.0),
                edge("Sao Paulo", "Ribeirao Preto", 310.0),
                edge("Campinas", "Rio de Janeiro", 350.0),
                edge("Campinas", "Belo Horizonte", 580.0),
                edge("Campinas", "Sorocaba", 120.0),
                edge("Sorocaba", "Curitiba", 280.0),
                edge("Sorocaba", "Campinas", 120.0),
                edge("Ribeirao Preto", "Belo Horizonte", 520.0),
                edge("Ribeirao Preto", "Campinas", 220.0),
                edge("Sao Paulo", "Rio de Janeiro", 430.0),
                edge("Sao Paulo", "Curitiba", 410.0),
                edge("Rio de Janeiro", "Belo Horizonte", 440.0),
                edge("Belo Horizonte", "Curitiba", 980.0),
            ],
        }
    }
}
