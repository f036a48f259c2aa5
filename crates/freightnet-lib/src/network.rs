//! In-memory model of a directed, cost-weighted distribution network.
//!
//! One node may carry the warehouse role at a time; customer-tagged nodes are
//! tracked in a roster used by network-wide analyses. The model is a simple
//! directed graph: at most one edge per ordered pair, re-adding overwrites the
//! cost. All operations assume single-threaded, sequential access; analysis
//! routines that temporarily mutate the model take `&mut Network` so the
//! borrow checker rules out overlapping mutation windows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Classification attached to each node in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// The single designated origin for network-wide route computations.
    Warehouse,
    /// A hub that is neither origin nor tracked destination.
    #[default]
    Intermediate,
    /// A destination tracked in the customer roster.
    Customer,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            NodeRole::Warehouse => "warehouse",
            NodeRole::Intermediate => "intermediate",
            NodeRole::Customer => "customer",
        };
        f.write_str(value)
    }
}

/// Outgoing edge within the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub to: String,
    pub cost: f64,
}

/// Aggregate statistics over the current network topology.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStats {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub warehouse: Option<String>,
    pub customers: Vec<String>,
    /// Node with the highest degree centrality, if the network is non-empty.
    pub most_connected: Option<(String, f64)>,
}

/// Directed weighted graph plus the derived warehouse/customer bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Network {
    roles: HashMap<String, NodeRole>,
    /// Per-node out-edges in insertion order; enumeration discovery order
    /// follows this order, so it must stay deterministic.
    adjacency: HashMap<String, Vec<Edge>>,
    warehouse: Option<String>,
    /// Nodes currently tagged `Customer`, in first-tagged order.
    roster: Vec<String>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the role of an existing one.
    ///
    /// Tagging a node `Warehouse` demotes any previously designated warehouse
    /// to `Intermediate`, keeping the single-warehouse invariant observable.
    /// The customer roster tracks live membership: re-tagging a customer away
    /// removes it, re-tagging it back appends it at the end.
    pub fn add_node(&mut self, id: impl Into<String>, role: NodeRole) {
        let id = id.into();
        let previous = self.roles.get(&id).copied();

        if previous == Some(NodeRole::Customer) && role != NodeRole::Customer {
            self.roster.retain(|c| c != &id);
        }
        if self.warehouse.as_deref() == Some(id.as_str()) && role != NodeRole::Warehouse {
            self.warehouse = None;
        }

        match role {
            NodeRole::Warehouse => {
                if let Some(prior) = self.warehouse.take() {
                    if prior != id {
                        self.roles.insert(prior, NodeRole::Intermediate);
                    }
                }
                self.warehouse = Some(id.clone());
            }
            NodeRole::Customer => {
                if previous != Some(NodeRole::Customer) {
                    self.roster.push(id.clone());
                }
            }
            NodeRole::Intermediate => {}
        }

        self.roles.insert(id.clone(), role);
        self.adjacency.entry(id).or_default();
    }

    /// Insert a directed edge, or overwrite the cost of an existing one.
    ///
    /// Endpoints that were never declared are auto-created with the
    /// `Intermediate` role.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, cost: f64) {
        let from = from.into();
        let to = to.into();
        for id in [&from, &to] {
            if !self.roles.contains_key(id) {
                debug!(node = %id, "auto-creating undeclared edge endpoint");
                self.add_node(id.clone(), NodeRole::Intermediate);
            }
        }

        let edges = self.adjacency.entry(from).or_default();
        match edges.iter_mut().find(|edge| edge.to == to) {
            Some(edge) => edge.cost = cost,
            None => edges.push(Edge { to, cost }),
        }
    }

    /// Position of the edge `(from, to)` in `from`'s out-edge vector.
    pub(crate) fn edge_index(&self, from: &str, to: &str) -> Option<usize> {
        self.adjacency
            .get(from)?
            .iter()
            .position(|edge| edge.to == to)
    }

    /// Re-insert an edge at a specific position in `from`'s out-edge vector.
    ///
    /// Analysis windows restore through this instead of [`Network::add_edge`]
    /// so a remove-and-restore cycle leaves the discovery order untouched.
    pub(crate) fn restore_edge_at(&mut self, from: &str, index: usize, to: String, cost: f64) {
        let edges = self.adjacency.entry(from.to_string()).or_default();
        let index = index.min(edges.len());
        edges.insert(index, Edge { to, cost });
    }

    /// Delete a directed edge.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let edges = self.adjacency.get_mut(from).ok_or_else(|| Error::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;
        let index = edges
            .iter()
            .position(|edge| edge.to == to)
            .ok_or_else(|| Error::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })?;
        edges.remove(index);
        Ok(())
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.roles.contains_key(id)
    }

    pub fn node_role(&self, id: &str) -> Option<NodeRole> {
        self.roles.get(id).copied()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge_cost(from, to).is_some()
    }

    pub fn edge_cost(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.cost)
    }

    /// Outgoing edges for a node, in insertion order. Unknown nodes yield an
    /// empty slice.
    pub fn out_edges(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, node: &str) -> usize {
        self.out_edges(node).len()
    }

    pub fn in_degree(&self, node: &str) -> usize {
        self.adjacency
            .values()
            .flat_map(|edges| edges.iter())
            .filter(|edge| edge.to == node)
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.roles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Edge count over the maximum possible for a simple directed graph.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n <= 1 {
            return 0.0;
        }
        self.edge_count() as f64 / (n * (n - 1)) as f64
    }

    /// Mean of in-degree plus out-degree over all nodes.
    pub fn average_degree(&self) -> f64 {
        let n = self.node_count();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / n as f64
    }

    /// Degree centrality per node: (in + out) / (n - 1), sorted by id.
    pub fn degree_centrality(&self) -> Vec<(String, f64)> {
        let n = self.node_count();
        if n <= 1 {
            return self.roles.keys().map(|id| (id.clone(), 0.0)).collect();
        }
        let mut centrality: Vec<(String, f64)> = self
            .roles
            .keys()
            .map(|id| {
                let degree = self.in_degree(id) + self.out_degree(id);
                (id.clone(), degree as f64 / (n - 1) as f64)
            })
            .collect();
        centrality.sort_by(|a, b| a.0.cmp(&b.0));
        centrality
    }

    /// All nodes with their roles, sorted by id.
    pub fn nodes(&self) -> Vec<(String, NodeRole)> {
        let mut nodes: Vec<(String, NodeRole)> = self
            .roles
            .iter()
            .map(|(id, role)| (id.clone(), *role))
            .collect();
        nodes.sort_by(|a, b| a.0.cmp(&b.0));
        nodes
    }

    /// All edges with their costs, sorted by (from, to). This is the stable
    /// order the robustness analysis iterates in.
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        let mut edges: Vec<(String, String, f64)> = self
            .adjacency
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .map(move |edge| (from.clone(), edge.to.clone(), edge.cost))
            })
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        edges
    }

    pub fn warehouse(&self) -> Option<&str> {
        self.warehouse.as_deref()
    }

    pub fn customers(&self) -> &[String] {
        &self.roster
    }

    /// Package the statistics panel in one query.
    pub fn stats(&self) -> NetworkStats {
        let most_connected = self
            .degree_centrality()
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1));
        NetworkStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            density: self.density(),
            average_degree: self.average_degree(),
            warehouse: self.warehouse.clone(),
            customers: self.roster.clone(),
            most_connected,
        }
    }

    /// Closest known node ids to `name` by Jaro-Winkler similarity.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(String, f64)> = self
            .roles
            .keys()
            .map(|id| (id.clone(), strsim::jaro_winkler(&needle, &id.to_lowercase())))
            .filter(|(_, score)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.into_iter().take(limit).map(|(id, _)| id).collect()
    }
}
