//! Failure simulation and robustness synthesis.
//!
//! Both analyses work by temporarily removing one edge from the network,
//! re-running route queries against the mutated topology, and restoring the
//! edge before returning. The removal window is expressed as a scoped
//! mutation: [`with_edge_removed`] takes `&mut Network`, captures the cost
//! before removal, and restores on every exit path via a drop guard, so the
//! caller can never observe the edge-removed state outside the window and
//! overlapping windows are rejected by the borrow checker. These routines are
//! not reentrant by construction.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::Network;
use crate::path::{cheapest_path, CostedPath, SearchLimits};

/// Restores the removed edge when the mutation window closes, including on
/// unwind. The edge goes back at its original position in the from-node's
/// out-edge vector: that order is the DFS discovery order and tie-break, so
/// an append-style restore would change which equal-cost path wins.
struct RestoreEdge<'a> {
    network: &'a mut Network,
    from: &'a str,
    to: &'a str,
    cost: f64,
    index: usize,
}

impl Drop for RestoreEdge<'_> {
    fn drop(&mut self) {
        self.network
            .restore_edge_at(self.from, self.index, self.to.to_string(), self.cost);
    }
}

/// Run `body` against the network with the edge `(from, to)` removed.
///
/// The edge's cost is captured before removal and the edge is restored with
/// that cost before this function returns, on every exit path. Fails with
/// [`Error::EdgeNotFound`] when the edge does not exist.
pub fn with_edge_removed<T>(
    network: &mut Network,
    from: &str,
    to: &str,
    body: impl FnOnce(&Network) -> T,
) -> Result<T> {
    let cost = network
        .edge_cost(from, to)
        .ok_or_else(|| Error::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    let index = network.edge_index(from, to).ok_or_else(|| Error::EdgeNotFound {
        from: from.to_string(),
        to: to.to_string(),
    })?;
    network.remove_edge(from, to)?;
    let guard = RestoreEdge {
        network,
        from,
        to,
        cost,
        index,
    };
    let value = body(&*guard.network);
    drop(guard);
    Ok(value)
}

/// Outcome of a single-edge failure for one customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerOutcome {
    pub customer: String,
    /// Cheapest warehouse route on the intact network.
    pub baseline: Option<CostedPath>,
    /// Cheapest warehouse route with the edge removed.
    pub fallback: Option<CostedPath>,
}

/// Result of simulating the failure of one edge.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub outcomes: Vec<CustomerOutcome>,
}

/// Simulate the failure of the edge `(from, to)` and report, per customer,
/// the baseline route and the best fallback route.
///
/// Baselines are computed on the intact network before the edge is removed.
/// A missing warehouse or an empty roster degrades to an empty outcome list.
pub fn simulate_edge_failure(
    network: &mut Network,
    from: &str,
    to: &str,
) -> Result<FailureReport> {
    let cost = network
        .edge_cost(from, to)
        .ok_or_else(|| Error::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    let limits = SearchLimits::default();

    let mut baselines = Vec::new();
    if let Some(warehouse) = network.warehouse().map(str::to_string) {
        for customer in network.customers().to_vec() {
            let baseline = cheapest_path(network, &warehouse, &customer, &limits);
            baselines.push((customer, baseline));
        }
    }

    let outcomes = with_edge_removed(network, from, to, |view| {
        let warehouse = view.warehouse().map(str::to_string);
        baselines
            .into_iter()
            .map(|(customer, baseline)| {
                let fallback = warehouse
                    .as_deref()
                    .and_then(|w| cheapest_path(view, w, &customer, &limits));
                CustomerOutcome {
                    customer,
                    baseline,
                    fallback,
                }
            })
            .collect()
    })?;

    Ok(FailureReport {
        from: from.to_string(),
        to: to.to_string(),
        cost,
        outcomes,
    })
}

/// Classification of one edge in the robustness report. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSeverity {
    /// Removal makes at least one warehouse-to-customer route impossible.
    Critical,
    /// Removal strictly increases at least one route's cost.
    Important,
    /// Removal changes nothing for the tracked routes.
    Neutral,
}

impl std::fmt::Display for EdgeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            EdgeSeverity::Critical => "critical",
            EdgeSeverity::Important => "important",
            EdgeSeverity::Neutral => "neutral",
        };
        f.write_str(value)
    }
}

/// Cost increase for one customer when an edge is removed.
#[derive(Debug, Clone, Serialize)]
pub struct CostIncrease {
    pub customer: String,
    pub before: f64,
    pub after: f64,
    pub increase: f64,
}

/// Robustness verdict for one edge.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeAssessment {
    pub from: String,
    pub to: String,
    pub severity: EdgeSeverity,
    /// Customers whose warehouse route disappears when the edge is removed.
    pub severed: Vec<String>,
    pub increases: Vec<CostIncrease>,
    pub total_increase: f64,
}

/// Node flagged by the degree-1 heuristic as a likely single point of
/// failure. This is a purely structural check, not a verified cut vertex.
#[derive(Debug, Clone, Serialize)]
pub struct CutRiskNode {
    pub id: String,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Full robustness report: one assessment per edge plus cut-risk nodes.
#[derive(Debug, Clone, Serialize)]
pub struct RobustnessReport {
    pub edges: Vec<EdgeAssessment>,
    pub cut_risk: Vec<CutRiskNode>,
}

/// Assess every edge in the network by removing it, recomputing each
/// customer's cheapest warehouse route, and comparing against baselines
/// captured on the intact network.
///
/// Edges are visited in the stable `(from, to)` order of [`Network::edges`];
/// each one is restored before the next is assessed. Without a warehouse or
/// customers every edge is `neutral` and the cut-risk pass still runs.
pub fn analyze_robustness(network: &mut Network) -> Result<RobustnessReport> {
    let limits = SearchLimits::default();
    let warehouse = network.warehouse().map(str::to_string);
    let customers = network.customers().to_vec();

    // Pre-removal minimum costs, captured once on the intact network.
    let mut baselines: HashMap<String, Option<f64>> = HashMap::new();
    if let Some(warehouse) = warehouse.as_deref() {
        for customer in &customers {
            let cost = cheapest_path(network, warehouse, customer, &limits).map(|p| p.cost);
            baselines.insert(customer.clone(), cost);
        }
    }

    let mut assessments = Vec::new();
    for (from, to, _) in network.edges() {
        let (severed, increases) = with_edge_removed(network, &from, &to, |view| {
            let mut severed = Vec::new();
            let mut increases = Vec::new();
            if let Some(warehouse) = warehouse.as_deref() {
                for customer in &customers {
                    match cheapest_path(view, warehouse, customer, &limits) {
                        None => severed.push(customer.clone()),
                        Some(path) => {
                            if let Some(Some(before)) = baselines.get(customer) {
                                if path.cost > *before {
                                    increases.push(CostIncrease {
                                        customer: customer.clone(),
                                        before: *before,
                                        after: path.cost,
                                        increase: path.cost - before,
                                    });
                                }
                            }
                        }
                    }
                }
            }
            (severed, increases)
        })?;

        let total_increase: f64 = increases.iter().map(|i| i.increase).sum();
        let severity = if !severed.is_empty() {
            EdgeSeverity::Critical
        } else if total_increase > 0.0 {
            EdgeSeverity::Important
        } else {
            EdgeSeverity::Neutral
        };
        debug!(%from, %to, %severity, "edge assessed");
        assessments.push(EdgeAssessment {
            from,
            to,
            severity,
            severed,
            increases,
            total_increase,
        });
    }

    let cut_risk = network
        .nodes()
        .into_iter()
        .filter(|(id, _)| warehouse.as_deref() != Some(id.as_str()))
        .filter_map(|(id, _)| {
            let in_degree = network.in_degree(&id);
            let out_degree = network.out_degree(&id);
            (in_degree == 1 || out_degree == 1).then_some(CutRiskNode {
                id,
                in_degree,
                out_degree,
            })
        })
        .collect();

    Ok(RobustnessReport {
        edges: assessments,
        cut_risk,
    })
}
