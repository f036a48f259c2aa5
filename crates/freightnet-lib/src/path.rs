//! Exhaustive simple-path enumeration over the network.
//!
//! Route questions are answered by enumerating every simple path between two
//! nodes and selecting among them, rather than by a polynomial-time
//! shortest-path algorithm. That brute-force behaviour is the documented
//! contract of the engine (including its exponential blow-up on dense or
//! cyclic networks) and must not be swapped for Dijkstra or friends. The
//! search keeps a visited set local to the current path and releases it on
//! backtrack, so every call is self-contained and reentrant-safe.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::network::Network;

/// A concrete route through the network: the stops visited, in order, and the
/// summed edge cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostedPath {
    pub stops: Vec<String>,
    pub cost: f64,
}

impl CostedPath {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// Optional bounds on the enumeration. The defaults reproduce the unbounded
/// behaviour; `max_paths` is a defensive valve for degenerate inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Stop after recording this many paths (in discovery order).
    pub max_paths: Option<usize>,
}

/// Enumerate every simple path from `origin` to `destination`.
///
/// Returns an empty vector when either endpoint is absent from the network or
/// when no directed path exists. When origin and destination coincide the
/// result is the single trivial path with cost 0. Discovery order is
/// deterministic: out-edges are explored in insertion order.
pub fn all_paths(
    network: &Network,
    origin: &str,
    destination: &str,
    limits: &SearchLimits,
) -> Vec<CostedPath> {
    if !network.has_node(origin) || !network.has_node(destination) {
        return Vec::new();
    }
    if origin == destination {
        return vec![CostedPath {
            stops: vec![origin.to_string()],
            cost: 0.0,
        }];
    }

    let mut found = Vec::new();
    let mut stops = vec![origin.to_string()];
    let mut visited = HashSet::new();
    visited.insert(origin.to_string());
    extend(
        network,
        origin,
        destination,
        &mut stops,
        0.0,
        &mut visited,
        &mut found,
        limits,
    );
    debug!(
        origin,
        destination,
        paths = found.len(),
        "path enumeration complete"
    );
    found
}

/// Depth-first extension of the current path along every admissible out-edge.
#[allow(clippy::too_many_arguments)]
fn extend(
    network: &Network,
    current: &str,
    destination: &str,
    stops: &mut Vec<String>,
    cost: f64,
    visited: &mut HashSet<String>,
    found: &mut Vec<CostedPath>,
    limits: &SearchLimits,
) {
    for edge in network.out_edges(current) {
        if let Some(cap) = limits.max_paths {
            if found.len() >= cap {
                debug!(cap, "path cap reached, stopping enumeration early");
                return;
            }
        }
        if visited.contains(&edge.to) {
            continue;
        }
        stops.push(edge.to.clone());
        let extended_cost = cost + edge.cost;
        if edge.to == destination {
            found.push(CostedPath {
                stops: stops.clone(),
                cost: extended_cost,
            });
        } else {
            visited.insert(edge.to.clone());
            extend(
                network,
                &edge.to,
                destination,
                stops,
                extended_cost,
                visited,
                found,
                limits,
            );
            visited.remove(&edge.to);
        }
        stops.pop();
    }
}

/// Minimum-cost path from `origin` to `destination`, or `None` when no path
/// exists. Ties on cost resolve to the first path found in discovery order.
pub fn cheapest_path(
    network: &Network,
    origin: &str,
    destination: &str,
    limits: &SearchLimits,
) -> Option<CostedPath> {
    all_paths(network, origin, destination, limits)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.cost < best.cost {
                candidate
            } else {
                best
            }
        })
}

/// Every path from `origin` to `destination`, sorted ascending by cost. Ties
/// keep their discovery order.
pub fn ranked_paths(
    network: &Network,
    origin: &str,
    destination: &str,
    limits: &SearchLimits,
) -> Vec<CostedPath> {
    let mut paths = all_paths(network, origin, destination, limits);
    paths.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    paths
}
