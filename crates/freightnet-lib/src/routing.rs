//! Route planning facade over the exhaustive search.
//!
//! This module provides:
//! - [`RouteRequest`] - High-level route query (origin, destination, limits)
//! - [`RoutePlan`] - Planned route result
//! - [`RouteComparison`] - All alternative routes, ranked by cost
//! - [`plan_route`] / [`compare_routes`] - Entry points
//!
//! Endpoint names are validated up front: a name that was never added to the
//! network is an input error (with fuzzy suggestions), reported distinctly
//! from "present but unreachable", which is a normal `None`/empty result.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::Network;
use crate::path::{cheapest_path, ranked_paths, CostedPath, SearchLimits};

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub limits: SearchLimits,
}

impl RouteRequest {
    /// Convenience constructor with unbounded enumeration.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            limits: SearchLimits::default(),
        }
    }

    /// Cap the number of enumerated paths.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.limits.max_paths = Some(max_paths);
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    pub stops: Vec<String>,
    pub cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// Every route between a pair of endpoints, sorted ascending by cost.
#[derive(Debug, Clone, Serialize)]
pub struct RouteComparison {
    pub origin: String,
    pub destination: String,
    pub routes: Vec<CostedPath>,
}

/// Validate that `name` is a known node, producing fuzzy suggestions when not.
fn resolve_node(network: &Network, name: &str) -> Result<()> {
    if network.has_node(name) {
        return Ok(());
    }
    Err(Error::UnknownNode {
        name: name.to_string(),
        suggestions: network.fuzzy_node_matches(name, 3),
    })
}

/// Compute the minimum-cost route for a request.
///
/// Returns `Ok(None)` when both endpoints exist but no directed path connects
/// them; unknown endpoint names are an error.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<Option<RoutePlan>> {
    resolve_node(network, &request.origin)?;
    resolve_node(network, &request.destination)?;

    let Some(path) = cheapest_path(network, &request.origin, &request.destination, &request.limits)
    else {
        return Ok(None);
    };
    if path.stops.is_empty() {
        return Err(Error::EmptyRoutePlan);
    }
    Ok(Some(RoutePlan {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        stops: path.stops,
        cost: path.cost,
    }))
}

/// Enumerate and rank every route for a request. An empty `routes` vector
/// means the destination is unreachable.
pub fn compare_routes(network: &Network, request: &RouteRequest) -> Result<RouteComparison> {
    resolve_node(network, &request.origin)?;
    resolve_node(network, &request.destination)?;

    Ok(RouteComparison {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        routes: ranked_paths(network, &request.origin, &request.destination, &request.limits),
    })
}
