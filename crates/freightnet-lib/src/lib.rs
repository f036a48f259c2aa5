//! freightnet library entry points.
//!
//! This crate models a directed, cost-weighted distribution network (one
//! warehouse, intermediate hubs, customers) and answers route-planning
//! questions over it: minimum-cost routes, ranked alternatives, single-edge
//! failure simulation, and a network-wide robustness report. Higher-level
//! consumers (the CLI, dashboards) should only depend on the items exported
//! here instead of reimplementing behavior.
//!
//! Route questions are answered by exhaustive simple-path enumeration; see
//! [`path`] for why that is the contract rather than a shortcoming. The model
//! is single-threaded: analyses that temporarily mutate the network take it
//! by `&mut` and always restore it before returning.

#![deny(warnings)]

pub mod analysis;
pub mod error;
pub mod network;
pub mod path;
pub mod routing;
pub mod scenario;

pub use analysis::{
    analyze_robustness, simulate_edge_failure, with_edge_removed, CostIncrease, CustomerOutcome,
    CutRiskNode, EdgeAssessment, EdgeSeverity, FailureReport, RobustnessReport,
};
pub use error::{Error, Result};
pub use network::{Edge, Network, NetworkStats, NodeRole};
pub use path::{all_paths, cheapest_path, ranked_paths, CostedPath, SearchLimits};
pub use routing::{compare_routes, plan_route, RouteComparison, RoutePlan, RouteRequest};
pub use scenario::{Scenario, ScenarioEdge, ScenarioNode};
