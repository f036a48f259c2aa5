//! Shared fixture builders for integration tests.

use freightnet_lib::{Network, NodeRole};

/// Three-node network from the route-planning examples: warehouse A,
/// intermediate B, customer C; A->B 10, B->C 5, A->C 30.
#[allow(dead_code)]
pub fn triangle() -> Network {
    let mut network = Network::new();
    network.add_node("A", NodeRole::Warehouse);
    network.add_node("B", NodeRole::Intermediate);
    network.add_node("C", NodeRole::Customer);
    network.add_edge("A", "B", 10.0);
    network.add_edge("B", "C", 5.0);
    network.add_edge("A", "C", 30.0);
    network
}

/// The built-in seven-city sample network.
#[allow(dead_code)]
pub fn sample() -> Network {
    freightnet_lib::Scenario::sample()
        .build()
        .expect("sample scenario builds")
}
