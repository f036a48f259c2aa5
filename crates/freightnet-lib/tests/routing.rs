//! End-to-end route planning over the public API.

mod common;

use freightnet_lib::{
    all_paths, compare_routes, plan_route, Error, RouteRequest, SearchLimits,
};

#[test]
fn self_route_is_trivial_for_every_node() {
    let network = common::sample();
    for (id, _) in network.nodes() {
        let plan = plan_route(&network, &RouteRequest::new(id.clone(), id.clone()))
            .unwrap()
            .expect("self route always exists");
        assert_eq!(plan.stops, vec![id]);
        assert_eq!(plan.cost, 0.0);
    }
}

#[test]
fn concrete_triangle_scenario() {
    let network = common::triangle();
    let plan = plan_route(&network, &RouteRequest::new("A", "C"))
        .unwrap()
        .expect("route exists");
    assert_eq!(plan.stops, vec!["A", "B", "C"]);
    assert_eq!(plan.cost, 15.0);

    let comparison = compare_routes(&network, &RouteRequest::new("A", "C")).unwrap();
    assert_eq!(comparison.routes.len(), 2);
    assert_eq!(comparison.routes[0].stops, vec!["A", "B", "C"]);
    assert_eq!(comparison.routes[0].cost, 15.0);
    assert_eq!(comparison.routes[1].stops, vec!["A", "C"]);
    assert_eq!(comparison.routes[1].cost, 30.0);
}

#[test]
fn triangle_without_detour_edge_falls_back_to_direct_route() {
    let mut network = common::triangle();
    network.remove_edge("A", "B").unwrap();
    let plan = plan_route(&network, &RouteRequest::new("A", "C"))
        .unwrap()
        .expect("direct route remains");
    assert_eq!(plan.stops, vec!["A", "C"]);
    assert_eq!(plan.cost, 30.0);
}

#[test]
fn unreachable_pairs_are_independent_per_direction() {
    let network = common::triangle();
    // C has no out-edges: unreachable from C, but A reaches C.
    assert!(plan_route(&network, &RouteRequest::new("C", "A"))
        .unwrap()
        .is_none());
    assert!(plan_route(&network, &RouteRequest::new("A", "C"))
        .unwrap()
        .is_some());
}

#[test]
fn unknown_endpoints_are_reported_distinctly_from_unreachable() {
    let network = common::triangle();
    let err = plan_route(&network, &RouteRequest::new("A", "Nowhere")).unwrap_err();
    assert!(matches!(err, Error::UnknownNode { .. }));
}

#[test]
fn sample_network_cheapest_routes() {
    let network = common::sample();
    let plan = plan_route(&network, &RouteRequest::new("Sao Paulo", "Curitiba"))
        .unwrap()
        .expect("route exists");
    assert_eq!(plan.stops, vec!["Sao Paulo", "Sorocaba", "Curitiba"]);
    assert_eq!(plan.cost, 370.0);

    let plan = plan_route(&network, &RouteRequest::new("Sao Paulo", "Rio de Janeiro"))
        .unwrap()
        .expect("route exists");
    assert_eq!(plan.stops, vec!["Sao Paulo", "Rio de Janeiro"]);
    assert_eq!(plan.cost, 430.0);
}

#[test]
fn comparison_minimum_matches_plan_on_sample_network() {
    let network = common::sample();
    for customer in network.customers().to_vec() {
        let request = RouteRequest::new("Sao Paulo", customer);
        let plan = plan_route(&network, &request).unwrap().unwrap();
        let comparison = compare_routes(&network, &request).unwrap();
        assert_eq!(comparison.routes[0].cost, plan.cost);
    }
}

#[test]
fn enumeration_respects_the_path_cap() {
    let network = common::sample();
    let limits = SearchLimits { max_paths: Some(2) };
    let paths = all_paths(&network, "Sao Paulo", "Belo Horizonte", &limits);
    assert_eq!(paths.len(), 2);
    let unbounded = all_paths(
        &network,
        "Sao Paulo",
        "Belo Horizonte",
        &SearchLimits::default(),
    );
    assert!(unbounded.len() > 2);
}
