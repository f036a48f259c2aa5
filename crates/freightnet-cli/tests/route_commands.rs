use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("freightnet-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_uses_the_builtin_sample_network() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Curitiba")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path: Sao Paulo -> Sorocaba -> Curitiba",
        ))
        .stdout(predicate::str::contains("Cost: 370"));
}

#[test]
fn route_json_output_parses() {
    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("route")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Curitiba")
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(plan["cost"], 370.0);
    assert_eq!(plan["stops"][1], "Sorocaba");
}

#[test]
fn unknown_node_error_is_friendly() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Curitba")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node: Curitba"))
        .stderr(predicate::str::contains("Did you mean 'Curitiba'"));
}

#[test]
fn missing_route_fails_with_a_message() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Sao Paulo")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no route found from Curitiba to Sao Paulo",
        ));
}

#[test]
fn compare_ranks_routes_by_cost() {
    cli()
        .arg("compare")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Rio de Janeiro")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Routes Sao Paulo -> Rio de Janeiro: 4 found",
        ))
        .stdout(predicate::str::contains(
            "1. Sao Paulo -> Rio de Janeiro (cost 430)",
        ));
}

#[test]
fn compare_top_truncates_with_a_suffix() {
    cli()
        .arg("compare")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Rio de Janeiro")
        .arg("--top")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("... and 2 more"));
}

#[test]
fn route_loads_a_scenario_file() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{
            "nodes": [
                {"id": "Depot", "role": "warehouse"},
                {"id": "Shop", "role": "customer"}
            ],
            "edges": [{"from": "Depot", "to": "Shop", "cost": 7.0}]
        }"#,
    )
    .expect("write scenario");

    cli()
        .arg("--network")
        .arg(&path)
        .arg("route")
        .arg("--from")
        .arg("Depot")
        .arg("--to")
        .arg("Shop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: Depot -> Shop"))
        .stdout(predicate::str::contains("Cost: 7"));
}

#[test]
fn init_writes_a_loadable_scenario() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("network.json");

    cli()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample network written to"));

    cli()
        .arg("--network")
        .arg(&path)
        .arg("route")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Curitiba")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 370"));
}
