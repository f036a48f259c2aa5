use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("freightnet-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn simulate_reports_baseline_and_fallback_routes() {
    cli()
        .arg("simulate")
        .arg("--from")
        .arg("Sao Paulo")
        .arg("--to")
        .arg("Sorocaba")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Simulated failure of road Sao Paulo -> Sorocaba (cost 90)",
        ))
        .stdout(predicate::str::contains("Customer Curitiba"))
        .stdout(predicate::str::contains(
            "Before: Sao Paulo -> Sorocaba -> Curitiba (cost 370)",
        ))
        .stdout(predicate::str::contains("cost 410"));
}

#[test]
fn simulate_missing_road_fails() {
    cli()
        .arg("simulate")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Sao Paulo")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no edge from Curitiba to Sao Paulo",
        ));
}

#[test]
fn robustness_classifies_detour_roads_and_flags_cut_risk_nodes() {
    cli()
        .arg("robustness")
        .assert()
        .success()
        .stdout(predicate::str::contains("Robustness report (14 roads)"))
        .stdout(predicate::str::contains("Sao Paulo -> Sorocaba: important"))
        .stdout(predicate::str::contains("Cut-risk nodes: 3"))
        .stdout(predicate::str::contains("Ribeirao Preto (in-degree 1"));
}

#[test]
fn robustness_json_output_parses() {
    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("robustness")
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    let edges = report["edges"].as_array().expect("edges array");
    assert_eq!(edges.len(), 14);
    for edge in edges {
        let severity = edge["severity"].as_str().expect("severity string");
        assert!(matches!(severity, "critical" | "important" | "neutral"));
    }
}

#[test]
fn stats_summarizes_the_sample_network() {
    cli()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 7"))
        .stdout(predicate::str::contains("Roads: 14"))
        .stdout(predicate::str::contains("Warehouse: Sao Paulo"))
        .stdout(predicate::str::contains(
            "Customers: Rio de Janeiro, Belo Horizonte, Curitiba",
        ))
        .stdout(predicate::str::contains("Most connected: Campinas"));
}
