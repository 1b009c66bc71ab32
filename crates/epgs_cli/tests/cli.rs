//! CLI integration tests: drives the `epgs` binary end to end (`run`,
//! `verify`, `prove`) exactly as an operator would from a shell, rather
//! than calling into `epgs_pipeline` directly. Grounded on `vm_cli`'s
//! `assert_cmd`/`predicates` convention for binary-level tests.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_scenario(dir: &std::path::Path, scenario_id: &str) -> std::path::PathBuf {
    let body = format!(
        r#"{{
            "scenario_id": "{scenario_id}",
            "sector_label": "ENERGY",
            "requests": [
                {{"execution_id": "E1", "action_type": "IRREVERSIBLE", "sector_label": "ENERGY", "requested_at_ms": 0}}
            ],
            "temporal": [{{"step_index": 0, "stable_ms": 330, "jitter": false}}],
            "ube_vectors": [{{"step_index": 0, "phi": 0.9, "degradation_rate": 0.0, "risk_load": 0.05}}]
        }}"#
    );
    let path = dir.join(format!("{scenario_id}.json"));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn run_then_verify_succeed_and_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_path = write_scenario(dir.path(), "S-CLI-SAFE");
    let out_dir = dir.path().join("out");

    let mut run_cmd = Command::cargo_bin("epgs").unwrap();
    let run_assert = run_cmd
        .arg("run")
        .arg(&scenario_path)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("rblock_hash"));

    let stdout = String::from_utf8(run_assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("run prints JSON");
    let ledger_dir = value["ledger_dir"].as_str().unwrap();

    Command::cargo_bin("epgs")
        .unwrap()
        .arg("verify")
        .arg("--ledger-dir")
        .arg(ledger_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"));
}

#[test]
fn verify_on_an_empty_directory_fails_with_no_rblocks_found() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("epgs")
        .unwrap()
        .arg("verify")
        .arg("--ledger-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No R-Blocks found"));
}

#[test]
fn running_the_same_scenario_twice_into_the_same_ledger_is_an_immutability_violation() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_path = write_scenario(dir.path(), "S-CLI-DUP");
    let out_dir = dir.path().join("out");

    Command::cargo_bin("epgs")
        .unwrap()
        .arg("run")
        .arg(&scenario_path)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .success();

    Command::cargo_bin("epgs")
        .unwrap()
        .arg("run")
        .arg(&scenario_path)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn prove_over_a_directory_of_scenarios_exits_zero_and_reports_pass() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_dir = dir.path().join("scenarios");
    fs::create_dir_all(&scenario_dir).unwrap();
    write_scenario(&scenario_dir, "S-PROVE-A");
    write_scenario(&scenario_dir, "S-PROVE-B");

    Command::cargo_bin("epgs")
        .unwrap()
        .arg("prove")
        .arg(&scenario_dir)
        .arg("--out")
        .arg(dir.path().join("proof_out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Determinism Proof Result: PASS"));
}

#[test]
fn prove_over_an_empty_directory_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let scenario_dir = dir.path().join("empty");
    fs::create_dir_all(&scenario_dir).unwrap();

    Command::cargo_bin("epgs")
        .unwrap()
        .arg("prove")
        .arg(&scenario_dir)
        .arg("--out")
        .arg(dir.path().join("proof_out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scenario"));
}
