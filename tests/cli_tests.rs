//! Command-line tests for the snp-annotator binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("snp-annotator").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_analyze_text_output() {
    cmd()
        .args(["analyze", &fixture("valid_genera.csv"), "--vendor", "genera"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 catalogued markers"))
        .stdout(predicate::str::contains("rs4680"))
        .stdout(predicate::str::contains("Personal Characteristics"));
}

#[test]
fn test_analyze_json_output() {
    let output = cmd()
        .args([
            "analyze",
            &fixture("valid_genera.csv"),
            "--vendor",
            "genera",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["groups"][0]["name"], "personal_characteristics");
    assert_eq!(json["groups"][0]["results"][0]["marker"]["id"], "rs4680");
    assert_eq!(json["groups"][0]["results"][0]["pair"], 5);
}

#[test]
fn test_analyze_tsv_from_stdin() {
    let raw = std::fs::read_to_string(fixture("genome_23andme.txt")).unwrap();

    cmd()
        .args(["analyze", "-", "--vendor", "23andme", "--format", "tsv"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("marker\tgroup\tgenotype"))
        .stdout(predicate::str::contains("rs9939609\tMedical Conditions\tTA\t9\t"));
}

#[test]
fn test_analyze_group_filter() {
    cmd()
        .args([
            "analyze",
            &fixture("genome_23andme.txt"),
            "--vendor",
            "23andme",
            "--group",
            "medical-conditions",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("rs9939609"))
        .stdout(predicate::str::contains("rs4680").not());
}

#[test]
fn test_analyze_unsupported_vendor() {
    cmd()
        .args(["analyze", &fixture("valid_genera.csv"), "--vendor", "nebula"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported vendor: nebula"));
}

#[test]
fn test_analyze_missing_file() {
    cmd()
        .args(["analyze", "does-not-exist.csv", "--vendor", "genera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_markers_list_and_show() {
    cmd()
        .args(["markers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marker Catalog (11 markers)"));

    cmd()
        .args(["markers", "show", "rs4680"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marker: rs4680"))
        .stdout(predicate::str::contains("GA"));

    cmd()
        .args(["markers", "show", "rs0000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_markers_export_reloads() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("catalog.json");

    cmd()
        .args(["markers", "export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 11 markers"));

    cmd()
        .args([
            "markers",
            "list",
            "--catalog",
            out.to_str().unwrap(),
            "--group",
            "medical-conditions",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("rs7216389"))
        .stdout(predicate::str::contains("rs4680").not());
}

#[test]
fn test_genotype_encode_decode() {
    cmd()
        .args(["genotype", "encode", "AT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value:     9"))
        .stdout(predicate::str::contains("Canonical: TA (heterozygous)"));

    cmd()
        .args(["genotype", "decode", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Canonical: TT (homozygous)"));

    cmd()
        .args(["genotype", "decode", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid genotype value"));
}

#[test]
fn test_vendors_list() {
    cmd()
        .arg("vendors")
        .assert()
        .success()
        .stdout(predicate::str::contains("genera"))
        .stdout(predicate::str::contains("23andme"))
        .stdout(predicate::str::contains("ancestrydna"))
        .stdout(predicate::str::contains("myheritage"));
}
