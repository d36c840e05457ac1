use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("launch_azimuth").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_reports_library_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(launch_azimuth_calculator::version()));
}

#[test]
fn default_run_reports_kennedy_to_iss() {
    cli()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Launch azimuth in degrees:\n42.7523\n137.2477\n")
                .and(predicate::str::contains("7729.516"))
                .and(predicate::str::contains("7446.546"))
                .and(predicate::str::contains("282.970")),
        );
}

#[test]
fn equatorial_launch_prints_a_single_azimuth() {
    cli()
        .args(["--inc", "0", "--alt", "0", "--lat", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Launch azimuth in degrees:\n90.0000\n\nOrbital speed",
        ));
}

#[test]
fn negative_altitude_is_rejected() {
    cli()
        .args(["--alt", "-1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("above sea level"));
}

#[test]
fn inclination_below_latitude_is_rejected() {
    cli()
        .args(["--inc", "10", "--lat", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be reached directly"));
}

#[test]
fn unreachable_retrograde_orbit_is_a_domain_error() {
    cli()
        .args(["--inc", "98", "--lat", "85"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no launch azimuth"));
}

#[test]
fn negative_inclination_is_accepted() {
    cli()
        .args(["--inc", "-51.6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42.7523"));
}

#[test]
fn kerbin_uses_its_own_defaults() {
    cli()
        .args(["--body", "kerbin", "--inc", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2270.576").and(predicate::str::contains("90.0000")));
}

#[test]
fn unknown_body_fails() {
    cli()
        .args(["--body", "Laythe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Laythe' not found"));
}

#[test]
fn list_bodies_includes_catalog_file_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duna.toml");
    std::fs::write(
        &path,
        "name = \"Duna\"\nmass_kg = 4.5154e21\nradius_m = 320000.0\nrotation_period_s = 65517.859\ndefault_altitude_m = 60000.0\n",
    )
    .unwrap();

    cli()
        .arg("--catalog")
        .arg(&path)
        .arg("--list-bodies")
        .assert()
        .success()
        .stdout("Earth\nKerbin\nKerbin64\nDuna\n");
}

#[test]
fn missing_catalog_file_fails_with_context() {
    cli()
        .args(["--catalog", "/nonexistent/bodies.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading body catalog"));
}

#[test]
fn json_output_is_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/run.json");

    cli()
        .args(["--format", "json", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["body"], "Earth");
    assert_eq!(doc["inputs"]["inclination_deg"], 51.6);
    let heading = doc["result"]["heading_deg"].as_f64().unwrap();
    assert!((heading - 42.752_282_7).abs() < 1e-6, "heading = {heading}");
}

#[test]
fn json_to_stdout_parses() {
    let output = cli().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(doc["result"]["alternate_heading_deg"].is_number());
}
