use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn show_by_symbol_prints_details() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.args(["show", "S", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sulfur"))
        .stdout(predicate::str::contains("16, 3, p"))
        .stdout(predicate::str::contains("[Ne] 3s² 3p⁴"))
        .stdout(predicate::str::contains("388.36 K"));
}

#[test]
fn show_honors_temperature_unit_flag() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.args(["show", "16", "-t", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("115.21 °C"));
}

#[test]
fn list_filters_by_prefix() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.args(["list", "-f", "h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hydrogen"))
        .stdout(predicate::str::contains("Mercury"))
        .stdout(predicate::str::contains("Carbon").not());
}

#[test]
fn list_sorts_by_name_descending() {
    let mut cmd = cargo_bin_cmd!("elementary");
    let output = cmd.args(["list", "--sort", "name", "--desc"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert!(first.ends_with("Zirconium"), "{}", first);
}

#[test]
fn asc_flag_overrides_configured_descending_direction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[list]\ndirection = \"desc\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("elementary");
    let output = cmd
        .arg("--config")
        .arg(&path)
        .args(["list", "--asc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().next().unwrap().ends_with("Hydrogen"));
}

#[test]
fn table_prints_grid_with_subtext() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.args(["table", "--subtext", "density"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Density (g/cm³)"))
        .stdout(predicate::str::contains("Og"));
}

#[test]
fn verify_reports_full_dataset() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified 118 elements"));
}

#[test]
fn config_file_settings_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\ntemperature-unit = \"F\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.arg("--config")
        .arg(&path)
        .args(["show", "sulfur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("°F"));
}

#[test]
fn unknown_element_exits_non_zero() {
    let mut cmd = cargo_bin_cmd!("elementary");
    cmd.args(["show", "Xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
