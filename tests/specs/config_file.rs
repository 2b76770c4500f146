//! Config file behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn configured_files_run_without_arguments() {
    let dir = temp_project(&["arithmetic.spec"]);
    write_config(&dir, "files = [\"arithmetic.spec\"]\n");

    spectra_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("arithmetic.spec\n"));
}

#[test]
fn command_line_files_override_config() {
    let dir = temp_project(&["arithmetic.spec", "broken.spec"]);
    write_config(&dir, "files = [\"broken.spec\"]\n");

    spectra_cmd()
        .arg("arithmetic.spec")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("broken.spec").not());
}

#[test]
fn explicit_config_flag_is_used() {
    let dir = temp_project(&["events.spec"]);
    std::fs::write(
        dir.path().join("custom.toml"),
        "files = [\"events.spec\"]\n",
    )
    .unwrap();

    spectra_cmd()
        .args(["--config", "custom.toml"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("events.spec\n"));
}

#[test]
fn unknown_config_keys_warn() {
    let dir = temp_project(&["arithmetic.spec"]);
    write_config(&dir, "files = [\"arithmetic.spec\"]\nparallel = true\n");

    spectra_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `parallel`"));
}

#[test]
fn invalid_config_is_a_configuration_error() {
    let dir = temp_project(&["arithmetic.spec"]);
    write_config(&dir, "files = \"arithmetic.spec\"\n");

    spectra_cmd()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to load config"));
}
