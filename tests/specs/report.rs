//! Report output behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn text_report_for_passing_suite() {
    let dir = temp_project(&["arithmetic.spec"]);
    let output = spectra_cmd()
        .arg("arithmetic.spec")
        .current_dir(dir.path())
        .output()
        .unwrap();

    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\
arithmetic.spec
  adds numbers
    success: 1
    failure: 0
  multiplies
    success: 2
    failure: 0
  parsing
    parses integers
      success: 1
      failure: 0
    rejects garbage
      success: 1
      failure: 0
Success: 4
"
    );
}

#[test]
fn text_report_for_failing_suite() {
    let dir = temp_project(&["broken.spec"]);
    let output = spectra_cmd()
        .arg("broken.spec")
        .current_dir(dir.path())
        .output()
        .unwrap();

    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\
broken.spec
  wrong sum
    success: 0
    failure: 1
      2 == 3
  empty
    Spec appears to be empty. Specs must contain assertions or child specs.
    Spec did not finish. Did you use the spec callback?
  never finishes
    success: 1
    failure: 0
    Spec did not finish. Did you use the spec callback?
  out of order
    Spec did not finish. Did you use the spec callback?
Success: 0
Failure: 4
"
    );
}

#[test]
fn json_report_is_machine_readable() {
    let dir = temp_project(&["events.spec"]);
    let output = spectra_cmd()
        .args(["--output", "json", "events.spec"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["specs"][0]["title"], "events.spec");
    assert_eq!(json["specs"][0]["children"][0]["title"], "ticks in order");
    assert_eq!(json["specs"][0]["children"][0]["done"], true);
    assert_eq!(json["summary"]["failed"], 0);
}

#[test]
fn forced_color_emits_ansi_codes() {
    let dir = temp_project(&["broken.spec"]);
    spectra_cmd()
        .args(["--color", "always", "broken.spec"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b["));
}

#[test]
fn no_color_wins_over_forced_color() {
    let dir = temp_project(&["broken.spec"]);
    spectra_cmd()
        .args(["--color", "always", "--no-color", "broken.spec"])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}
