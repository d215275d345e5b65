use predicates::prelude::predicate;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("seedprint")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT"))
        .stdout(predicate::str::contains("SEED"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("seedprint")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("seedprint")
        .arg("--bogus")
        .output()
        .expect("run seedprint");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: serde_json::Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], "input_usage_error");
    assert_eq!(stderr["details"]["command"], "generate");
    assert_eq!(stderr["details"]["kind"], "cli_parse_error");
}

#[test]
fn extra_positional_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("seedprint")
        .args(["demo", "7", "extra"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty());
}
