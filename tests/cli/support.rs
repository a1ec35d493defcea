use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for uninotas with a clean environment
pub fn uninotas() -> Command {
    let mut cmd = cargo_bin_cmd!("uninotas");
    cmd.env_remove("UNINOTAS_STORE")
        .env_remove("UNINOTAS_PASSWORD")
        .env_remove("UNINOTAS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Initialize a store in `dir`
pub fn init_store(dir: &Path) {
    uninotas().current_dir(dir).arg("init").assert().success();
}

/// Initialize a store in `dir` and sign up a user
pub fn init_with_user(dir: &Path, email: &str) {
    init_store(dir);
    uninotas()
        .current_dir(dir)
        .args(["auth", "signup", email, "--password", "clave123"])
        .assert()
        .success();
}

/// Save a calculation and return the new record ID
pub fn save_record(dir: &Path, course: &str, semester: &str, first: &str, second: &str) -> String {
    let output = uninotas()
        .current_dir(dir)
        .args([
            "--format",
            "json",
            "calc",
            first,
            second,
            "--save",
            "--course",
            course,
            "--semester",
            semester,
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "save failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    json["record"]["id"].as_str().unwrap().to_string()
}

/// Parse stdout of a successful JSON command
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
