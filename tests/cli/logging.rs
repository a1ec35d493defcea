use crate::support::uninotas;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    uninotas()
        .args(["--log-level", "debug", "calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    uninotas()
        .args(["calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_shows_debug_messages() {
    uninotas()
        .args(["--verbose", "calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("execute_command"));
}

#[test]
fn test_log_level_overrides_verbose() {
    uninotas()
        .args(["--verbose", "--log-level", "warn", "calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_env_filter_override() {
    uninotas()
        .env("UNINOTAS_LOG", "uninotas=debug")
        .args(["calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_format() {
    uninotas()
        .args(["--log-json", "--log-level", "debug", "calc", "3", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_logs_do_not_pollute_stdout() {
    uninotas()
        .args(["--log-level", "debug", "calc", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_args").not());
}
