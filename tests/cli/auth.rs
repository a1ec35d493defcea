use crate::support::{init_store, json_stdout, uninotas};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Auth command tests
// ============================================================================

#[test]
fn test_signup_signs_in() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "Ana@Example.com", "--password", "clave123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cuenta creada: ana@example.com"));

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout("ana@example.com\n");
}

#[test]
fn test_signup_duplicate_email() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "ana@example.com", "--password", "clave123"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "ana@example.com", "--password", "otra4567"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_signup_short_password() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "ana@example.com", "--password", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 6 characters"));
}

#[test]
fn test_signup_invalid_email() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "sin-arroba", "--password", "clave123"])
        .assert()
        .code(2);
}

#[test]
fn test_logout_then_login() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "ana@example.com", "--password", "clave123"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sesión cerrada"));

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout("Sin sesión\n");

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "login", "ana@example.com", "--password", "incorrecta"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid email or password"));

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "login", "ana@example.com", "--password", "clave123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sesión iniciada: ana@example.com"));
}

#[test]
fn test_password_from_environment() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .env("UNINOTAS_PASSWORD", "clave123")
        .args(["auth", "signup", "ana@example.com"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "logout"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .env("UNINOTAS_PASSWORD", "clave123")
        .args(["auth", "login", "ana@example.com"])
        .assert()
        .success();
}

#[test]
fn test_missing_password() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "login", "ana@example.com"])
        .assert()
        .code(2);
}

#[test]
fn test_guest_session() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "guest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Continuando como invitado"));

    let json = json_stdout(
        uninotas()
            .current_dir(dir.path())
            .args(["--format", "json", "auth", "whoami"]),
    );
    assert_eq!(json["session"]["state"], "guest");
}

#[test]
fn test_whoami_json_signed_in() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    let created = json_stdout(uninotas().current_dir(dir.path()).args([
        "--format",
        "json",
        "auth",
        "signup",
        "ana@example.com",
        "--password",
        "clave123",
    ]));
    assert_eq!(created["status"], "created");
    assert!(created["user"]["id"].as_str().unwrap().starts_with("usr-"));

    let json = json_stdout(
        uninotas()
            .current_dir(dir.path())
            .args(["--format", "json", "auth", "whoami"]),
    );
    assert_eq!(json["session"]["state"], "signed_in");
    assert_eq!(json["session"]["user"]["email"], "ana@example.com");
    assert_eq!(json["session"]["user"]["id"], created["user"]["id"]);
}

#[test]
fn test_password_hash_not_plaintext() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "ana@example.com", "--password", "clave123"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(dir.path().join(".uninotas/uninotas.db")).unwrap();
    let hash: String = conn
        .query_row(
            "SELECT password_hash FROM users WHERE email = 'ana@example.com'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(hash.len(), 64);
    assert!(!hash.contains("clave123"));
}
