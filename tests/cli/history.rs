use crate::support::{init_store, init_with_user, json_stdout, save_record, uninotas};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// History command tests
// ============================================================================

#[test]
fn test_history_empty() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    uninotas()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay registros de notas guardados"));
}

#[test]
fn test_history_requires_user() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .code(4);
}

#[test]
fn test_history_lists_first_semester_by_default() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    let calc = save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");
    save_record(dir.path(), "Química", "2023-2", "0", "0");
    save_record(dir.path(), "Física", "2024-1", "5", "5");

    uninotas()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Semestre: 2024-1"))
        .stdout(predicate::str::contains("Semestres disponibles: 2024-1, 2023-2"))
        .stdout(predicate::str::contains("Cálculo"))
        .stdout(predicate::str::contains("3.56"))
        .stdout(predicate::str::contains("Aprobado"))
        .stdout(predicate::str::contains(calc.as_str()))
        .stdout(predicate::str::contains("Química").not());
}

#[test]
fn test_history_named_semester() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");
    save_record(dir.path(), "Química", "2023-2", "0", "0");

    uninotas()
        .current_dir(dir.path())
        .args(["history", "--semester", "2023-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Química"))
        .stdout(predicate::str::contains("Imposible"))
        .stdout(predicate::str::contains("Cálculo").not());
}

#[test]
fn test_history_all_json() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");
    save_record(dir.path(), "Química", "2023-2", "0", "0");

    let json = json_stdout(
        uninotas()
            .current_dir(dir.path())
            .args(["--format", "json", "history", "--all"]),
    );
    assert!(json["selected"].is_null());
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["course_name"], "Cálculo");
    assert_eq!(records[0]["first_score"], 2.7);
    assert_eq!(records[1]["outcome"]["status"], "impossible");
    assert_eq!(json["semesters"][1], "2023-2");
}

#[test]
fn test_history_semester_conflicts_with_all() {
    uninotas()
        .args(["history", "--all", "--semester", "2024-1"])
        .assert()
        .code(2);
}

#[test]
fn test_history_hides_ids_when_configured() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");
    let id = save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");

    std::fs::write(
        dir.path().join(".uninotas/config.toml"),
        "version = 1\n\n[display]\nshow_ids = false\n",
    )
    .unwrap();

    uninotas()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cálculo"))
        .stdout(predicate::str::contains(id.as_str()).not());
}

#[test]
fn test_history_is_per_user() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");
    save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "signup", "luis@example.com", "--password", "clave456"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay registros de notas guardados"));
}
