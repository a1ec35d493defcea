use crate::support::{init_store, init_with_user, json_stdout, uninotas};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Calc command tests
// ============================================================================

#[test]
fn test_calc_required_score() {
    let dir = tempdir().unwrap();

    // No store needed to calculate
    uninotas()
        .current_dir(dir.path())
        .args(["calc", "2.70", "2.70"])
        .assert()
        .success()
        .stdout(
            "Necesitas obtener al menos 3.56 en el tercer corte (35%) para aprobar la asignatura con 3.0.\n",
        );
}

#[test]
fn test_calc_already_passed() {
    uninotas()
        .args(["calc", "5", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "¡Felicidades! Ya has aprobado la asignatura con las notas actuales.",
        ));
}

#[test]
fn test_calc_impossible() {
    uninotas()
        .args(["calc", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lo sentimos, no es posible obtener un 3.0 en la asignatura con las notas actuales.",
        ));
}

#[test]
fn test_calc_exact_three_shows_two_decimals() {
    uninotas()
        .args(["calc", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("al menos 3.00 en el tercer corte"));
}

#[test]
fn test_calc_invalid_first_score() {
    uninotas()
        .args(["calc", "5.01", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "La nota del primer corte debe ser un número decimal válido (ejemplo: 2.70)",
        ));
}

#[test]
fn test_calc_invalid_second_score() {
    uninotas()
        .args(["calc", "3", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "La nota del segundo corte debe ser un número decimal válido",
        ));
}

#[test]
fn test_calc_negative_score() {
    uninotas()
        .args(["calc", "--", "-1", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("La nota del primer corte"));
}

#[test]
fn test_calc_json() {
    let json = json_stdout(uninotas().args(["--format", "json", "calc", "2.7", "2.7"]));
    assert_eq!(json["first"], 2.7);
    assert_eq!(json["second"], 2.7);
    assert_eq!(json["outcome"]["status"], "required");
    assert_eq!(json["outcome"]["value"], 3.56);
    assert!(json.get("record").is_none());

    let json = json_stdout(uninotas().args(["--format", "json", "calc", "0", "0"]));
    assert_eq!(json["outcome"]["status"], "impossible");
}

#[test]
fn test_calc_invalid_json_envelope() {
    let output = uninotas()
        .args(["--format", "json", "calc", "2.700", "3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_course_requires_save_flag() {
    uninotas()
        .args(["calc", "3", "3", "--course", "Cálculo"])
        .assert()
        .code(2);
}

// ============================================================================
// Saving results
// ============================================================================

#[test]
fn test_save_requires_signed_in_user() {
    let dir = tempdir().unwrap();
    init_store(dir.path());

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--course", "Cálculo", "--semester", "2024-1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Debes iniciar sesión para guardar tus notas"));

    uninotas()
        .current_dir(dir.path())
        .args(["auth", "guest"])
        .assert()
        .success();

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--course", "Cálculo", "--semester", "2024-1"])
        .assert()
        .code(4);
}

#[test]
fn test_save_without_store() {
    let dir = tempdir().unwrap();
    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--course", "Cálculo", "--semester", "2024-1"])
        .assert()
        .code(3);
}

#[test]
fn test_save_record() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "2.7", "2.7", "--save", "--course", "Cálculo", "--semester", "2024-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Necesitas obtener al menos 3.56"))
        .stdout(predicate::str::contains("Notas guardadas correctamente (rec-"));
}

#[test]
fn test_save_requires_course() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--semester", "2024-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ingresa el nombre de la asignatura"));

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--course", "   ", "--semester", "2024-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ingresa el nombre de la asignatura"));
}

#[test]
fn test_save_requires_semester() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    uninotas()
        .current_dir(dir.path())
        .args(["calc", "3", "3", "--save", "--course", "Cálculo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ingresa el semestre"));
}

#[test]
fn test_save_uses_default_semester() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");
    fs::write(
        dir.path().join(".uninotas/config.toml"),
        "version = 1\ndefault_semester = \"2025-1\"\n",
    )
    .unwrap();

    let json = json_stdout(uninotas().current_dir(dir.path()).args([
        "--format", "json", "calc", "4", "4", "--save", "--course", "Física",
    ]));
    assert_eq!(json["record"]["semester"], "2025-1");
    assert_eq!(json["record"]["course_name"], "Física");
    assert_eq!(json["record"]["outcome"]["status"], "required");
    assert_eq!(json["record"]["outcome"]["value"], 1.14);
}

#[test]
fn test_saved_outcome_columns() {
    let dir = tempdir().unwrap();
    init_with_user(dir.path(), "ana@example.com");

    crate::support::save_record(dir.path(), "Cálculo", "2024-1", "2.7", "2.7");
    crate::support::save_record(dir.path(), "Física", "2024-1", "5", "5");

    let conn = rusqlite::Connection::open(dir.path().join(".uninotas/uninotas.db")).unwrap();
    let mut stmt = conn
        .prepare("SELECT outcome, required_score FROM records ORDER BY seq")
        .unwrap();
    let rows: Vec<(String, Option<f64>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(
        rows,
        vec![
            ("required".to_string(), Some(3.56)),
            ("already_passed".to_string(), None),
        ]
    );
}
