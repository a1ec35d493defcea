//! Spanish user-facing text for grade outcomes

use uninotas_core::grade::RequiredGrade;

/// Full sentence shown after a calculation
pub fn outcome_message(outcome: &RequiredGrade) -> String {
    match outcome {
        RequiredGrade::Required(value) => format!(
            "Necesitas obtener al menos {:.2} en el tercer corte (35%) para aprobar la asignatura con 3.0.",
            value
        ),
        RequiredGrade::AlreadyPassed => {
            "¡Felicidades! Ya has aprobado la asignatura con las notas actuales.".to_string()
        }
        RequiredGrade::Impossible => {
            "Lo sentimos, no es posible obtener un 3.0 en la asignatura con las notas actuales."
                .to_string()
        }
    }
}

/// Short label for table cells
pub fn outcome_cell(outcome: &RequiredGrade) -> String {
    match outcome {
        RequiredGrade::Required(value) => format!("{:.2}", value),
        RequiredGrade::AlreadyPassed => "Aprobado".to_string(),
        RequiredGrade::Impossible => "Imposible".to_string(),
    }
}
