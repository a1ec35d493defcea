//! `uninotas calc` command - required third-assessment score
//!
//! Works without a store. `--save` additionally stores the result for the
//! signed-in user.

use serde_json::json;
use tracing::debug;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::outcome_message;
use crate::commands::helpers::signed_in_user;
use crate::output_by_format_result;
use uninotas_core::bail_usage;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::grade::{compute_required_grade_for, AssessmentScore};
use uninotas_core::record::{CourseRecord, NewCourseRecord};
use uninotas_core::repository::RecordRepository;

/// Options for persisting a calculation
pub struct SaveOptions<'a> {
    pub course: Option<&'a str>,
    pub semester: Option<&'a str>,
}

fn parse_score(text: &str, ordinal: &str) -> Result<AssessmentScore> {
    AssessmentScore::parse(text).map_err(|_| {
        UninotasError::UsageError(format!(
            "La nota del {} corte debe ser un número decimal válido (ejemplo: 2.70)",
            ordinal
        ))
    })
}

/// Execute the calc command
pub fn execute(
    ctx: &CommandContext,
    first: &str,
    second: &str,
    save: Option<SaveOptions>,
) -> Result<()> {
    let first = parse_score(first, "primer")?;
    let second = parse_score(second, "segundo")?;

    let outcome = compute_required_grade_for(first, second);
    debug!(%first, %second, status = outcome.status(), "computed required grade");

    let record = match save {
        Some(options) => Some(save_record(ctx, first, second, options)?),
        None => None,
    };

    let cli = ctx.cli;
    output_by_format_result!(cli.format,
        json => {
            let mut output = json!({
                "first": first,
                "second": second,
                "outcome": outcome,
            });
            if let (Some(record), Some(obj)) = (&record, output.as_object_mut()) {
                obj.insert("record".to_string(), serde_json::to_value(record)?);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), UninotasError>(())
        },
        human => {
            println!("{}", outcome_message(&outcome));
            if let Some(record) = &record {
                if !cli.quiet {
                    println!("Notas guardadas correctamente ({})", record.id);
                }
            }
        }
    )
}

fn save_record(
    ctx: &CommandContext,
    first: AssessmentScore,
    second: AssessmentScore,
    options: SaveOptions,
) -> Result<CourseRecord> {
    let store = ctx.discover_or_open_store()?;
    let user = signed_in_user(&store, "Debes iniciar sesión para guardar tus notas")?;

    let course = options.course.map(str::trim).unwrap_or_default();
    if course.is_empty() {
        bail_usage!("Ingresa el nombre de la asignatura");
    }

    let Some(semester) = store.config().resolve_semester(options.semester) else {
        bail_usage!("Ingresa el semestre");
    };

    let record = CourseRecord::create(NewCourseRecord {
        owner: &user.id,
        course_name: course,
        semester: &semester,
        first_score: first,
        second_score: second,
    })?;

    store.db().append_record(&record)?;
    tracing::info!(record = %record.id, %semester, "saved record");

    Ok(record)
}
