//! `uninotas history` command - saved results for the signed-in user

use crate::commands::dispatch::CommandContext;
use crate::commands::format::outcome_cell;
use crate::commands::helpers::signed_in_user;
use crate::output_by_format_result;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::history::{history_view, HistoryView, SemesterSelection};
use uninotas_core::repository::RecordRepository;

pub const EMPTY_HISTORY: &str = "No hay registros de notas guardados";

/// Execute the history command
pub fn execute(ctx: &CommandContext, selection: &SemesterSelection) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = signed_in_user(&store, "Debes iniciar sesión para ver tus notas")?;

    let records = store.db().load_records_for(&user.id)?;
    let view = history_view(records, selection);
    let show_ids = store.config().display.show_ids;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok::<(), UninotasError>(())
        },
        human => {
            print_human(&view, show_ids, ctx.cli.quiet);
        }
    )
}

fn print_human(view: &HistoryView, show_ids: bool, quiet: bool) {
    if view.records.is_empty() {
        println!("{}", EMPTY_HISTORY);
        return;
    }

    if !quiet {
        if let Some(semester) = &view.selected {
            println!("Semestre: {}", semester);
        }
        if view.semesters.len() > 1 {
            println!("Semestres disponibles: {}", view.semesters.join(", "));
        }
        println!();
    }

    let width = view
        .records
        .iter()
        .map(|r| r.course_name.chars().count())
        .chain(std::iter::once("Asignatura".len()))
        .max()
        .unwrap_or_default();

    let mut header = format!(
        "{:<width$}  {:>7}  {:>7}  {:>9}",
        "Asignatura", "Corte 1", "Corte 2", "Requerida"
    );
    if show_ids {
        header.push_str("  ID");
    }
    println!("{}", header);

    for record in &view.records {
        let mut line = format!(
            "{:<width$}  {:>7}  {:>7}  {:>9}",
            record.course_name,
            record.first_score.to_string(),
            record.second_score.to_string(),
            outcome_cell(&record.outcome)
        );
        if show_ids {
            line.push_str("  ");
            line.push_str(record.id.as_str());
        }
        println!("{}", line);
    }
}
