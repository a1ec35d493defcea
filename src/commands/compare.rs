//! `uninotas compare` command - per-semester statistics

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::signed_in_user;
use crate::commands::history::EMPTY_HISTORY;
use crate::output_by_format_result;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::repository::RecordRepository;
use uninotas_core::stats::{compare_semesters, SemesterStatistics};

/// Execute the compare command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = ctx.discover_or_open_store()?;
    let user = signed_in_user(&store, "Debes iniciar sesión para comparar semestres")?;

    let records = store.db().load_records_for(&user.id)?;
    let stats = compare_semesters(&records);

    output_by_format_result!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "semesters": stats }))?
            );
            Ok::<(), UninotasError>(())
        },
        human => {
            print_human(&stats);
        }
    )
}

fn print_human(stats: &[SemesterStatistics]) {
    if stats.is_empty() {
        println!("{}", EMPTY_HISTORY);
        return;
    }

    let width = stats
        .iter()
        .map(|s| s.semester.chars().count())
        .chain(std::iter::once("Semestre".len()))
        .max()
        .unwrap_or_default();

    println!(
        "{:<width$}  {:>6}  {:>9}  {:>10}  {:>9}  {:>11}  {:>12}",
        "Semestre", "Cursos", "Aprobadas", "Imposibles", "Promedio", "% aprobadas", "% imposibles"
    );

    for s in stats {
        let average = s
            .average_required
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<width$}  {:>6}  {:>9}  {:>10}  {:>9}  {:>10}%  {:>11}%",
            s.semester,
            s.course_count,
            s.passed_count,
            s.failed_count,
            average,
            s.passed_pct,
            s.failed_pct
        );
    }
}
