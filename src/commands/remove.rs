//! `uninotas remove` command - delete a saved result

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json_status;
use crate::commands::helpers::signed_in_user;
use crate::output_by_format_result;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::id::RecordId;
use uninotas_core::repository::RecordRepository;

/// Execute the remove command
///
/// Records owned by someone else are reported as not found.
pub fn execute(ctx: &CommandContext, raw_id: &str) -> Result<()> {
    let id = RecordId::parse(raw_id)?;

    let store = ctx.discover_or_open_store()?;
    let user = signed_in_user(&store, "Debes iniciar sesión para eliminar registros")?;

    let owned = store
        .db()
        .get_record(&id)?
        .is_some_and(|record| record.owner == user.id);

    if !owned || !store.db().remove_record(&id)? {
        return Err(UninotasError::not_found("record", &id));
    }

    tracing::info!(record = %id, "removed record");

    output_by_format_result!(ctx.cli.format,
        json => print_json_status("ok", Some("Registro eliminado correctamente"), &[("id", json!(id))]),
        human => {
            if !ctx.cli.quiet {
                println!("Registro eliminado correctamente");
            }
        }
    )
}
