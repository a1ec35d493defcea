//! `uninotas init` command - create a new store
//!
//! Idempotent: an existing store keeps its config and data.

use crate::cli::paths::resolve_store_path;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use uninotas_core::error::Result;
use uninotas_core::store::Store;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_store_path(ctx.root, path))?,
        None => Store::init(ctx.root)?,
    };

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "schema_version": store.db().schema_version()?,
                "message": "Store initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), uninotas_core::error::UninotasError>(())
        },
        human => {
            if !cli.quiet {
                println!("Initialized uninotas store at {}", store.root().display());
            }
        }
    )
}
