//! `uninotas validate` command - check score texts

use serde_json::json;

use crate::cli::Cli;
use crate::output_by_format;
use uninotas_core::error::{Result, UninotasError};
use uninotas_core::grade::is_valid_score_text;

/// Execute the validate command
///
/// Prints one verdict per text. Fails with `InvalidScore` for the first
/// invalid text so scripts can rely on the exit code.
pub fn execute(cli: &Cli, texts: &[String]) -> Result<()> {
    let verdicts: Vec<(&str, bool)> = texts
        .iter()
        .map(|text| (text.as_str(), is_valid_score_text(text)))
        .collect();

    output_by_format!(cli.format,
        json => {
            let results: Vec<_> = verdicts
                .iter()
                .map(|(text, valid)| json!({ "text": text, "valid": valid }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!({ "results": results }))?);
        },
        human => {
            for (text, valid) in &verdicts {
                let verdict = if *valid { "válida" } else { "inválida" };
                println!("{:?}: {}", text, verdict);
            }
        }
    );

    match verdicts.iter().find(|(_, valid)| !valid) {
        Some((text, _)) => Err(UninotasError::InvalidScore {
            text: text.to_string(),
        }),
        None => Ok(()),
    }
}
