//! Write the flattened annotation table as CSV.

use colored::Colorize;
use std::path::Path;

use crate::error::Result;
use crate::export::write_csv;

/// Execute the export command.
///
/// # Errors
///
/// Returns any store failure, integrity violation, or write failure.
pub fn execute(out: &Path, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let rows = dao.build_export_dataframe()?;
    write_csv(out, &rows)?;

    if json {
        super::print_json(&serde_json::json!({
            "path": out,
            "rows": rows.len(),
        }))?;
    } else {
        println!(
            "{} {} sequences to {}",
            "Exported".green().bold(),
            rows.len(),
            out.display()
        );
    }

    Ok(())
}
