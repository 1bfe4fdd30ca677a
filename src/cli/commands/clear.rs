//! Empty all three data stores.

use colored::Colorize;
use std::path::Path;

use crate::error::{Error, Result};

/// Execute the clear command.
///
/// Clearing is not atomic across the three stores; it is refused without
/// `--force`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] without `--force`, or any store
/// failure.
pub fn execute(force: bool, data_dir: &Path, json: bool) -> Result<()> {
    if !force {
        return Err(Error::InvalidArgument(
            "clearing deletes every annotation; pass --force to confirm".to_string(),
        ));
    }

    let mut dao = super::open_dao(data_dir)?;
    dao.clear_all_data_stores()?;

    if json {
        super::print_json(&serde_json::json!({ "cleared": true }))?;
    } else {
        println!("{} all data stores", "Cleared".green().bold());
    }

    Ok(())
}
