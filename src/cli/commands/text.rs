//! Print the reference text or a range of it.

use std::path::Path;

use crate::error::Result;

/// Execute the text command.
///
/// With `--start`/`--end`, prints the substring for the half-open byte
/// range; otherwise the whole text.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRange`] for out-of-bounds bounds.
pub fn execute(
    start: Option<usize>,
    end: Option<usize>,
    data_dir: &Path,
    json: bool,
) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;

    let text = match (start, end) {
        (Some(start), Some(end)) => dao.get_text_range(start, end)?,
        _ => dao.get_text()?,
    };

    if json {
        super::print_json(&serde_json::json!({
            "text": text,
            "end_index": dao.text_end_index()?,
        }))?;
    } else {
        println!("{text}");
    }

    Ok(())
}
