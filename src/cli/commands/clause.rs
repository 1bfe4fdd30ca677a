//! Clause span commands.

use colored::Colorize;
use std::path::Path;

use crate::cli::ClauseCommands;
use crate::error::Result;

/// Execute a clause subcommand.
///
/// # Errors
///
/// Returns any store failure.
pub fn execute(command: &ClauseCommands, data_dir: &Path, json: bool) -> Result<()> {
    match command {
        ClauseCommands::Add { start, end } => add(*start, *end, data_dir, json),
        ClauseCommands::List => list(data_dir, json),
    }
}

fn add(start: usize, end: usize, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let id = dao.create_clause(start, end)?;

    if json {
        super::print_json(&serde_json::json!({ "clause_id": id }))?;
    } else {
        println!("{} clause {id} [{start}, {end})", "Created".green().bold());
    }
    Ok(())
}

fn list(data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let clauses = dao.get_all_clauses()?;
    let texts = dao.get_all_clause_text()?;

    if json {
        return super::print_json(&clauses);
    }

    if clauses.is_empty() {
        println!("No clauses.");
        return Ok(());
    }

    for clause in &clauses {
        let text = texts.get(&clause.id).map_or("", String::as_str);
        println!(
            "{:>5}  [{:>6}, {:>6})  {}",
            clause.id.to_string().cyan(),
            clause.start,
            clause.end,
            snippet(text)
        );
    }
    Ok(())
}

/// First 60 characters of a clause, flattened to one line.
fn snippet(text: &str) -> String {
    let flat: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
    if flat.chars().count() > 60 {
        let cut: String = flat.chars().take(57).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(100);
        let cut = snippet(&long);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_snippet_flattens_newlines() {
        assert_eq!(snippet("a\nb"), "a b");
    }
}
