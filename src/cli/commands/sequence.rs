//! Sequence commands.

use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::cli::SequenceCommands;
use crate::error::Result;
use crate::model::Sequence;

/// Execute a sequence subcommand.
///
/// # Errors
///
/// Returns any store failure or integrity violation.
pub fn execute(command: &SequenceCommands, data_dir: &Path, json: bool) -> Result<()> {
    match command {
        SequenceCommands::Add { first, second } => add(*first, *second, data_dir, json),
        SequenceCommands::Show { id } => show(*id, data_dir, json),
        SequenceCommands::List { clause } => list(*clause, data_dir, json),
        SequenceCommands::Delete { id } => delete(*id, data_dir, json),
        SequenceCommands::Correct { id, labels } => correct(*id, labels, data_dir, json),
    }
}

#[derive(Serialize)]
struct SequenceView {
    id: u32,
    c1_id: u32,
    c1_range: (usize, usize),
    c2_id: u32,
    c2_range: (usize, usize),
    linkage_words: Vec<String>,
    predicted_classes: String,
    corrected_classes: String,
    reasoning: String,
}

impl From<&Sequence> for SequenceView {
    fn from(sequence: &Sequence) -> Self {
        Self {
            id: sequence.id,
            c1_id: sequence.first_clause.id,
            c1_range: sequence.first_clause.range(),
            c2_id: sequence.second_clause.id,
            c2_range: sequence.second_clause.range(),
            linkage_words: sequence.linkage_words.clone(),
            predicted_classes: sequence.predicted_classes.names(),
            corrected_classes: sequence.corrected_classes.names(),
            reasoning: sequence.reasoning.clone(),
        }
    }
}

fn add(first: u32, second: u32, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let created = dao.create_sequence(first, second)?;

    if json {
        return super::print_json(&serde_json::json!({
            "sequence_id": created,
            "created": created.is_some(),
        }));
    }

    match created {
        Some(id) => println!(
            "{} sequence {id} linking clauses {first} and {second}",
            "Created".green().bold()
        ),
        None => println!(
            "{} clauses {first} and {second} are already sequenced",
            "Skipped".yellow().bold()
        ),
    }
    Ok(())
}

fn show(id: u32, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let sequence = dao.get_sequence_by_id(id)?;

    if json {
        return super::print_json(&sequence.as_ref().map(SequenceView::from));
    }

    match sequence {
        Some(sequence) => print_sequence(&sequence),
        None => println!("No sequence with id {id}."),
    }
    Ok(())
}

fn print_sequence(sequence: &Sequence) {
    let ((c1_start, c1_end), (c2_start, c2_end)) = sequence.clause_ranges();
    println!("{} {}", "Sequence".bold(), sequence.id);
    println!(
        "  clauses:   {} [{c1_start}, {c1_end})  ->  {} [{c2_start}, {c2_end})",
        sequence.first_clause.id, sequence.second_clause.id
    );
    println!("  linkage:   {}", sequence.linkage_words.join(", "));
    println!("  predicted: {}", sequence.predicted_classes);
    println!("  corrected: {}", sequence.corrected_classes);
    if !sequence.reasoning.is_empty() {
        println!("  reasoning: {}", sequence.reasoning);
    }
}

fn list(clause: Option<u32>, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let sequences = match clause {
        Some(clause_id) => dao.get_sequences_by_clause_id(clause_id)?,
        None => dao.get_all_sequences()?,
    };

    if json {
        let views: Vec<SequenceView> = sequences.iter().map(SequenceView::from).collect();
        return super::print_json(&views);
    }

    if sequences.is_empty() {
        println!("No sequences.");
        return Ok(());
    }

    for sequence in &sequences {
        let ((c1_start, c1_end), (c2_start, c2_end)) = sequence.clause_ranges();
        println!(
            "{:>5}  [{c1_start:>6}, {c1_end:>6}) -> [{c2_start:>6}, {c2_end:>6})  predicted: {:<12} corrected: {}",
            sequence.id.to_string().cyan(),
            sequence.predicted_classes.to_string(),
            sequence.corrected_classes
        );
    }
    Ok(())
}

fn delete(id: u32, data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let deleted = dao.delete_sequence(id)?;

    if json {
        return super::print_json(&serde_json::json!({ "deleted": deleted }));
    }

    if deleted {
        println!("{} sequence {id}", "Deleted".green().bold());
    } else {
        println!("No sequence with id {id}.");
    }
    Ok(())
}

fn correct(id: u32, labels: &[String], data_dir: &Path, json: bool) -> Result<()> {
    let mut dao = super::open_dao(data_dir)?;
    let updated = dao.set_sequence_correct_classes(id, labels)?;

    if json {
        return super::print_json(&serde_json::json!({ "updated": updated }));
    }

    if updated {
        let sequence = dao.get_sequence_by_id(id)?;
        let corrected = sequence
            .map(|s| s.corrected_classes.to_string())
            .unwrap_or_default();
        println!(
            "{} sequence {id} corrected to {corrected}",
            "Updated".green().bold()
        );
    } else {
        println!("No sequence with id {id}.");
    }
    Ok(())
}
