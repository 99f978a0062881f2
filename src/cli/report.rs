//! Console summary tables for planned actions.
//!
//! Renders the plan as aligned, colored columns: one table for video
//! actions (file, type, target) and a separate one for cleanup
//! relocations when present.

use crate::models::action::Action;
use crate::models::classification::ValidationOutcome;
use colored::Colorize;
use std::path::Path;

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Column width of a cell, counted in characters rather than bytes so
/// non-ASCII titles keep the table aligned.
fn cell_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-pad a cell to the given character width.
fn pad(s: &str, width: usize) -> String {
    let current = cell_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Label shown in the Type column.
fn action_kind(action: &Action) -> &'static str {
    match action {
        Action::Move { classification, .. } => classification.kind(),
        Action::Skip { .. } => "skip",
        Action::Delete { .. } => "delete",
    }
}

/// Target column contents, annotated with the validation outcome.
fn action_target(action: &Action) -> String {
    match action {
        Action::Move {
            destination,
            validation,
            ..
        } => {
            let suffix = match validation {
                Some(ValidationOutcome::Confirmed) => " (confirmed)".to_string(),
                Some(ValidationOutcome::Corrected { .. }) => " (corrected)".to_string(),
                Some(ValidationOutcome::Unverifiable { reason }) => {
                    format!(" (unverified: {})", reason)
                }
                None => String::new(),
            };
            format!("{}{}", destination.display(), suffix)
        }
        Action::Skip { reason, .. } => format!("- ({})", reason),
        Action::Delete { destination, .. } => destination.display().to_string(),
    }
}

/// Print the plan summary tables.
pub fn print_actions(actions: &[Action]) {
    let video_actions: Vec<&Action> = actions
        .iter()
        .filter(|a| !matches!(a, Action::Delete { .. }))
        .collect();
    let delete_actions: Vec<&Action> = actions
        .iter()
        .filter(|a| matches!(a, Action::Delete { .. }))
        .collect();

    if !video_actions.is_empty() {
        let file_width = video_actions
            .iter()
            .map(|a| cell_width(&basename(a.source())))
            .max()
            .unwrap_or(4)
            .max(cell_width("File"));
        let kind_width = video_actions
            .iter()
            .map(|a| cell_width(action_kind(a)))
            .max()
            .unwrap_or(4)
            .max(cell_width("Type"));

        println!(
            "{}  {}  {}",
            pad("File", file_width).bold(),
            pad("Type", kind_width).bold(),
            "Target".bold()
        );
        for action in &video_actions {
            println!(
                "{}  {}  {}",
                pad(&basename(action.source()), file_width).cyan(),
                pad(action_kind(action), kind_width).magenta(),
                action_target(action).green()
            );
        }
    }

    if !delete_actions.is_empty() {
        println!();
        println!("{}", "Files to be deleted...".bold());
        let file_width = delete_actions
            .iter()
            .map(|a| cell_width(&basename(a.source())))
            .max()
            .unwrap_or(4)
            .max(cell_width("File"));
        println!("{}  {}", pad("File", file_width).bold(), "Target".bold());
        for action in &delete_actions {
            println!(
                "{}  {}",
                pad(&basename(action.source()), file_width).red(),
                action_target(action).yellow()
            );
        }
    }
}
