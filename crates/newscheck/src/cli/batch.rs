use super::render::styled_label;
use crate::util::format::{format_evidence, truncate};
use crate::util::progress::batch_progress_bar;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use newscheck_lib::{AnalysisOutcome, Label, Pipeline, Result};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

const TEXT_WIDTH: usize = 60;

pub fn handle_batch_command(
    pipeline: &Pipeline,
    path: &Path,
    json: bool,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    if lines.is_empty() {
        if !quiet {
            println!("{}", style("No text found in file").yellow());
        }
        return Ok(());
    }

    let pb = if verbose || json || quiet {
        None
    } else {
        Some(batch_progress_bar(lines.len() as u64))
    };

    let mut results = Vec::with_capacity(lines.len());
    for (line_no, line) in lines {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
        let outcome = pipeline.analyze(line)?;
        if verbose {
            println!("  {}: {}", line_no, outcome.summary());
        }
        results.push((line_no, line, outcome));
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if json {
        let entries: Vec<_> = results
            .iter()
            .map(|(line_no, _, outcome)| json!({ "line": line_no, "outcome": outcome }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if quiet {
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Line").fg(Color::Cyan),
        Cell::new("Text").fg(Color::Cyan),
        Cell::new("Result").fg(Color::Cyan),
        Cell::new("Evidence").fg(Color::Cyan),
    ]);

    let mut counts: BTreeMap<Label, usize> = BTreeMap::new();
    let mut not_classified = 0;

    for (line_no, line, outcome) in &results {
        let (result_cell, evidence) = match outcome {
            AnalysisOutcome::Analyzed(report) => {
                *counts.entry(report.label()).or_insert(0) += 1;
                let color = match report.label() {
                    Label::Fake => Color::Red,
                    Label::PossiblyFake => Color::Yellow,
                    Label::Real => Color::Green,
                };
                (
                    Cell::new(report.label().as_str()).fg(color),
                    format_evidence(&report.classification),
                )
            }
            other => {
                not_classified += 1;
                (Cell::new(other.summary()).fg(Color::DarkGrey), "-".to_string())
            }
        };

        table.add_row(vec![
            Cell::new(line_no),
            Cell::new(truncate(line.trim(), TEXT_WIDTH)),
            result_cell,
            Cell::new(evidence),
        ]);
    }

    println!("{}\n", table);

    println!("{} Analyzed {} entries", style("✓").green(), style(results.len()).bold());
    for label in Label::ALL {
        println!(
            "  {}: {}",
            styled_label(label),
            counts.get(&label).copied().unwrap_or(0)
        );
    }
    if not_classified > 0 {
        println!("  Not classified: {}", style(not_classified).yellow());
    }

    Ok(())
}
