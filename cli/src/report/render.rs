use crate::report::model::{PatternSummary, WorksheetReport};
use ewcore::catalog::{Evaluation, CATALOG};
use ewcore::pattern::AntennaArchetype;
use std::fmt::Write;

/// `value unit`, or `N/A (reason)` when the formula is undefined.
pub fn format_evaluation(evaluation: &Evaluation, decimals: usize) -> String {
    match evaluation.result() {
        Ok(value) if evaluation.unit.is_empty() => format!("{:.*}", decimals, value),
        Ok(value) => format!("{:.*} {}", decimals, value, evaluation.unit),
        Err(error) => format!("N/A ({})", error),
    }
}

fn format_optional(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value {
        Some(value) => format!("{:.*} {}", decimals, value, unit),
        None => "N/A".to_string(),
    }
}

pub fn render_evaluation(evaluation: &Evaluation, decimals: usize) -> String {
    let mut out = format!("{}: {}", evaluation.title, format_evaluation(evaluation, decimals));
    for detail in &evaluation.details {
        let _ = write!(
            out,
            "\n    {} = {:.*} {}",
            detail.name, decimals, detail.value, detail.unit
        );
    }
    out
}

pub fn render_pattern(summary: &PatternSummary, decimals: usize) -> String {
    let mut out = format!("{} [{}]", summary.label, summary.antenna.id());
    if let Some(error) = &summary.error {
        let _ = write!(out, "\n  N/A ({})", error);
        return out;
    }
    let (rows, cols) = summary.grid;
    let _ = write!(out, "\n  grid: {} x {} (phi x theta)", rows, cols);
    let _ = write!(
        out,
        "\n  beamwidth: {}",
        format_optional(summary.beamwidth_deg, decimals, "deg")
    );
    if let Some((theta, phi)) = summary.peak_direction_deg {
        let _ = write!(
            out,
            "\n  peak at: theta {:.*} deg, phi {:.*} deg",
            decimals, theta, decimals, phi
        );
    }
    let _ = write!(
        out,
        "\n  front/rear peak ratio: {}",
        format_optional(summary.front_rear_peak_ratio_db, decimals, "dB")
    );
    if summary.degenerate {
        out.push_str("\n  degenerate pattern (zero peak)");
    }
    let _ = write!(out, "\n  typical: {}", summary.typical_spec);
    out
}

pub fn render_worksheet(report: &WorksheetReport, decimals: usize) -> String {
    let mut out = String::new();
    if let Some(title) = &report.title {
        let _ = writeln!(out, "== {} ==", title);
    }
    for evaluation in &report.evaluations {
        let _ = writeln!(out, "{}", render_evaluation(evaluation, decimals));
    }
    for summary in &report.patterns {
        let _ = writeln!(out, "{}", render_pattern(summary, decimals));
    }
    let _ = writeln!(
        out,
        "-- {} evaluated, {} undefined, {} patterns",
        report.metrics.evaluated, report.metrics.domain_violations, report.metrics.patterns
    );
    out
}

pub fn render_catalog() -> String {
    let mut out = String::from("Formulas:\n");
    let width = CATALOG.iter().map(|entry| entry.id.len()).max().unwrap_or(0);
    for entry in CATALOG {
        let unit = if entry.unit.is_empty() { "-" } else { entry.unit };
        let _ = writeln!(out, "  {:<width$}  {} [{}]", entry.id, entry.title, unit, width = width);
    }
    out.push_str("Antennas:\n");
    for archetype in AntennaArchetype::ALL {
        let _ = writeln!(out, "  {:<width$}  {}", archetype.id(), archetype.label(), width = width);
    }
    out
}
