//! Human and CSV rendering of command summaries.

use std::io::{self, Write};
use std::time::Duration;

use arbor_core::{Edge, ReplacementStatus};

use super::commands::{ExecutionSummary, GraphReport, OutputFormat};

/// Header row of the CSV report.
pub const CSV_HEADER: &str = "Test Case,Vertices,Edges,Original MST Weight,Removed Edge,\
Replacement Edge,New MST Weight,Weight Change,Components After Removal";

/// Extra CSV column appended when timings are requested.
pub const CSV_TIMING_COLUMN: &str = "Execution Time (ms)";

/// Renders `summary` to `writer` in the summary's output format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, DemoCommand, OutputFormat, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Demo(DemoCommand { format: OutputFormat::Csv }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.starts_with("Test Case,"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Human => {
            for (index, report) in summary.reports.iter().enumerate() {
                if index > 0 {
                    writeln!(writer)?;
                }
                render_human(report, &mut writer)?;
            }
            Ok(())
        }
        OutputFormat::Csv => {
            if summary.timings {
                writeln!(writer, "{CSV_HEADER},{CSV_TIMING_COLUMN}")?;
            } else {
                writeln!(writer, "{CSV_HEADER}")?;
            }
            for report in &summary.reports {
                render_csv_row(report, summary.timings, &mut writer)?;
            }
            Ok(())
        }
    }
}

fn render_human(report: &GraphReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        report.name, report.vertex_count, report.edge_count
    )?;
    let heading = if report.tree.is_valid() {
        "minimum spanning tree"
    } else {
        "minimum spanning forest (graph is disconnected)"
    };
    writeln!(writer, "{heading}:")?;
    write_edges(writer, report.tree.edges())?;
    writeln!(writer, "total weight: {}", report.tree.total_weight())?;

    if let Some(repair) = &report.repair {
        writeln!(writer)?;
        writeln!(writer, "removed: {}", edge_label(&repair.removed))?;
        writeln!(
            writer,
            "components after removal: {}",
            repair.components_after_removal
        )?;
        match (repair.status, repair.replacement) {
            (ReplacementStatus::Replaced, Some(edge)) => {
                writeln!(writer, "replacement: {}", edge_label(&edge))?;
            }
            (ReplacementStatus::NotNeeded, _) => writeln!(writer, "replacement: not needed")?,
            _ => writeln!(writer, "replacement: no replacement found")?,
        }
        writeln!(writer, "repaired edges:")?;
        write_edges(writer, &repair.updated_edges)?;
        writeln!(writer, "new weight: {}", repair.new_weight)?;
        writeln!(
            writer,
            "weight change: {:+}",
            repair.new_weight - report.tree.total_weight()
        )?;
    }
    if let Some(elapsed) = report.elapsed {
        writeln!(writer, "elapsed: {} ms", millis(elapsed))?;
    }
    Ok(())
}

fn render_csv_row(report: &GraphReport, timings: bool, writer: &mut impl Write) -> io::Result<()> {
    let original = report.tree.total_weight();
    let (removed, replacement, new_weight, components) = match &report.repair {
        Some(repair) => (
            edge_label(&repair.removed),
            repair
                .replacement
                .map_or_else(|| "No replacement".to_owned(), |edge| edge_label(&edge)),
            repair.new_weight,
            repair.components_after_removal,
        ),
        // A forest over V vertices with E edges has V - E components.
        None => (
            "None".to_owned(),
            "No replacement".to_owned(),
            original,
            report.vertex_count - report.tree.len(),
        ),
    };
    write!(
        writer,
        "{},{},{},{original},{removed},{replacement},{new_weight},{},{components}",
        csv_field(&report.name),
        report.vertex_count,
        report.edge_count,
        new_weight - original,
    )?;
    if timings {
        let elapsed = report.elapsed.map(millis).unwrap_or_default();
        write!(writer, ",{elapsed}")?;
    }
    writeln!(writer)
}

/// Formats a duration as milliseconds with microsecond precision.
fn millis(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1_000.0)
}

fn write_edges(writer: &mut impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "  {}", edge_label(edge))?;
    }
    Ok(())
}

/// Formats an edge as `source-target (weight: w)`.
pub(super) fn edge_label(edge: &Edge) -> String {
    format!("{}-{} (weight: {})", edge.source(), edge.target(), edge.weight())
}

/// Quotes a CSV field when it holds a delimiter, quote or line break.
pub(super) fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}
