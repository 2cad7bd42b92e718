//! Command-line interface for building and repairing spanning trees.
//!
//! `mst` prints the tree of an edge-list file, `repair` additionally removes
//! one tree edge and reports the replacement, `demo` runs a repair on the
//! built-in sample graph, and `report` tabulates repairs over many files.

mod commands;
mod input;
mod report;

pub use commands::{
    Cli, CliError, Command, DemoCommand, ExecutionSummary, GraphReport, GraphSource, MstCommand,
    OutputFormat, RepairCommand, RepairSummary, ReportCommand, run_cli,
};
pub use input::{InputError, parse_edge_list};
pub use report::{CSV_HEADER, CSV_TIMING_COLUMN, render_summary};

#[cfg(test)]
mod test_helpers;
