//! Command implementations and argument parsing for the `arbor` binary.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use arbor_core::{
    Edge, EdgeKey, Graph, RepairError, ReplacementStatus, SortStrategy, SpanningTree,
    SpanningTreeBuilder, TreeRepairer, Weight,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::input::{InputError, parse_edge_list};

const DEMO_NAME: &str = "Sample Graph";
const FALLBACK_NAME: &str = "graph";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Build minimum spanning trees and repair them after an edge removal."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build and print the minimum spanning tree of an edge-list file.
    Mst(MstCommand),
    /// Build the tree, remove one edge and repair it.
    Repair(RepairCommand),
    /// Run a repair on the built-in six-vertex sample graph.
    Demo(DemoCommand),
    /// Repair the middle tree edge of several graphs and tabulate the results.
    Report(ReportCommand),
}

/// Report format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable listing of the tree and the repair.
    #[default]
    Human,
    /// A CSV header and one row per repair.
    Csv,
}

/// Options shared by commands that read a graph file.
#[derive(Debug, Args, Clone)]
pub struct GraphSource {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Name used in reports (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,

    /// Sort edges with Rayon when the build supports it.
    #[arg(long)]
    pub parallel: bool,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Graph input.
    #[command(flatten)]
    pub source: GraphSource,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `repair` command.
#[derive(Debug, Args, Clone)]
pub struct RepairCommand {
    /// Graph input.
    #[command(flatten)]
    pub source: GraphSource,

    /// Endpoints of the tree edge to remove (defaults to the middle tree
    /// edge).
    #[arg(long, num_args = 2, value_names = ["U", "V"])]
    pub remove: Option<Vec<usize>>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `report` command.
#[derive(Debug, Args, Clone)]
pub struct ReportCommand {
    /// Edge-list files; each one becomes a report row named after its stem.
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Sort edges with Rayon when the build supports it.
    #[arg(long)]
    pub parallel: bool,

    /// Add the time spent building and repairing each tree.
    #[arg(long)]
    pub timings: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: std::io::Error,
    },
    /// The input file was not a valid edge list.
    #[error("failed to parse `{path}`: {source}")]
    Input {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: InputError,
    },
    /// The graph has no spanning tree to repair.
    #[error("graph is disconnected: its spanning forest has {components} components")]
    Disconnected {
        /// Number of trees in the spanning forest.
        components: usize,
    },
    /// The graph has a single vertex, so its tree has no edge to remove.
    #[error("the spanning tree has no edges to remove")]
    EmptyTree,
    /// `--remove` named endpoints that are not joined by a tree edge.
    #[error("no tree edge joins {left} and {right}")]
    NotATreeEdge {
        /// First requested endpoint.
        left: usize,
        /// Second requested endpoint.
        right: usize,
    },
    /// The repair itself failed.
    #[error(transparent)]
    Repair(#[from] RepairError),
}

impl CliError {
    /// Returns a stable machine-readable code for logs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Input { .. } => "CLI_INPUT",
            Self::Disconnected { .. } => "CLI_GRAPH_DISCONNECTED",
            Self::EmptyTree => "CLI_EMPTY_TREE",
            Self::NotATreeEdge { .. } => "CLI_NOT_A_TREE_EDGE",
            Self::Repair(err) => err.code().as_str(),
        }
    }
}

/// The outcome of a repair, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairSummary {
    /// Tree edge that was removed.
    pub removed: Edge,
    /// Edge that reconnected the tree, if any.
    pub replacement: Option<Edge>,
    /// How the removal was resolved.
    pub status: ReplacementStatus,
    /// Number of components right after the removal.
    pub components_after_removal: usize,
    /// Tree edges after the repair.
    pub updated_edges: Vec<Edge>,
    /// Total weight after the repair.
    pub new_weight: Weight,
}

/// The tree, and optionally the repair, computed for one graph.
#[derive(Debug, Clone)]
pub struct GraphReport {
    /// Graph name used in reports.
    pub name: String,
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Tree built before any removal.
    pub tree: SpanningTree,
    /// Repair details, when a repair was requested and possible.
    pub repair: Option<RepairSummary>,
    /// Time spent building and repairing, when timings were requested.
    pub elapsed: Option<Duration>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// One entry per analysed graph, in input order.
    pub reports: Vec<GraphReport>,
    /// How the summary should be rendered.
    pub format: OutputFormat,
    /// Whether reports carry an elapsed time.
    pub timings: bool,
}

impl ExecutionSummary {
    fn single(report: GraphReport, format: OutputFormat) -> Self {
        Self {
            reports: vec![report],
            format,
            timings: false,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or repairing the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, GraphSource, MstCommand, OutputFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1\n1 2 2\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         source: GraphSource {
///             path: file.path().to_path_buf(),
///             name: None,
///             parallel: false,
///         },
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.reports.len(), 1);
/// assert_eq!(summary.reports[0].tree.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Mst(command) => {
            span.record("command", "mst");
            run_mst(command)?
        }
        Command::Repair(command) => {
            span.record("command", "repair");
            run_repair(command)?
        }
        Command::Demo(command) => {
            span.record("command", "demo");
            run_demo(command)?
        }
        Command::Report(command) => {
            span.record("command", "report");
            run_report(command)?
        }
    };

    for report in &summary.reports {
        info!(
            graph = report.name.as_str(),
            total_weight = report.tree.total_weight(),
            repaired = report.repair.is_some(),
            "graph analysed"
        );
    }
    info!(graphs = summary.reports.len(), "command completed");
    Ok(summary)
}

#[instrument(name = "cli.mst", err, skip(command))]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let MstCommand { source, format } = command;
    let (name, graph) = load_graph(&source.path, source.name.as_deref())?;
    let tree = builder(source.parallel).build(&graph);
    Ok(ExecutionSummary::single(
        graph_report(name, &graph, tree, None),
        format,
    ))
}

#[instrument(name = "cli.repair", err, skip(command), fields(target = field::Empty))]
pub(super) fn run_repair(command: RepairCommand) -> Result<ExecutionSummary, CliError> {
    let RepairCommand {
        source,
        remove,
        format,
    } = command;
    let (name, graph) = load_graph(&source.path, source.name.as_deref())?;
    let target = match remove.as_deref() {
        Some(&[left, right]) => Some(EdgeKey::new(left, right)),
        _ => None,
    };
    if let Some(key) = target {
        Span::current().record("target", field::display(format_args!("{}-{}", key.low(), key.high())));
    }
    let tree = builder(source.parallel).build(&graph);
    let repair = repair_tree(&graph, &tree, target)?;
    Ok(ExecutionSummary::single(
        graph_report(name, &graph, tree, Some(repair)),
        format,
    ))
}

#[instrument(name = "cli.demo", err, skip(command))]
pub(super) fn run_demo(command: DemoCommand) -> Result<ExecutionSummary, CliError> {
    let graph = Graph::sample();
    let tree = SpanningTreeBuilder::new().build(&graph);
    let repair = repair_tree(&graph, &tree, None)?;
    Ok(ExecutionSummary::single(
        graph_report(DEMO_NAME.to_owned(), &graph, tree, Some(repair)),
        command.format,
    ))
}

/// Builds one report row per path. Graphs that cannot be repaired because
/// they are disconnected or have a single vertex keep their tree and report no
/// removal; every other failure aborts the whole report.
#[instrument(name = "cli.report", err, skip(command), fields(graphs = command.paths.len()))]
pub(super) fn run_report(command: ReportCommand) -> Result<ExecutionSummary, CliError> {
    let ReportCommand {
        paths,
        parallel,
        timings,
        format,
    } = command;
    let builder = builder(parallel);
    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        let (name, graph) = load_graph(path, None)?;
        let started = Instant::now();
        let tree = builder.build(&graph);
        let repair = match repair_tree(&graph, &tree, None) {
            Ok(repair) => Some(repair),
            Err(err @ (CliError::Disconnected { .. } | CliError::EmptyTree)) => {
                warn!(
                    graph = name.as_str(),
                    code = err.code(),
                    error = %err,
                    "reporting tree without repair"
                );
                None
            }
            Err(err) => return Err(err),
        };
        let elapsed = started.elapsed();

        let mut report = graph_report(name, &graph, tree, repair);
        report.elapsed = timings.then_some(elapsed);
        reports.push(report);
    }

    Ok(ExecutionSummary {
        reports,
        format,
        timings,
    })
}

fn graph_report(
    name: String,
    graph: &Graph,
    tree: SpanningTree,
    repair: Option<RepairSummary>,
) -> GraphReport {
    GraphReport {
        name,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        tree,
        repair,
        elapsed: None,
    }
}

/// Removes the requested tree edge (or the middle one) from a copy of `tree`
/// and repairs it.
pub(super) fn repair_tree(
    graph: &Graph,
    tree: &SpanningTree,
    target: Option<EdgeKey>,
) -> Result<RepairSummary, CliError> {
    if !tree.is_valid() {
        return Err(CliError::Disconnected {
            components: graph.vertex_count() - tree.len(),
        });
    }

    let removed = match target {
        Some(key) => tree
            .edges()
            .iter()
            .copied()
            .find(|edge| edge.key() == key)
            .ok_or(CliError::NotATreeEdge {
                left: key.low(),
                right: key.high(),
            })?,
        None => tree.middle_edge().ok_or(CliError::EmptyTree)?,
    };

    let mut repairer = TreeRepairer::new(graph, tree.edges().to_vec())?;
    let outcome = repairer.remove_and_replace(&removed)?;
    Ok(RepairSummary {
        removed: outcome.removed(),
        replacement: outcome.replacement(),
        status: outcome.status(),
        components_after_removal: outcome.components().len(),
        new_weight: repairer.total_weight(),
        updated_edges: repairer.into_edges(),
    })
}

fn builder(parallel: bool) -> SpanningTreeBuilder {
    let strategy = if parallel {
        SortStrategy::Parallel
    } else {
        SortStrategy::Sequential
    };
    SpanningTreeBuilder::new().with_sort_strategy(strategy)
}

#[instrument(
    name = "cli.load_graph",
    err,
    skip(path, name),
    fields(path = %path.display(), vertices = field::Empty, edges = field::Empty),
)]
pub(super) fn load_graph(path: &Path, name: Option<&str>) -> Result<(String, Graph), CliError> {
    let file = File::open(path).map_err(|err| CliError::Io {
        path: path.to_path_buf(),
        source: err,
    })?;
    let graph = parse_edge_list(BufReader::new(file)).map_err(|err| CliError::Input {
        path: path.to_path_buf(),
        source: err,
    })?;

    let span = Span::current();
    span.record("vertices", graph.vertex_count());
    span.record("edges", graph.edge_count());
    Ok((derive_graph_name(path, name), graph))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| FALLBACK_NAME.to_owned(), ToOwned::to_owned)
}
