//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, GraphSource, run_cli};

/// Edge list of the four-vertex graph whose tree weighs 7.
pub(super) const REFERENCE_GRAPH: &str = "\
# four vertices, five edges
4
0 1 1
0 2 3
1 2 2
1 3 4
2 3 5
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn graph_source(path: PathBuf) -> GraphSource {
    GraphSource {
        path,
        name: None,
        parallel: false,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(summary) => panic!("{panic_msg}: {summary:?}"),
        Err(err) => err,
    }
}
