//! Loading a port network from plain-text data files.
//!
//! Two whitespace-separated files describe a network:
//!
//! ```text
//! # ports: name dailyCharge [x y]
//! Singapore 1200 820 410
//! Rotterdam 900
//!
//! # routes: origin destination D/M/YYYY HH:MM HH:MM cost company
//! Singapore Rotterdam 3/12/2024 22:15 06:45 5400 Maersk
//! ```
//!
//! Malformed lines are skipped and listed in the [`LoadReport`] rather than
//! failing the load. Only an unreadable file is an error.

mod coordinates;
mod error;
mod records;

use std::path::Path;

use tracing::{info, warn};

use crate::network::Graph;

pub use coordinates::known_coordinates;
pub use error::{LoadError, RecordError};
pub use records::{parse_port_line, parse_sailing_line};

use records::is_ignorable;

/// Which data file a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    Ports,
    Routes,
}

/// A line that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub file: SourceFile,
    /// 1-based line number.
    pub line: usize,
    pub reason: RecordError,
}

/// Summary of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub ports: usize,
    pub sailings: usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Returns true if every record line was loaded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, file: SourceFile, line: usize, reason: RecordError) {
        warn!(?file, line, %reason, "skipping line");
        self.skipped.push(SkippedLine { file, line, reason });
    }
}

/// Read both data files and build the network.
pub fn load_graph(
    ports_path: impl AsRef<Path>,
    routes_path: impl AsRef<Path>,
) -> Result<(Graph, LoadReport), LoadError> {
    let ports = read(ports_path.as_ref())?;
    let routes = read(routes_path.as_ref())?;
    let (graph, report) = build_graph(&ports, &routes);

    info!(
        ports = report.ports,
        sailings = report.sailings,
        skipped = report.skipped.len(),
        "network loaded"
    );
    Ok((graph, report))
}

/// Build a network from the text of a ports file and a routes file.
///
/// Ports are added first so that sailings can refer to any of them.
pub fn build_graph(ports: &str, routes: &str) -> (Graph, LoadReport) {
    let mut graph = Graph::new();
    let mut report = LoadReport::default();

    for (index, line) in ports.lines().enumerate() {
        if is_ignorable(line) {
            continue;
        }
        match parse_port_line(line) {
            Ok(port) => {
                if graph.port_id(&port.name).is_some() {
                    warn!(name = %port.name, line = index + 1, "duplicate port name; first entry wins");
                }
                graph.add_port(port);
                report.ports += 1;
            }
            Err(reason) => report.skip(SourceFile::Ports, index + 1, reason),
        }
    }

    for (index, line) in routes.lines().enumerate() {
        if is_ignorable(line) {
            continue;
        }
        let (record, schedule) = match parse_sailing_line(line) {
            Ok(parsed) => parsed,
            Err(reason) => {
                report.skip(SourceFile::Routes, index + 1, reason);
                continue;
            }
        };
        match graph.add_sailing(&record.origin, &record.destination, record.cost, schedule) {
            Some(_) => report.sailings += 1,
            None => report.skip(
                SourceFile::Routes,
                index + 1,
                RecordError::UnknownPort {
                    origin: record.origin,
                    destination: record.destination,
                },
            ),
        }
    }

    (graph, report)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
