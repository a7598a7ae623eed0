//! Shared data models for the extract dataset and printers.

use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
/// A single matched incident: a log block with a resolved stack reference.
///
/// Field order is the JSON key order in the dataset file. `file` keeps the
/// path as matched in the log, never the resolved local path.
pub struct Incident {
    pub log: String,
    pub file: String,
    pub line: usize,
    pub code_context: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A matched stack reference inside a log block.
///
/// `column` is captured for completeness but has no downstream consumer.
pub struct StackRef {
    pub path: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Serialize, Debug, Clone, Copy)]
/// Aggregated extract counters used by printers.
pub struct Summary {
    pub blocks: usize,
    pub with_error: usize,
    pub matched: usize,
}

#[derive(Serialize)]
/// Extract results container for the JSON output mode.
pub struct ExtractReport {
    pub incidents: Vec<Incident>,
    pub summary: Summary,
}
