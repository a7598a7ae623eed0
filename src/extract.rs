//! Dataset build: log splitting, stack-reference matching, context resolution.
//!
//! A log is partitioned into blocks on bracketed timestamps. Blocks carrying
//! the literal `Error` marker and a `file:line:column` stack reference each
//! produce one `Incident`; everything else is dropped without a trace. Only
//! the log file itself is allowed to fail the run.

use crate::config;
use crate::context::extract_code_context;
use crate::models::{Incident, StackRef, Summary};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Timestamp delimiter between log blocks, e.g. `[2024-01-01 10:00:00]`.
const BLOCK_DELIMITER: &str = r"\[\d{4}-\d{2}-\d{2}.*?\]";

/// Case-sensitive marker a block must contain to qualify.
const ERROR_MARKER: &str = "Error";

/// Split raw log text into blocks, discarding the timestamp delimiters.
///
/// The material before the first delimiter is kept as a block, so a log with
/// no delimiters at all yields exactly one block.
pub fn split_blocks(content: &str) -> Vec<&str> {
    // Compiled per run; the extract pass is a one-shot batch job
    let re = Regex::new(BLOCK_DELIMITER).expect("valid delimiter regex");
    re.split(content).collect()
}

/// Find the first stack reference in `block`, if any.
///
/// Pure: returns the matched path plus parsed line and column, or `None`
/// when the block has no reference or the digits overflow.
pub fn match_stack_ref(block: &str, re: &Regex) -> Option<StackRef> {
    let caps = re.captures(block)?;
    let path = caps.get(1)?.as_str().to_string();
    let line: usize = caps.get(2)?.as_str().parse().ok()?;
    let column: usize = caps.get(3)?.as_str().parse().ok()?;
    Some(StackRef { path, line, column })
}

/// Resolve a matched absolute-style path beneath `source_root` by stripping
/// the leading separator and joining.
pub fn resolve_local_path(source_root: &Path, matched: &str) -> PathBuf {
    source_root.join(matched.trim_start_matches('/'))
}

/// Run the extract pass over `log_file`.
///
/// Returns the incidents in block order together with pass counters. Failure
/// to read the log file is fatal and propagates; failures on individual
/// source files are absorbed into the `code_context` field of that record.
pub fn run_extract(
    log_file: &Path,
    source_root: &Path,
    window: usize,
    pattern: &Regex,
) -> io::Result<(Vec<Incident>, Summary)> {
    let content = fs::read_to_string(log_file)?;
    let blocks = split_blocks(&content);

    let mut incidents: Vec<Incident> = Vec::new();
    let mut with_error = 0usize;
    let blocks_count = blocks.len();
    for block in blocks {
        if !block.contains(ERROR_MARKER) {
            continue;
        }
        with_error += 1;
        let Some(sref) = match_stack_ref(block, pattern) else {
            continue;
        };
        let local = resolve_local_path(source_root, &sref.path);
        let code_context = extract_code_context(&local, sref.line, window);
        incidents.push(Incident {
            log: block.trim().to_string(),
            file: sref.path,
            line: sref.line,
            code_context,
        });
    }

    let summary = Summary {
        blocks: blocks_count,
        with_error,
        matched: incidents.len(),
    };
    Ok((incidents, summary))
}

/// Compile the stack-reference pattern, defaulting to the built-in one.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    if pattern.is_empty() {
        Regex::new(config::DEFAULT_PATTERN)
    } else {
        Regex::new(pattern)
    }
}
