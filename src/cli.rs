//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "logctx",
    version,
    about = "Logctx (Rust)",
    long_about = "Logctx — a tiny, fast CLI to mine stack-trace references from error logs and map them to source code context.\n\nConfiguration precedence: CLI > logctx.toml > defaults.",
    after_help = "Examples:\n  logctx extract --log logs/error.log --source-root ./\n  logctx extract --dataset out/contexts.json --output json\n  logctx escape docs/endpoint.md",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for dataset extraction and text escaping.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current logctx version."
    )]
    Version,
    /// Build the code-context dataset from an error log
    #[command(
        about = "Extract code context from an error log",
        long_about = "Split the log into timestamped blocks, keep blocks containing an error marker with a file:line:column stack reference, resolve each reference under the source root, and write the collected incidents as a JSON dataset.",
        after_help = "Examples:\n  logctx extract --log logs/error.log\n  logctx extract --source-root ./service --window 3\n  logctx extract --output json"
    )]
    Extract {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to the error log (default: logs/error.log)")]
        log: Option<String>,
        #[arg(long, help = "Source root for resolving matched paths (default: ./)")]
        source_root: Option<String>,
        #[arg(long, help = "Dataset output file (default: extracted_contexts.json)")]
        dataset: Option<String>,
        #[arg(long, help = "Context window in lines around the target (default: 5)")]
        window: Option<usize>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Echo the raw log content to stderr")]
        verbose: bool,
    },
    /// JSON-escape text for pasting into a dataset field
    #[command(
        about = "JSON-escape text",
        long_about = "Read FILE (or stdin when omitted), trim it, and print it JSON-escaped with the surrounding quote characters removed, ready to paste as the value portion of a JSON string field."
    )]
    Escape {
        #[arg(help = "File to escape; reads stdin when omitted")]
        file: Option<String>,
    },
}
