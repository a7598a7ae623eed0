//! Logctx CLI binary entry point.
//! Delegates to modules for extraction/escaping and prints results.

mod cli;
mod config;
mod context;
mod escape;
mod extract;
mod models;
mod output;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::io::Read;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Extract {
            repo_root,
            log,
            source_root,
            dataset,
            window,
            output,
            verbose,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                log.as_deref(),
                source_root.as_deref(),
                dataset.as_deref(),
                output.as_deref(),
                window,
            );
            // Friendly note if no logctx config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No logctx.toml found; using defaults."
                );
            }
            let log_path = eff.repo_root.join(&eff.log);
            // Friendly error before the fatal read below
            if !log_path.exists() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Log file not found: {} (pass --log or configure logctx.toml)",
                        log_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            let pattern = match extract::compile_pattern(&eff.pattern) {
                Ok(re) => re,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("Invalid stack-reference pattern: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            let src_root = eff.repo_root.join(&eff.source_root);
            // Operator traces; the dataset file is the functional output
            if eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Log file: {}", log_path.to_string_lossy())
                );
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Source root: {}", src_root.to_string_lossy())
                );
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Path pattern: {}", pattern.as_str())
                );
                if verbose {
                    if let Ok(content) = fs::read_to_string(&log_path) {
                        eprintln!("{} Log content:\n{}", utils::info_prefix(), content);
                    }
                }
            }
            let (incidents, summary) =
                match extract::run_extract(&log_path, &src_root, eff.window, &pattern) {
                    Ok(res) => res,
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("Failed to read log file: {}", e)
                        );
                        std::process::exit(2);
                    }
                };
            let dataset_path = eff.repo_root.join(&eff.dataset);
            if let Err(e) = output::write_dataset(&dataset_path, &incidents) {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Failed to write dataset {}: {}",
                        dataset_path.to_string_lossy(),
                        e
                    )
                );
                std::process::exit(2);
            }
            output::print_extract(&incidents, &summary, &eff.output);
            if eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!(
                        "Extracted {} context blocks to {}",
                        incidents.len(),
                        dataset_path.to_string_lossy()
                    )
                );
            }
        }
        Commands::Escape { file } => {
            let text = match file {
                Some(path) => match fs::read_to_string(&path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("Failed to read {}: {}", path, e)
                        );
                        std::process::exit(2);
                    }
                },
                None => {
                    let mut buf = String::new();
                    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                        eprintln!(
                            "{} {}",
                            utils::error_prefix(),
                            format!("Failed to read stdin: {}", e)
                        );
                        std::process::exit(2);
                    }
                    buf
                }
            };
            println!("{}", escape::escape_for_json(&text));
        }
    }
}
