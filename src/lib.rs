//! Logctx core library.
//!
//! This crate exposes programmatic APIs for mining stack-trace references out
//! of an application error log and resolving them to source code context,
//! producing a JSON dataset for fine-tuning data preparation.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `context`: Source context extraction around a referenced line.
//! - `extract`: Log splitting, stack-reference matching, and dataset build.
//! - `escape`: JSON string escaping for the paste-into-dataset helper.
//! - `models`: Data models for incidents and the extract report.
//! - `output`: Human/JSON printers and dataset file writing.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod context;
pub mod escape;
pub mod extract;
pub mod models;
pub mod output;
pub mod utils;
