//! Configuration discovery and effective settings resolution.
//!
//! Logctx reads `logctx.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `log`: `logs/error.log`
//! - `source_root`: `./`
//! - `dataset`: `extracted_contexts.json`
//! - `output`: `human`
//! - `extract.window`: 5
//! - `extract.pattern`: built-in stack-reference regex
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default stack-reference pattern: an absolute `/src/...` TypeScript path
/// followed by `:line:column`.
pub const DEFAULT_PATTERN: &str = r"(/src/[\w/\.-]+\.ts):(\d+):(\d+)";

/// Default context window in lines on either side of the target line.
pub const DEFAULT_WINDOW: usize = 5;

#[derive(Debug, Default, Deserialize, Clone)]
/// Extraction-related configuration section under `[extract]`.
pub struct ExtractCfg {
    pub window: Option<usize>,
    /// Override of the stack-reference regex.
    pub pattern: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `logctx.toml|yaml`.
pub struct LogctxConfig {
    pub log: Option<String>,
    pub source_root: Option<String>,
    pub dataset: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub extract: Option<ExtractCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub log: String,
    pub source_root: String,
    pub dataset: String,
    pub output: String,
    pub window: usize,
    pub pattern: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `logctx.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    // Walk up to find config or .git; else return start
    let mut cur = start;
    loop {
        if cur.join("logctx.toml").exists()
            || cur.join("logctx.yaml").exists()
            || cur.join("logctx.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LogctxConfig` from `logctx.toml` or `logctx.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<LogctxConfig> {
    let toml_path = root.join("logctx.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: LogctxConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["logctx.yaml", "logctx.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: LogctxConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_log: Option<&str>,
    cli_source_root: Option<&str>,
    cli_dataset: Option<&str>,
    cli_output: Option<&str>,
    cli_window: Option<usize>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let log = cli_log
        .map(|s| s.to_string())
        .or(cfg.log)
        .unwrap_or_else(|| "logs/error.log".to_string());

    let source_root = cli_source_root
        .map(|s| s.to_string())
        .or(cfg.source_root)
        .unwrap_or_else(|| "./".to_string());

    let dataset = cli_dataset
        .map(|s| s.to_string())
        .or(cfg.dataset)
        .unwrap_or_else(|| "extracted_contexts.json".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let window = cli_window
        .or_else(|| cfg.extract.as_ref().and_then(|e| e.window))
        .unwrap_or(DEFAULT_WINDOW);

    let pattern = cfg
        .extract
        .as_ref()
        .and_then(|e| e.pattern.clone())
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());

    Effective {
        repo_root,
        log,
        source_root,
        dataset,
        output,
        window,
        pattern,
    }
}
