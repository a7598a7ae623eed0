//! Output rendering for the extract command and dataset file writing.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-incident fields and a top-level summary. The dataset file itself is
//! always the bare incident array, independent of the console output mode.

use crate::context::FILE_NOT_FOUND;
use crate::models::{ExtractReport, Incident, Summary};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fs;
use std::io;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Serialize the incident array to `path` with 2-space indentation,
/// overwriting any prior content.
pub fn write_dataset(path: &Path, incidents: &[Incident]) -> io::Result<()> {
    let body = serde_json::to_string_pretty(incidents).map_err(io::Error::other)?;
    fs::write(path, body)
}

/// Print extract results in the requested format.
pub fn print_extract(incidents: &[Incident], summary: &Summary, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_extract_json(incidents, summary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for inc in incidents {
                let loc = format!("{}:{}", inc.file, inc.line);
                let status = if inc.code_context == FILE_NOT_FOUND {
                    if color {
                        "(source missing)".yellow().to_string()
                    } else {
                        "(source missing)".to_string()
                    }
                } else if inc.code_context.starts_with("Error reading file:") {
                    if color {
                        "(read failed)".red().to_string()
                    } else {
                        "(read failed)".to_string()
                    }
                } else if color {
                    "✓".green().to_string()
                } else {
                    "ok".to_string()
                };
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {}", loc, status);
            }
            let summary_line = format!(
                "— Summary — blocks={} errors={} matched={}",
                summary.blocks, summary.with_error, summary.matched
            );
            if color {
                println!("{}", summary_line.bold());
            } else {
                println!("{}", summary_line);
            }
        }
    }
}

/// Compose extract JSON object (pure) for testing/snapshot purposes.
pub fn compose_extract_json(incidents: &[Incident], summary: &Summary) -> JsonVal {
    let report = ExtractReport {
        incidents: incidents.to_vec(),
        summary: *summary,
    };
    serde_json::to_value(&report).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> (Vec<Incident>, Summary) {
        (
            vec![Incident {
                log: "Error at /src/user/user.service.ts:50:34".into(),
                file: "/src/user/user.service.ts".into(),
                line: 50,
                code_context: "const user = await repo.find(id);".into(),
            }],
            Summary {
                blocks: 3,
                with_error: 2,
                matched: 1,
            },
        )
    }

    #[test]
    fn test_compose_extract_json_shape() {
        let (incidents, summary) = sample();
        let out = compose_extract_json(&incidents, &summary);
        assert_eq!(out["summary"]["matched"], 1);
        assert_eq!(out["incidents"][0]["file"], "/src/user/user.service.ts");
        assert_eq!(out["incidents"][0]["line"], 50);
        assert!(out["incidents"][0]["line"].is_u64());
    }

    #[test]
    fn test_write_dataset_round_trip_and_key_order() {
        let (incidents, _) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracted_contexts.json");
        write_dataset(&path, &incidents).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        // 2-space indentation on the first nested level
        assert!(body.starts_with("[\n  {"));
        // Declared field order survives serialization
        let log_pos = body.find("\"log\"").unwrap();
        let file_pos = body.find("\"file\"").unwrap();
        let line_pos = body.find("\"line\"").unwrap();
        let ctx_pos = body.find("\"code_context\"").unwrap();
        assert!(log_pos < file_pos && file_pos < line_pos && line_pos < ctx_pos);

        let parsed: JsonVal = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed[0]["line"], 50);
        assert_eq!(parsed[0]["file"], "/src/user/user.service.ts");
    }

    #[test]
    fn test_write_dataset_overwrites() {
        let (incidents, _) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("extracted_contexts.json");
        fs::write(&path, "stale content that is much longer than the new one").unwrap();
        write_dataset(&path, &incidents[..0]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
