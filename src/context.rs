//! Source context extraction around a referenced line.
//!
//! Returns a string in every case: the extracted lines, a fixed sentinel when
//! the file is absent, or an error description when reading fails. Never
//! propagates an error past its own boundary.

use std::fs;
use std::path::Path;

/// Sentinel returned when the referenced file does not exist.
pub const FILE_NOT_FOUND: &str = "File not found.";

/// Extract the line at `line` (1-based) and up to `window` surrounding lines
/// on each side from the file at `path`.
///
/// The slice is `[max(0, line - window), min(len, line + window))` in 0-based
/// terms, so out-of-range lines clamp to a shorter (possibly empty) context
/// instead of failing. Line endings inside the slice are kept verbatim; the
/// result is trimmed at both ends.
pub fn extract_code_context(path: &Path, line: usize, window: usize) -> String {
    if !path.exists() {
        return FILE_NOT_FOUND.to_string();
    }
    match fs::read_to_string(path) {
        Ok(data) => {
            let lines: Vec<&str> = data.split_inclusive('\n').collect();
            let start = line.saturating_sub(window);
            let end = (line + window).min(lines.len());
            if start >= end {
                return String::new();
            }
            lines[start..end].concat().trim().to_string()
        }
        Err(e) => format!("Error reading file: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_numbered(path: &Path, count: usize) {
        let body: String = (1..=count).map(|i| format!("line {}\n", i)).collect();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_window_in_range() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("user.service.ts");
        write_numbered(&file, 100);
        let ctx = extract_code_context(&file, 50, 5);
        // 0-based slice [45, 55) over a 100-line file
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "line 46");
        assert_eq!(lines[9], "line 55");
    }

    #[test]
    fn test_window_clamps_at_start() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.ts");
        write_numbered(&file, 20);
        // line 2 with window 5 clamps start to 0
        let ctx = extract_code_context(&file, 2, 5);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[6], "line 7");
    }

    #[test]
    fn test_window_clamps_at_end() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.ts");
        write_numbered(&file, 10);
        let ctx = extract_code_context(&file, 9, 5);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "line 5");
        assert_eq!(lines[5], "line 10");
    }

    #[test]
    fn test_line_beyond_eof_yields_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.ts");
        write_numbered(&file, 10);
        let ctx = extract_code_context(&file, 100, 5);
        assert_eq!(ctx, "");
    }

    #[test]
    fn test_line_zero_clamps_to_start() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.ts");
        write_numbered(&file, 10);
        let ctx = extract_code_context(&file, 0, 5);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "line 1");
    }

    #[test]
    fn test_missing_file_returns_sentinel() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nope.ts");
        assert_eq!(extract_code_context(&file, 10, 5), FILE_NOT_FOUND);
    }

    #[test]
    fn test_unreadable_file_returns_error_string() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bin.ts");
        // Invalid UTF-8 forces a read error rather than a panic
        fs::write(&file, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let ctx = extract_code_context(&file, 1, 5);
        assert!(ctx.starts_with("Error reading file:"));
    }
}
