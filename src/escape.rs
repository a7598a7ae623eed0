//! JSON string escaping for the paste-into-dataset helper.

/// JSON-escape `text` and return the inner content without the surrounding
/// quote characters, ready to paste as the value portion of a JSON string
/// field. The input is trimmed first.
pub fn escape_for_json(text: &str) -> String {
    let encoded = serde_json::to_string(text.trim()).unwrap_or_default();
    // Drop the quotes serde_json wraps around the encoded string
    encoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(&encoded)
        .to_string()
}
