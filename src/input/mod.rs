pub mod json;
pub mod plaintext;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// One record per line.
    PlainText,
    /// A single JSON array of values.
    JsonArray,
    /// One JSON value per line.
    JsonLines,
}

impl SourceKind {
    /// Detect source kind from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => SourceKind::JsonArray,
            "jsonl" | "ndjson" => SourceKind::JsonLines,
            _ => SourceKind::PlainText,
        }
    }
}

/// A single value to convert, with its 1-indexed position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub index: usize,
    pub value: Value,
}

impl Record {
    pub fn text(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            value: Value::String(text.into()),
        }
    }

    /// Raw input as shown in reports: strings verbatim, anything else as JSON.
    pub fn display_input(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Split already-loaded content into records according to `kind`.
pub fn parse_content(kind: SourceKind, content: &str, skip_blank_lines: bool) -> Result<Vec<Record>> {
    match kind {
        SourceKind::PlainText => Ok(plaintext::parse(content, skip_blank_lines)),
        SourceKind::JsonArray => json::parse_array(content),
        SourceKind::JsonLines => json::parse_lines(content, skip_blank_lines),
    }
}

/// Read a file (or stdin for `-`) and extract its records
pub fn read_records(path: &Path, skip_blank_lines: bool) -> Result<Vec<Record>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    let kind = SourceKind::from_path(path);
    tracing::debug!(path = %path.display(), ?kind, bytes = content.len(), "loaded input");

    parse_content(kind, &content, skip_blank_lines)
        .with_context(|| format!("Failed to parse records from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_source_kind_detection() {
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("names.json")),
            SourceKind::JsonArray
        );
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("names.NDJSON")),
            SourceKind::JsonLines
        );
        assert_eq!(
            SourceKind::from_path(&PathBuf::from("names.txt")),
            SourceKind::PlainText
        );
        assert_eq!(SourceKind::from_path(&PathBuf::from("-")), SourceKind::PlainText);
    }

    #[test]
    fn test_display_input() {
        assert_eq!(Record::text(1, "a b").display_input(), "a b");
        let record = Record {
            index: 2,
            value: Value::Null,
        };
        assert_eq!(record.display_input(), "null");
    }
}
