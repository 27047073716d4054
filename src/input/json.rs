use super::Record;
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Parse a JSON document holding an array of values.
pub fn parse_array(content: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(content).context("Invalid JSON document")?;

    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, value)| Record { index: i + 1, value })
            .collect()),
        other => bail!(
            "Expected a JSON array of values, found {}",
            crate::convert::validator::json_type_name(&other)
        ),
    }
}

/// Parse newline-delimited JSON, one value per line.
pub fn parse_lines(content: &str, skip_blank_lines: bool) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;
        if line.trim().is_empty() {
            if skip_blank_lines {
                continue;
            }
            bail!("Line {}: empty line is not a JSON value", line_num);
        }

        let value = serde_json::from_str(line)
            .with_context(|| format!("Line {}: invalid JSON", line_num))?;
        records.push(Record {
            index: line_num,
            value,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_keeps_non_string_values() {
        let records = parse_array(r#"["hello world", null, 7, {"a": 1}]"#).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].value, json!("hello world"));
        assert_eq!(records[1].value, Value::Null);
        assert_eq!(records[2].index, 3);
    }

    #[test]
    fn test_array_rejects_other_documents() {
        let err = parse_array(r#"{"not": "an array"}"#).unwrap_err();
        assert!(err.to_string().contains("found object"));
    }

    #[test]
    fn test_json_lines() {
        let records = parse_lines("\"a b\"\n\ntrue\n", true).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].index, 3);
        assert_eq!(records[1].value, json!(true));
    }

    #[test]
    fn test_json_lines_reports_bad_line() {
        let err = parse_lines("\"ok\"\nnot json", true).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }
}
