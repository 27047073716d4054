use crate::{BatchResult, CaseError, RecordOutcome, Style};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRecord {
    pub index: usize,
    pub input: String,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput {
    pub styles: Vec<Style>,
    pub total: usize,
    pub failed: usize,
    pub results: Vec<JsonRecord>,
}

impl From<&RecordOutcome> for JsonRecord {
    fn from(outcome: &RecordOutcome) -> Self {
        let (output, error, kind) = match &outcome.output {
            Ok(text) => (Some(text.clone()), None, None),
            Err(e) => (None, Some(e.to_string()), Some(e.kind().to_string())),
        };
        JsonRecord {
            index: outcome.index,
            input: outcome.input.clone(),
            style: outcome.style,
            output,
            error,
            kind,
        }
    }
}

pub fn to_json_output(result: &BatchResult, styles: &[Style]) -> JsonOutput {
    JsonOutput {
        styles: styles.to_vec(),
        total: result.records.len(),
        failed: result.failed_count,
        results: result.records.iter().map(JsonRecord::from).collect(),
    }
}

pub fn print_results(
    result: &BatchResult,
    styles: &[Style],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(result, styles.len() > 1, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_results(result, styles),
    }
}

fn print_text_results(result: &BatchResult, label_styles: bool, colored_output: bool) {
    for outcome in &result.records {
        match &outcome.output {
            Ok(text) if label_styles => {
                let label = format!("{:>5}", outcome.style.name());
                if colored_output {
                    println!("{} {}", label.dimmed(), text);
                } else {
                    println!("{} {}", label, text);
                }
            }
            Ok(text) => println!("{}", text),
            Err(e) => {
                if colored_output {
                    eprintln!(
                        "{} {} {} {}",
                        format!("{}:", outcome.index).blue().bold(),
                        outcome.style.name().dimmed(),
                        e.to_string().red().bold(),
                        format!("({})", outcome.input).dimmed()
                    );
                } else {
                    eprintln!("{}", format_failure(outcome, e));
                }
            }
        }
    }
}

/// `N: <style> <error> (<input>)`
pub fn format_failure(outcome: &RecordOutcome, error: &CaseError) -> String {
    format!(
        "{}: {} {} ({})",
        outcome.index,
        outcome.style.name(),
        error,
        outcome.input
    )
}

fn print_json_results(result: &BatchResult, styles: &[Style]) -> Result<()> {
    let output = to_json_output(result, styles);
    let rendered =
        serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", rendered);
    Ok(())
}

pub fn print_summary(result: &BatchResult, colored: bool) {
    eprintln!();
    if result.failed_count == 0 {
        let message = format!(
            "✓ {} {} converted",
            result.converted_count,
            if result.converted_count == 1 { "value" } else { "values" }
        );
        if colored {
            eprintln!("{}", message.green().bold());
        } else {
            eprintln!("{}", message);
        }
    } else {
        let failure_word = if result.failed_count == 1 { "failure" } else { "failures" };
        if colored {
            eprintln!(
                "{} {} {}, {} converted",
                "✗".red().bold(),
                result.failed_count.to_string().red().bold(),
                failure_word,
                result.converted_count
            );
        } else {
            eprintln!(
                "✗ {} {}, {} converted",
                result.failed_count, failure_word, result.converted_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_failure_line_layout() {
        let outcome = RecordOutcome {
            index: 3,
            input: "!!!".to_string(),
            style: Style::Kebab,
            output: Err(CaseError::NoValidCharacters),
        };
        assert_eq!(
            format_failure(&outcome, &CaseError::NoValidCharacters),
            "3: kebab input contains no valid characters (!!!)"
        );
    }

    #[test]
    fn test_json_output_shape() {
        let result = BatchResult {
            converted_count: 1,
            failed_count: 1,
            records: vec![
                RecordOutcome {
                    index: 1,
                    input: "hello world".to_string(),
                    style: Style::Camel,
                    output: Ok("helloWorld".to_string()),
                },
                RecordOutcome {
                    index: 2,
                    input: "42".to_string(),
                    style: Style::Camel,
                    output: Err(CaseError::TypeMismatch { found: "number" }),
                },
            ],
        };

        let json = serde_json::to_value(to_json_output(&result, &[Style::Camel])).unwrap();
        assert_eq!(json["styles"][0], "camel");
        assert_eq!(json["total"], 2);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["results"][0]["output"], "helloWorld");
        assert!(json["results"][0].get("error").is_none());
        assert_eq!(json["results"][1]["kind"], "type_mismatch");
        assert_eq!(json["results"][1]["error"], "expected a string, got number");
    }
}
