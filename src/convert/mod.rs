pub mod renderer;
pub mod sanitizer;
pub mod tokenizer;
pub mod validator;

use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::CaseInput;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Snake,
    Camel,
    Dot,
    Kebab,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Snake, Style::Camel, Style::Dot, Style::Kebab];

    /// Join string placed between rendered words, if the style has one.
    pub fn separator(self) -> Option<&'static str> {
        match self {
            Style::Snake => Some("_"),
            Style::Camel => None,
            Style::Dot => Some("."),
            Style::Kebab => Some("-"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Snake => "snake",
            Style::Camel => "camel",
            Style::Dot => "dot",
            Style::Kebab => "kebab",
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snake" | "snake_case" => Ok(Style::Snake),
            "camel" | "camelcase" => Ok(Style::Camel),
            "dot" | "dot.case" => Ok(Style::Dot),
            "kebab" | "kebab-case" => Ok(Style::Kebab),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Run the full pipeline for `style`: validate, sanitize and tokenize, render.
pub fn convert<T: CaseInput + ?Sized>(input: &T, style: Style) -> Result<String, CaseError> {
    let result = validator::validate(input)
        .and_then(|text| tokenizer::tokenize(text, style))
        .map(|words| renderer::render(&words, style));

    match &result {
        Ok(output) => tracing::trace!(%style, output = %output, "converted"),
        Err(err) => tracing::debug!(%style, kind = err.kind(), "conversion rejected"),
    }

    result
}

/// Lowercase the input and replace each whitespace run with `_`.
pub fn to_snake_case<T: CaseInput + ?Sized>(input: &T) -> Result<String, CaseError> {
    convert(input, Style::Snake)
}

pub fn to_camel_case<T: CaseInput + ?Sized>(input: &T) -> Result<String, CaseError> {
    convert(input, Style::Camel)
}

pub fn to_dot_case<T: CaseInput + ?Sized>(input: &T) -> Result<String, CaseError> {
    convert(input, Style::Dot)
}

pub fn to_kebab_case<T: CaseInput + ?Sized>(input: &T) -> Result<String, CaseError> {
    convert(input, Style::Kebab)
}
