// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `coolsem check`: validate the class hierarchy of a parsed program.
//!
//! Every semantic error is printed, then the command fails with the error
//! count so that the exit code is non-zero. A clean program prints
//! `<path>: ok`.

use crate::diagnostic::SemanticDiagnostic;
use crate::input::{SourceFiles, load_program};
use camino::Utf8Path;
use cool_semant_core::SemantOptions;
use cool_semant_core::semantic_analysis::{SemanticError, validate};
use miette::Result;
use tracing::{info, instrument};

/// Validate the program at `path` and report its errors.
#[instrument(skip_all, fields(path = %path))]
pub fn run_check(path: &Utf8Path, options: SemantOptions, format: OutputFormat) -> Result<()> {
    let program = load_program(path)?;
    let result = validate(&program, &options);
    info!(errors = result.errors(), "checked");

    let base = path.parent().unwrap_or(Utf8Path::new("."));
    let mut sources = SourceFiles::new(base);

    for error in &result.diagnostics {
        match format {
            OutputFormat::Text => {
                let source = match error.location.file() {
                    Some(file) => sources.get(file),
                    None => None,
                };
                let diag = SemanticDiagnostic::from_semantic_error(error, source);
                eprintln!("{:?}", miette::Report::new(diag));
            }
            OutputFormat::Json => println!("{}", to_json(error)),
        }
    }

    let count = result.errors();
    if count > 0 {
        let plural = if count == 1 { "" } else { "s" };
        miette::bail!("{count} semantic error{plural} found in '{path}'");
    }

    if format == OutputFormat::Text {
        println!("{path}: ok");
    }
    Ok(())
}

fn to_json(error: &SemanticError) -> serde_json::Value {
    let span = error.location.span();
    serde_json::json!({
        "file": error.location.file(),
        "category": format!("{:?}", error.category()).to_lowercase(),
        "message": error.message(),
        "span_start": span.map(|s| s.start()),
        "span_end": span.map(|s| s.end()),
        "hint": error.hint.as_deref(),
    })
}

/// Output format for semantic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output via miette (default).
    #[default]
    Text,
    /// Machine-readable JSON (one object per line).
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}': expected 'text' or 'json'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cool_semant_core::semantic_analysis::SemanticErrorKind;
    use cool_semant_core::source_analysis::{Location, Span};

    #[test]
    fn parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_record_for_located_error() {
        let error = SemanticError::new(
            SemanticErrorKind::InheritanceCycle { class: "C".into() },
            Location::source("c.cl", Span::new(4, 20)),
        );
        let json = to_json(&error);
        assert_eq!(json["file"], "c.cl");
        assert_eq!(json["category"], "topological");
        assert_eq!(json["span_start"], 4);
        assert_eq!(json["span_end"], 20);
        assert!(json["hint"].is_null());
    }

    #[test]
    fn json_record_for_global_error() {
        let error = SemanticError::new(SemanticErrorKind::MissingMain, Location::Global);
        let json = to_json(&error);
        assert!(json["file"].is_null());
        assert!(json["span_start"].is_null());
        assert_eq!(json["message"], "Class Main is not defined.");
    }
}
