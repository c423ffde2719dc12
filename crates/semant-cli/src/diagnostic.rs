// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic error rendering using miette.
//!
//! Converts validator errors into miette diagnostics with:
//! - A `file:offset: message` header
//! - A source snippet with the offending node labelled, when the COOL source
//!   file is available and the span fits inside it
//! - The error's hint, if any, as help text

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use cool_semant_core::semantic_analysis::{ErrorCategory, SemanticError};
use miette::{Diagnostic, SourceSpan};

/// A semantic error with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{location}: {message}")]
#[diagnostic(code(coolsem::semant))]
pub struct SemanticDiagnostic {
    /// Rendered location (`file:offset` or `<program>`)
    pub location: String,
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: Option<miette::NamedSource<String>>,
    /// Location of the error inside `src`
    #[label("{label}")]
    pub span: Option<SourceSpan>,
    /// Label for the error span
    pub label: String,
    #[help]
    pub hint: Option<String>,
}

impl SemanticDiagnostic {
    /// Create a diagnostic from a validator error.
    ///
    /// `source` is the text of the file the error points into, if known.
    pub fn from_semantic_error(error: &SemanticError, source: Option<&str>) -> Self {
        let label = match error.category() {
            ErrorCategory::Structural => "class declared here",
            ErrorCategory::Topological => "part of the cycle",
            ErrorCategory::Signature => "declared here",
            ErrorCategory::Program => "entry point",
        };

        let snippet = match (error.location.file(), error.location.span(), source) {
            (Some(file), Some(span), Some(text)) if span.end() as usize <= text.len() => {
                Some((miette::NamedSource::new(file, text.to_string()), span))
            }
            _ => None,
        };
        let (src, span): (_, Option<SourceSpan>) = match snippet {
            Some((src, span)) => (Some(src), Some(span.into())),
            None => (None, None),
        };

        Self {
            location: error.location.to_string(),
            message: error.message(),
            src,
            span,
            label: label.to_string(),
            hint: error.hint.as_ref().map(ToString::to_string),
        }
    }
}
