// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic sink shared by all validation stages.
//!
//! **DDD Context:** Semantic Analysis
//!
//! The sink owns the error counter and the collected diagnostics. Stages
//! receive it as `&mut` and may only add to it through one of the three
//! reporting entry points, which differ in how the location is derived:
//!
//! - [`DiagnosticSink::report_class`]: the declaration of a class,
//! - [`DiagnosticSink::report_at`]: an explicit file and node span,
//! - [`DiagnosticSink::report_global`]: no location.

use super::error::{SemanticError, SemanticErrorKind};
use crate::ast::ClassDefinition;
use crate::source_analysis::{Location, Span};
use tracing::debug;

/// Accumulates semantic errors for one validation run.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    error_count: usize,
    diagnostics: Vec<SemanticError>,
}

impl DiagnosticSink {
    /// Creates an empty sink with a zero error count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports an error located at the declaration of `class`.
    pub fn report_class(&mut self, class: &ClassDefinition, kind: SemanticErrorKind) {
        self.push(SemanticError::new(kind, class.location()));
    }

    /// Reports an error located at `span` in `filename`.
    pub fn report_at(&mut self, filename: &str, span: Span, kind: SemanticErrorKind) {
        self.push(SemanticError::new(kind, Location::source(filename, span)));
    }

    /// Reports an error that has no source location.
    pub fn report_global(&mut self, kind: SemanticErrorKind) {
        self.push(SemanticError::new(kind, Location::Global));
    }

    /// Reports a fully built error, keeping its location and hint.
    pub fn report(&mut self, error: SemanticError) {
        self.push(error);
    }

    fn push(&mut self, error: SemanticError) {
        debug!(location = %error.location, "{}", error.kind);
        self.error_count += 1;
        self.diagnostics.push(error);
    }

    /// Number of errors reported so far.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.error_count
    }

    /// Returns true if no error has been reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }

    /// Errors reported so far, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[SemanticError] {
        &self.diagnostics
    }

    /// Consumes the sink, returning the collected errors.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<SemanticError> {
        self.diagnostics
    }
}
