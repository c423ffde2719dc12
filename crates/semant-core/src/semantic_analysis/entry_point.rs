// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Program entry point check.
//!
//! A runnable program needs a class `Main` declaring a method `main` that
//! takes no arguments. Enabled by [`SemantOptions::require_main`](crate::SemantOptions).

use super::class_table::ClassTable;
use super::error::SemanticErrorKind;
use super::sink::DiagnosticSink;

/// Name of the class holding the entry point.
pub const MAIN_CLASS: &str = "Main";
/// Name of the entry point method.
pub const MAIN_METHOD: &str = "main";

/// Check that `Main.main()` exists.
///
/// Only methods declared directly in `Main` count.
pub fn check_entry_point(table: &ClassTable, sink: &mut DiagnosticSink) {
    let Some(main) = table.get(MAIN_CLASS) else {
        sink.report_global(SemanticErrorKind::MissingMain);
        return;
    };

    match main.methods().find(|m| m.name.as_str() == MAIN_METHOD) {
        None => sink.report_class(main, SemanticErrorKind::MissingMainMethod),
        Some(method) if method.arity() > 0 => sink.report_at(
            &main.filename,
            method.span,
            SemanticErrorKind::MainMethodHasFormals,
        ),
        Some(_) => {}
    }
}
