// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `coolsem hierarchy`: print the inheritance tree of a parsed program.
//!
//! The tree is printed after error recovery: classes with an undefined or
//! final parent appear under `Object`, and classes on or above a cycle are
//! listed separately. Errors do not make this command fail.

use crate::input::load_program;
use camino::Utf8Path;
use cool_semant_core::SemantOptions;
use cool_semant_core::semantic_analysis::validate;
use miette::Result;
use tracing::{instrument, warn};

#[instrument(skip_all, fields(path = %path))]
pub fn run_hierarchy(path: &Utf8Path) -> Result<()> {
    let program = load_program(path)?;
    let result = validate(&program, &SemantOptions::default());
    if !result.is_ok() {
        warn!(
            errors = result.errors(),
            "program has semantic errors; showing the recovered hierarchy"
        );
    }

    print!("{}", result.graph.dump());
    Ok(())
}
