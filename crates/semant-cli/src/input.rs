// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Reading programs and the source files their diagnostics point into.

use camino::{Utf8Path, Utf8PathBuf};
use cool_semant_core::ast::Program;
use miette::{Context, IntoDiagnostic, Result};
use std::collections::HashMap;
use std::fs;
use tracing::debug;

/// Load a parsed program from its JSON form.
pub fn load_program(path: &Utf8Path) -> Result<Program> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read program '{path}'"))?;

    let program: Program = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse program '{path}'"))?;

    debug!(%path, classes = program.classes.len(), "program loaded");
    Ok(program)
}

/// Lazily read COOL source files, resolved against a base directory.
///
/// Files that cannot be read are remembered as missing; diagnostics for them
/// are rendered without a snippet.
#[derive(Debug)]
pub struct SourceFiles {
    base: Utf8PathBuf,
    files: HashMap<String, Option<String>>,
}

impl SourceFiles {
    pub fn new(base: &Utf8Path) -> Self {
        Self {
            base: base.to_path_buf(),
            files: HashMap::new(),
        }
    }

    /// Text of `file`, if it can be read.
    pub fn get(&mut self, file: &str) -> Option<&str> {
        let base = &self.base;
        self.files
            .entry(file.to_string())
            .or_insert_with(|| {
                let path = base.join(file);
                let text = fs::read_to_string(&path).ok();
                debug!(%path, found = text.is_some(), "source lookup");
                text
            })
            .as_deref()
    }
}
