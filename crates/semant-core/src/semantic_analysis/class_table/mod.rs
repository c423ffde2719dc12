// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Class registry.
//!
//! **DDD Context:** Semantic Analysis
//!
//! The `ClassTable` maps class names to their definitions. It is filled once
//! per validation run: basic classes first, then user classes in declaration
//! order. Name collisions are reported and the later declaration is dropped,
//! so every name in the table is unique and the first declaration wins.

use super::error::{SemanticError, SemanticErrorKind};
use super::sink::DiagnosticSink;
use crate::ast::{ClassDefinition, Program};
use ecow::EcoString;
use std::collections::HashMap;
use tracing::{debug, instrument};

mod builtins;

pub use builtins::{BOOL, BUILTIN_FILENAME, INT, IO, OBJECT, SELF_TYPE, STRING};

/// Registry of all classes known to a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    classes: HashMap<EcoString, ClassDefinition>,
    /// Registration order: basic classes, then user classes as declared.
    order: Vec<EcoString>,
}

impl ClassTable {
    /// Returns true if `name` is one of the five basic classes.
    #[must_use]
    pub fn is_builtin(name: &str) -> bool {
        builtins::is_builtin_class(name)
    }

    /// Returns true if `name` may not be inherited from.
    #[must_use]
    pub fn is_final(name: &str) -> bool {
        builtins::is_final_class(name)
    }

    /// Returns true if user code may not declare a class called `name`.
    #[must_use]
    pub fn is_reserved(name: &str) -> bool {
        builtins::is_reserved_class_name(name)
    }

    /// Create a table holding only the basic classes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut table = Self {
            classes: HashMap::new(),
            order: Vec::new(),
        };
        for class in builtins::builtin_classes() {
            table.insert(class);
        }
        table
    }

    /// Build the table from the basic classes and a parsed program.
    ///
    /// Reserved-name and duplicate declarations are reported to `sink` and
    /// left out of the table.
    #[instrument(skip_all, fields(classes = program.classes.len()))]
    pub fn register(program: &Program, sink: &mut DiagnosticSink) -> Self {
        let mut table = Self::with_builtins();

        for class in &program.classes {
            if Self::is_reserved(&class.name) {
                sink.report_class(
                    class,
                    SemanticErrorKind::ReservedClassName {
                        name: class.name.clone(),
                    },
                );
                continue;
            }

            if let Some(first) = table.classes.get(&class.name) {
                let hint = format!("`{}` is first defined at {}", first.name, first.location());
                sink.report(
                    SemanticError::new(
                        SemanticErrorKind::DuplicateClass {
                            name: class.name.clone(),
                        },
                        class.location(),
                    )
                    .with_hint(hint),
                );
                continue;
            }

            debug!(class = %class.name, "registered class");
            table.insert(class.clone());
        }

        table
    }

    fn insert(&mut self, class: ClassDefinition) {
        self.order.push(class.name.clone());
        self.classes.insert(class.name.clone(), class);
    }

    /// Look up a class by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Check if a class exists in the table.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes, basic classes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: the basic classes are always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Class names in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &EcoString> {
        self.order.iter()
    }

    /// All classes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.order.iter().filter_map(|name| self.classes.get(name))
    }

    /// User classes in declaration order.
    pub fn user_classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.iter().filter(|c| !Self::is_builtin(&c.name))
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::with_builtins()
    }
}
