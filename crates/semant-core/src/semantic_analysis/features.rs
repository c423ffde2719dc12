// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Class-local feature checks.
//!
//! **DDD Context:** Semantic Analysis
//!
//! Checks that only need one class at a time: duplicate methods, duplicate
//! attributes, duplicate or reserved formal names and, when enabled, that the
//! types named in each method signature exist. Methods and attributes live
//! in separate namespaces, so a method and an attribute may share a name
//! within one class.

use super::class_table::{ClassTable, SELF_TYPE};
use super::error::{SemanticError, SemanticErrorKind};
use super::sink::DiagnosticSink;
use crate::SemantOptions;
use crate::ast::{ClassDefinition, MethodDefinition};
use crate::source_analysis::Span;
use ecow::EcoString;
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Run the class-local checks on every user class.
#[instrument(skip_all)]
pub fn check_features(table: &ClassTable, options: &SemantOptions, sink: &mut DiagnosticSink) {
    for class in table.user_classes() {
        check_duplicate_features(class, sink);
        for method in class.methods() {
            check_formals(class, method, sink);
            if options.check_signature_types {
                check_signature_types(table, class, method, sink);
            }
        }
    }
}

/// Reports the second and later declarations of a method or attribute name.
fn check_duplicate_features(class: &ClassDefinition, sink: &mut DiagnosticSink) {
    let mut methods: HashMap<&str, Span> = HashMap::new();
    let mut attributes: HashMap<&str, Span> = HashMap::new();

    for method in class.methods() {
        if let Some(&first) = methods.get(method.name.as_str()) {
            sink.report(
                SemanticError::new(
                    SemanticErrorKind::DuplicateMethod {
                        class: class.name.clone(),
                        method: method.name.clone(),
                    },
                    class.location_of(method.span),
                )
                .with_hint(first_defined_hint("method", first)),
            );
        } else {
            methods.insert(method.name.as_str(), method.span);
        }
    }

    for attribute in class.attributes() {
        if let Some(&first) = attributes.get(attribute.name.as_str()) {
            sink.report(
                SemanticError::new(
                    SemanticErrorKind::DuplicateAttribute {
                        class: class.name.clone(),
                        attribute: attribute.name.clone(),
                    },
                    class.location_of(attribute.span),
                )
                .with_hint(first_defined_hint("attribute", first)),
            );
        } else {
            attributes.insert(attribute.name.as_str(), attribute.span);
        }
    }
}

fn first_defined_hint(label: &str, first: Span) -> EcoString {
    ecow::eco_format!(
        "The first {label} with this name is defined at offset {}",
        first.start()
    )
}

fn check_formals(class: &ClassDefinition, method: &MethodDefinition, sink: &mut DiagnosticSink) {
    let mut seen: HashSet<&str> = HashSet::new();
    for formal in &method.formals {
        if formal.name.as_str() == "self" {
            sink.report_at(
                &class.filename,
                formal.span,
                SemanticErrorKind::SelfFormal {
                    method: method.name.clone(),
                },
            );
        } else if !seen.insert(formal.name.as_str()) {
            sink.report_at(
                &class.filename,
                formal.span,
                SemanticErrorKind::DuplicateFormal {
                    method: method.name.clone(),
                    formal: formal.name.clone(),
                },
            );
        }
    }
}

fn check_signature_types(
    table: &ClassTable,
    class: &ClassDefinition,
    method: &MethodDefinition,
    sink: &mut DiagnosticSink,
) {
    for formal in &method.formals {
        if formal.type_name.as_str() == SELF_TYPE {
            sink.report_at(
                &class.filename,
                formal.span,
                SemanticErrorKind::SelfTypeFormal {
                    method: method.name.clone(),
                    formal: formal.name.clone(),
                },
            );
        } else if !table.contains(&formal.type_name) {
            sink.report_at(
                &class.filename,
                formal.span,
                SemanticErrorKind::UndefinedFormalType {
                    method: method.name.clone(),
                    formal: formal.name.clone(),
                    type_name: formal.type_name.clone(),
                },
            );
        }
    }

    if method.return_type.as_str() != SELF_TYPE && !table.contains(&method.return_type) {
        sink.report_at(
            &class.filename,
            method.span,
            SemanticErrorKind::UndefinedReturnType {
                method: method.name.clone(),
                type_name: method.return_type.clone(),
            },
        );
    }
}
