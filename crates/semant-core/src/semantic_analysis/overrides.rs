// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Method override checking.
//!
//! **DDD Context:** Semantic Analysis
//!
//! A method may be redefined in a subclass, but only with exactly the
//! original signature: same number of formals, same formal types in the same
//! order, same return type. Types are compared by name; there is no
//! covariance. A method may not reuse the name of an inherited attribute.
//!
//! The ancestor walk stops at the first class on an inheritance cycle, so a
//! broken chain never produces derived signature errors.

use super::class_table::ClassTable;
use super::cycles::CycleReport;
use super::error::{SemanticErrorKind, SignatureMismatch};
use super::inheritance::InheritanceGraph;
use super::sink::DiagnosticSink;
use crate::ast::{ClassDefinition, Feature, MethodDefinition};
use tracing::{instrument, trace};

/// Compares a redefinition against the original method signature.
///
/// Returns the first difference: arity, then the first parameter whose type
/// differs, then the return type.
#[must_use]
pub fn signature_mismatch(
    original: &MethodDefinition,
    redefined: &MethodDefinition,
) -> Option<SignatureMismatch> {
    if original.arity() != redefined.arity() {
        return Some(SignatureMismatch::Arity {
            expected: original.arity(),
            found: redefined.arity(),
        });
    }

    let differing = original
        .formals
        .iter()
        .zip(&redefined.formals)
        .enumerate()
        .find(|(_, (o, r))| o.type_name != r.type_name);
    if let Some((position, (expected, found))) = differing {
        return Some(SignatureMismatch::Parameter {
            position,
            formal: found.name.clone(),
            expected: expected.type_name.clone(),
            found: found.type_name.clone(),
        });
    }

    (original.return_type != redefined.return_type).then(|| SignatureMismatch::ReturnType {
        expected: original.return_type.clone(),
        found: redefined.return_type.clone(),
    })
}

/// Finds the nearest proper ancestor of `class` declaring a feature `name`.
///
/// Returns `None` if no ancestor declares it or if the walk reaches a cyclic
/// class first.
fn nearest_definition<'a>(
    table: &'a ClassTable,
    graph: &InheritanceGraph,
    cycles: &CycleReport,
    class: &str,
    name: &str,
) -> Option<(&'a ClassDefinition, &'a Feature)> {
    let mut current = graph.parent(class);
    while let Some(ancestor) = current {
        if cycles.is_cyclic(ancestor) {
            return None;
        }
        let definition = table.get(ancestor)?;
        if let Some(feature) = definition.find_feature(name) {
            return Some((definition, feature));
        }
        current = graph.parent(ancestor);
    }
    None
}

/// Check every method redefinition in every non-cyclic class.
#[instrument(skip_all)]
pub fn check_overrides(
    table: &ClassTable,
    graph: &InheritanceGraph,
    cycles: &CycleReport,
    sink: &mut DiagnosticSink,
) {
    for class in table.iter().filter(|c| !cycles.is_cyclic(&c.name)) {
        for method in class.methods() {
            let Some((ancestor, original)) =
                nearest_definition(table, graph, cycles, &class.name, &method.name)
            else {
                continue;
            };
            trace!(class = %class.name, method = %method.name, ancestor = %ancestor.name, "redefinition");

            match original {
                Feature::Attribute(_) => sink.report_at(
                    &class.filename,
                    method.span,
                    SemanticErrorKind::MethodAttributeClash {
                        class: class.name.clone(),
                        method: method.name.clone(),
                        ancestor: ancestor.name.clone(),
                    },
                ),
                Feature::Method(original) => {
                    if let Some(mismatch) = signature_mismatch(original, method) {
                        sink.report_at(
                            &class.filename,
                            method.span,
                            SemanticErrorKind::SignatureMismatch {
                                class: class.name.clone(),
                                method: method.name.clone(),
                                ancestor: ancestor.name.clone(),
                                mismatch,
                            },
                        );
                    }
                }
            }
        }
    }
}
