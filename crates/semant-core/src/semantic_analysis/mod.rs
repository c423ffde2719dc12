// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis for COOL class hierarchies.
//!
//! This module validates the class declarations handed over by the parser:
//! - Class registration with duplicate and reserved-name detection (`class_table`)
//! - Parent resolution with undefined and final parent detection (`inheritance`)
//! - Inheritance cycle detection (`cycles`)
//! - Method redefinition signature checks (`overrides`)
//! - Class-local feature checks and the optional entry point check
//!
//! Every stage runs on every input, whatever earlier stages reported, and
//! each applies a local recovery so that one error does not cascade: the
//! duplicate declaration is dropped, an illegal parent becomes `Object`,
//! and cyclic classes are left out of ancestor walks.

use crate::SemantOptions;
use crate::ast::Program;
use tracing::{debug, info, instrument};

pub mod class_table;
mod cycles;
mod entry_point;
pub mod error;
mod features;
mod inheritance;
mod overrides;
mod sink;


pub use class_table::ClassTable;
pub use cycles::{CycleReport, find_cycles};
pub use entry_point::{MAIN_CLASS, MAIN_METHOD, check_entry_point};
pub use error::{ErrorCategory, SemanticError, SemanticErrorKind, SignatureMismatch};
pub use features::check_features;
pub use inheritance::InheritanceGraph;
pub use overrides::{check_overrides, signature_mismatch};
pub use sink::DiagnosticSink;

/// Progress of a validation run. Stages are entered strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationStage {
    Unvalidated,
    Registered,
    GraphBuilt,
    CyclesResolved,
    OverridesChecked,
    Done,
}

/// Outcome of validating a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// All registered classes, basic classes included.
    pub classes: ClassTable,
    /// The parent relation after error recovery.
    pub graph: InheritanceGraph,
    /// Classes on inheritance cycles.
    pub cycles: CycleReport,
    /// Errors in report order.
    pub diagnostics: Vec<SemanticError>,
    error_count: usize,
}

impl ValidationResult {
    /// Number of errors reported.
    #[must_use]
    pub fn errors(&self) -> usize {
        self.error_count
    }

    /// Returns true if later compiler phases may run.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error_count == 0
    }
}

/// Drives the validation stages over one program.
#[derive(Debug)]
pub struct Validator {
    options: SemantOptions,
    stage: ValidationStage,
    sink: DiagnosticSink,
}

impl Validator {
    /// Create a validator with a fresh diagnostic sink.
    #[must_use]
    pub fn new(options: SemantOptions) -> Self {
        Self {
            options,
            stage: ValidationStage::Unvalidated,
            sink: DiagnosticSink::new(),
        }
    }

    /// The stage reached so far.
    #[must_use]
    pub fn stage(&self) -> ValidationStage {
        self.stage
    }

    fn advance(&mut self, next: ValidationStage) {
        debug_assert!(next > self.stage, "stage {next:?} entered after {:?}", self.stage);
        debug!(from = ?self.stage, to = ?next, errors = self.sink.errors(), "stage complete");
        self.stage = next;
    }

    /// Run every stage over `program`.
    #[instrument(skip_all, fields(classes = program.classes.len()))]
    pub fn run(mut self, program: &Program) -> ValidationResult {
        let classes = ClassTable::register(program, &mut self.sink);
        self.advance(ValidationStage::Registered);

        let graph = InheritanceGraph::build(&classes, &mut self.sink);
        self.advance(ValidationStage::GraphBuilt);

        let cycles = find_cycles(&graph, &classes, &mut self.sink);
        self.advance(ValidationStage::CyclesResolved);

        check_overrides(&classes, &graph, &cycles, &mut self.sink);
        self.advance(ValidationStage::OverridesChecked);

        check_features(&classes, &self.options, &mut self.sink);
        if self.options.require_main {
            check_entry_point(&classes, &mut self.sink);
        }
        self.advance(ValidationStage::Done);

        let error_count = self.sink.errors();
        info!(errors = error_count, "class hierarchy validated");
        ValidationResult {
            classes,
            graph,
            cycles,
            diagnostics: self.sink.into_diagnostics(),
            error_count,
        }
    }
}

/// Validate a program with the given options.
///
/// Convenience wrapper around [`Validator`].
#[must_use]
pub fn validate(program: &Program, options: &SemantOptions) -> ValidationResult {
    Validator::new(*options).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ClassDefinition, MethodDefinition};

    fn run(classes: Vec<ClassDefinition>) -> ValidationResult {
        validate(&Program::new(classes), &SemantOptions::default())
    }

    fn m(ty: &str) -> MethodDefinition {
        MethodDefinition::new("m", &[("x", ty)], "Object")
    }

    #[test]
    fn validator_starts_unvalidated() {
        let validator = Validator::new(SemantOptions::default());
        assert_eq!(validator.stage(), ValidationStage::Unvalidated);
    }

    #[test]
    fn empty_program_is_valid() {
        let result = run(vec![]);
        assert!(result.is_ok());
        assert_eq!(result.classes.len(), 5);
    }

    #[test]
    fn matching_redefinition_has_no_errors() {
        let result = run(vec![
            ClassDefinition::new("A", None).with_method(m("Int")),
            ClassDefinition::new("B", Some("A")).with_method(m("Int")),
        ]);
        assert_eq!(result.errors(), 0);
    }

    #[test]
    fn changed_parameter_type_is_one_signature_error() {
        let result = run(vec![
            ClassDefinition::new("A", None).with_method(m("Int")),
            ClassDefinition::new("B", Some("A")).with_method(m("String")),
        ]);
        assert_eq!(result.errors(), 1);
        assert_eq!(result.diagnostics[0].category(), ErrorCategory::Signature);
    }

    #[test]
    fn adding_a_two_class_cycle_adds_two_errors() {
        let result = run(vec![
            ClassDefinition::new("A", None).with_method(m("Int")),
            ClassDefinition::new("B", Some("A")).with_method(m("String")),
            ClassDefinition::new("C", Some("D")),
            ClassDefinition::new("D", Some("C")),
        ]);
        assert_eq!(result.errors(), 3);
        let cycle_classes: Vec<&str> = result
            .diagnostics
            .iter()
            .filter_map(|e| match &e.kind {
                SemanticErrorKind::InheritanceCycle { class } => Some(class.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(cycle_classes, vec!["C", "D"]);
    }

    #[test]
    fn redeclaring_int_keeps_builtin_usable() {
        let result = run(vec![
            ClassDefinition::new("Int", None),
            ClassDefinition::new("A", None).with_method(m("Int")),
            ClassDefinition::new("B", Some("A")).with_method(m("Int")),
        ]);
        assert_eq!(result.errors(), 1);
        assert_eq!(
            result.diagnostics[0].kind,
            SemanticErrorKind::ReservedClassName { name: "Int".into() }
        );
        assert!(ClassTable::is_builtin("Int"));
        assert!(result.classes.contains("Int"));
    }

    #[test]
    fn stages_all_run_after_early_errors() {
        // Duplicate, undefined parent, cycle and signature errors in one run.
        let result = run(vec![
            ClassDefinition::new("A", None).with_method(m("Int")),
            ClassDefinition::new("A", None),
            ClassDefinition::new("Orphan", Some("Ghost")).with_method(m("Int")),
            ClassDefinition::new("B", Some("A")).with_method(m("Bool")),
            ClassDefinition::new("S", Some("S")),
        ]);
        let categories: Vec<ErrorCategory> =
            result.diagnostics.iter().map(SemanticError::category).collect();
        assert_eq!(
            categories,
            vec![
                ErrorCategory::Structural,
                ErrorCategory::Structural,
                ErrorCategory::Topological,
                ErrorCategory::Signature,
            ]
        );
        assert_eq!(result.errors(), 4);
    }

    #[test]
    fn entry_point_check_is_opt_in() {
        let program = Program::new(vec![ClassDefinition::new("A", None)]);
        assert!(validate(&program, &SemantOptions::default()).is_ok());

        let strict = validate(&program, &SemantOptions::default().with_require_main(true));
        assert_eq!(strict.errors(), 1);
        assert_eq!(strict.diagnostics[0].kind, SemanticErrorKind::MissingMain);
    }

    #[test]
    fn result_exposes_recovered_graph() {
        let result = run(vec![ClassDefinition::new("A", Some("String"))]);
        assert_eq!(result.errors(), 1);
        assert_eq!(
            result.graph.parent("A").map(ecow::EcoString::as_str),
            Some("Object")
        );
        assert!(result.cycles.is_empty());
    }
}
