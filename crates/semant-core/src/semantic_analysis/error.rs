// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic analysis error types.
//!
//! Errors are values, not control flow: every stage records them through the
//! [`DiagnosticSink`](super::DiagnosticSink) and carries on. The `Display`
//! output of [`SemanticErrorKind`] is the user-facing message.

use crate::source_analysis::Location;
use ecow::EcoString;
use thiserror::Error;

/// A semantic error discovered during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub location: Location,
    /// Optional hint for how to fix the problem.
    pub hint: Option<EcoString>,
}

impl SemanticError {
    /// Create a new semantic error.
    #[must_use]
    pub fn new(kind: SemanticErrorKind, location: Location) -> Self {
        Self {
            kind,
            location,
            hint: None,
        }
    }

    /// Attaches a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The error category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Broad grouping of semantic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Duplicate or reserved class names, illegal parents.
    Structural,
    /// Inheritance cycles.
    Topological,
    /// Method signatures and feature declarations.
    Signature,
    /// Whole-program requirements such as the entry point.
    Program,
}

/// Types of semantic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticErrorKind {
    /// A user class reuses the name of a basic class or `SELF_TYPE`.
    #[error("Redefinition of basic class {name}.")]
    ReservedClassName { name: EcoString },

    /// A class name declared twice.
    #[error("Class {name} was previously defined.")]
    DuplicateClass { name: EcoString },

    /// The declared parent does not exist.
    #[error("Class {class} inherits from an undefined class {parent}.")]
    UndefinedParent { class: EcoString, parent: EcoString },

    /// The declared parent may not be inherited from.
    #[error("Class {class} cannot inherit class {parent}.")]
    InheritsFromFinal { class: EcoString, parent: EcoString },

    /// The class takes part in an inheritance cycle.
    #[error("Class {class}, or an ancestor of {class}, is involved in an inheritance cycle.")]
    InheritanceCycle { class: EcoString },

    /// A method shares its name with an attribute of an ancestor.
    #[error(
        "Method {method} in class {class} has the same name as an attribute inherited from class {ancestor}."
    )]
    MethodAttributeClash {
        class: EcoString,
        method: EcoString,
        ancestor: EcoString,
    },

    /// A redefined method does not keep the original signature.
    #[error("In redefined method {method} of class {class}, {mismatch} (original in class {ancestor}).")]
    SignatureMismatch {
        class: EcoString,
        method: EcoString,
        ancestor: EcoString,
        mismatch: SignatureMismatch,
    },

    #[error("Method {method} is multiply defined in class {class}.")]
    DuplicateMethod { class: EcoString, method: EcoString },

    #[error("Attribute {attribute} is multiply defined in class {class}.")]
    DuplicateAttribute {
        class: EcoString,
        attribute: EcoString,
    },

    #[error("Formal parameter {formal} is multiply defined in method {method}.")]
    DuplicateFormal { method: EcoString, formal: EcoString },

    #[error("'self' cannot be the name of a formal parameter in method {method}.")]
    SelfFormal { method: EcoString },

    #[error("Formal parameter {formal} of method {method} cannot have type SELF_TYPE.")]
    SelfTypeFormal { method: EcoString, formal: EcoString },

    #[error("Class {type_name} of formal parameter {formal} in method {method} is undefined.")]
    UndefinedFormalType {
        method: EcoString,
        formal: EcoString,
        type_name: EcoString,
    },

    #[error("Undefined return type {type_name} in method {method}.")]
    UndefinedReturnType {
        method: EcoString,
        type_name: EcoString,
    },

    #[error("Class Main is not defined.")]
    MissingMain,

    #[error("No 'main' method in class Main.")]
    MissingMainMethod,

    #[error("'main' method in class Main should have no arguments.")]
    MainMethodHasFormals,
}

impl SemanticErrorKind {
    /// The category this error belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ReservedClassName { .. }
            | Self::DuplicateClass { .. }
            | Self::UndefinedParent { .. }
            | Self::InheritsFromFinal { .. } => ErrorCategory::Structural,
            Self::InheritanceCycle { .. } => ErrorCategory::Topological,
            Self::MethodAttributeClash { .. }
            | Self::SignatureMismatch { .. }
            | Self::DuplicateMethod { .. }
            | Self::DuplicateAttribute { .. }
            | Self::DuplicateFormal { .. }
            | Self::SelfFormal { .. }
            | Self::SelfTypeFormal { .. }
            | Self::UndefinedFormalType { .. }
            | Self::UndefinedReturnType { .. } => ErrorCategory::Signature,
            Self::MissingMain | Self::MissingMainMethod | Self::MainMethodHasFormals => {
                ErrorCategory::Program
            }
        }
    }
}

/// How a redefined method differs from the original.
///
/// Only the first difference is reported: arity, then the first differing
/// parameter, then the return type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureMismatch {
    #[error("the number of formal parameters is {found}, expected {expected}")]
    Arity { expected: usize, found: usize },

    #[error(
        "parameter type {found} of formal {formal} is different from original type {expected}"
    )]
    Parameter {
        /// Zero-based position of the parameter.
        position: usize,
        formal: EcoString,
        expected: EcoString,
        found: EcoString,
    },

    #[error("return type {found} is different from original return type {expected}")]
    ReturnType { expected: EcoString, found: EcoString },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::Span;

    #[test]
    fn messages_name_the_classes_involved() {
        let kind = SemanticErrorKind::UndefinedParent {
            class: "A".into(),
            parent: "Nope".into(),
        };
        assert_eq!(
            kind.to_string(),
            "Class A inherits from an undefined class Nope."
        );

        let kind = SemanticErrorKind::InheritanceCycle { class: "C".into() };
        assert_eq!(
            kind.to_string(),
            "Class C, or an ancestor of C, is involved in an inheritance cycle."
        );
    }

    #[test]
    fn signature_mismatch_message() {
        let kind = SemanticErrorKind::SignatureMismatch {
            class: "B".into(),
            method: "m".into(),
            ancestor: "A".into(),
            mismatch: SignatureMismatch::Parameter {
                position: 1,
                formal: "y".into(),
                expected: "String".into(),
                found: "Bool".into(),
            },
        };
        assert_eq!(
            kind.to_string(),
            "In redefined method m of class B, parameter type Bool of formal y is \
             different from original type String (original in class A)."
        );
        assert_eq!(kind.category(), ErrorCategory::Signature);
    }

    #[test]
    fn categories() {
        assert_eq!(
            SemanticErrorKind::DuplicateClass { name: "A".into() }.category(),
            ErrorCategory::Structural
        );
        assert_eq!(
            SemanticErrorKind::InheritanceCycle { class: "A".into() }.category(),
            ErrorCategory::Topological
        );
        assert_eq!(
            SemanticErrorKind::MissingMain.category(),
            ErrorCategory::Program
        );
    }

    #[test]
    fn error_with_hint() {
        let err = SemanticError::new(
            SemanticErrorKind::DuplicateClass { name: "A".into() },
            Location::source("a.cl", Span::new(0, 5)),
        )
        .with_hint("first defined at a.cl:0");
        assert_eq!(err.message(), "Class A was previously defined.");
        assert_eq!(err.hint.as_deref(), Some("first defined at a.cl:0"));
        assert_eq!(err.category(), ErrorCategory::Structural);
    }
}
