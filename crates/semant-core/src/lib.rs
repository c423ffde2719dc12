// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! COOL semantic analysis core.
//!
//! This crate contains the class-hierarchy validator of the COOL compiler
//! front end:
//! - The parsed program model consumed from the parser ([`ast`])
//! - Source locations ([`source_analysis`])
//! - Class registry, inheritance graph, cycle detection and method override
//!   checking ([`semantic_analysis`])
//!
//! Every stage reports problems through a shared
//! [`DiagnosticSink`](semantic_analysis::DiagnosticSink) instead of failing, so a
//! single run surfaces as many independent errors as possible.
//!
//! ```
//! use cool_semant_core::ast::{ClassDefinition, MethodDefinition, Program};
//! use cool_semant_core::{SemantOptions, semantic_analysis::validate};
//!
//! let program = Program::new(vec![
//!     ClassDefinition::new("A", None)
//!         .with_method(MethodDefinition::new("m", &[("x", "Int")], "Object")),
//!     ClassDefinition::new("B", Some("A"))
//!         .with_method(MethodDefinition::new("m", &[("x", "String")], "Object")),
//! ]);
//!
//! let result = validate(&program, &SemantOptions::default());
//! assert_eq!(result.errors(), 1);
//! ```

pub mod ast;
mod options;
pub mod semantic_analysis;
pub mod source_analysis;

pub use options::SemantOptions;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::SemantOptions;
    pub use crate::ast::{ClassDefinition, Feature, MethodDefinition, Program};
    pub use crate::semantic_analysis::{
        DiagnosticSink, SemanticError, SemanticErrorKind, ValidationResult, validate,
    };
    pub use crate::source_analysis::Span;
}
