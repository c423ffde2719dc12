// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsed program model consumed by semantic analysis.
//!
//! The parser hands over an ordered list of class declarations. Each class
//! carries its declared parent, its features and its source location. Method
//! bodies and attribute initialisers are not represented: the class-hierarchy
//! validator only looks at names and declared types.
//!
//! The model deserializes from the JSON program format:
//!
//! ```
//! use cool_semant_core::ast::Program;
//!
//! let program: Program = serde_json::from_str(r#"{
//!     "classes": [{
//!         "name": "Counter",
//!         "parent": "IO",
//!         "filename": "counter.cl",
//!         "span": [0, 120],
//!         "features": [
//!             { "attribute": { "name": "count", "type": "Int" } },
//!             { "method": {
//!                 "name": "add",
//!                 "formals": [{ "name": "n", "type": "Int" }],
//!                 "return_type": "SELF_TYPE"
//!             } }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(program.classes[0].methods().count(), 1);
//! ```

use crate::source_analysis::{Location, Span};
use ecow::EcoString;
use serde::Deserialize;

/// A whole parsed program: class declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Program {
    /// Class declarations in declaration order.
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,
}

impl Program {
    /// Creates a program from class declarations.
    #[must_use]
    pub fn new(classes: Vec<ClassDefinition>) -> Self {
        Self { classes }
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassDefinition {
    /// Class name.
    pub name: EcoString,
    /// Declared parent. `None` means the class implicitly inherits from
    /// `Object`; only `Object` itself has no parent after registration.
    #[serde(default)]
    pub parent: Option<EcoString>,
    /// Attributes and methods, in declaration order.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// File the class was parsed from.
    #[serde(default)]
    pub filename: EcoString,
    /// Source location of the whole declaration.
    #[serde(default)]
    pub span: Span,
}

impl ClassDefinition {
    /// Creates a featureless class with no file information.
    #[must_use]
    pub fn new(name: &str, parent: Option<&str>) -> Self {
        Self {
            name: name.into(),
            parent: parent.map(EcoString::from),
            features: Vec::new(),
            filename: EcoString::new(),
            span: Span::default(),
        }
    }

    /// Sets the file and span of the declaration.
    #[must_use]
    pub fn at(mut self, filename: &str, span: Span) -> Self {
        self.filename = filename.into();
        self.span = span;
        self
    }

    /// Appends a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.features.push(Feature::Method(method));
        self
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDefinition) -> Self {
        self.features.push(Feature::Attribute(attribute));
        self
    }

    /// Location of the declaration, for diagnostics.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::source(self.filename.clone(), self.span)
    }

    /// Location of a node inside this class, for diagnostics.
    #[must_use]
    pub fn location_of(&self, span: Span) -> Location {
        Location::source(self.filename.clone(), span)
    }

    /// Methods declared directly in this class.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDefinition> {
        self.features.iter().filter_map(Feature::as_method)
    }

    /// Attributes declared directly in this class.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.features.iter().filter_map(Feature::as_attribute)
    }

    /// Finds the feature named `name` declared directly in this class.
    ///
    /// Methods and attributes have separate namespaces, so a class may declare
    /// both under one name; the method is returned in that case.
    #[must_use]
    pub fn find_feature(&self, name: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| matches!(f, Feature::Method(m) if m.name.as_str() == name))
            .or_else(|| self.features.iter().find(|f| f.name().as_str() == name))
    }
}

/// A class member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// A typed attribute.
    Attribute(AttributeDefinition),
    /// A method with a signature.
    Method(MethodDefinition),
}

impl Feature {
    /// Feature name.
    #[must_use]
    pub fn name(&self) -> &EcoString {
        match self {
            Self::Attribute(a) => &a.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Source location of the feature.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Attribute(a) => a.span,
            Self::Method(m) => m.span,
        }
    }

    /// Returns the method, if this is one.
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodDefinition> {
        match self {
            Self::Method(m) => Some(m),
            Self::Attribute(_) => None,
        }
    }

    /// Returns the attribute, if this is one.
    #[must_use]
    pub fn as_attribute(&self) -> Option<&AttributeDefinition> {
        match self {
            Self::Attribute(a) => Some(a),
            Self::Method(_) => None,
        }
    }
}

/// An attribute declaration: `name : Type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeDefinition {
    pub name: EcoString,
    #[serde(rename = "type")]
    pub type_name: EcoString,
    #[serde(default)]
    pub span: Span,
}

impl AttributeDefinition {
    /// Creates an attribute with an empty span.
    #[must_use]
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            span: Span::default(),
        }
    }
}

/// A method declaration: `name(formals) : ReturnType`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodDefinition {
    pub name: EcoString,
    #[serde(default)]
    pub formals: Vec<Formal>,
    pub return_type: EcoString,
    #[serde(default)]
    pub span: Span,
}

impl MethodDefinition {
    /// Creates a method from `(name, type)` formal pairs.
    #[must_use]
    pub fn new(name: &str, formals: &[(&str, &str)], return_type: &str) -> Self {
        Self {
            name: name.into(),
            formals: formals
                .iter()
                .map(|(name, ty)| Formal::new(name, ty))
                .collect(),
            return_type: return_type.into(),
            span: Span::default(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Number of formal parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.formals.len()
    }

    /// Declared formal parameter types, in order.
    pub fn formal_types(&self) -> impl Iterator<Item = &EcoString> {
        self.formals.iter().map(|f| &f.type_name)
    }
}

/// A formal parameter: `name : Type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Formal {
    pub name: EcoString,
    #[serde(rename = "type")]
    pub type_name: EcoString,
    #[serde(default)]
    pub span: Span,
}

impl Formal {
    /// Creates a formal with an empty span.
    #[must_use]
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            span: Span::default(),
        }
    }
}
