// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Inheritance graph construction and queries.
//!
//! **DDD Context:** Semantic Analysis
//!
//! Every registered class except `Object` gets exactly one parent edge. Each
//! edge is checked locally: the declared parent must exist and must not be a
//! final class. Illegal edges are reported and replaced by an edge to
//! `Object`, so later stages always see a complete (if possibly cyclic)
//! parent relation. Cycles are left for [`find_cycles`](super::find_cycles).
//!
//! Ancestor sets are not stored; [`InheritanceGraph::ancestors`] walks the
//! parent chain on demand.

use super::class_table::{ClassTable, OBJECT};
use super::error::SemanticErrorKind;
use super::sink::DiagnosticSink;
use ecow::EcoString;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Write as _;
use tracing::{instrument, trace};

/// Parent relation over all registered classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceGraph {
    parents: HashMap<EcoString, EcoString>,
    children: HashMap<EcoString, Vec<EcoString>>,
    /// Class names in registration order.
    order: Vec<EcoString>,
}

impl InheritanceGraph {
    /// Build the graph from a class table, reporting illegal parents.
    #[instrument(skip_all)]
    pub fn build(table: &ClassTable, sink: &mut DiagnosticSink) -> Self {
        let mut graph = Self {
            parents: HashMap::new(),
            children: HashMap::new(),
            order: table.class_names().cloned().collect(),
        };

        for class in table.iter() {
            if class.name.as_str() == OBJECT {
                continue;
            }
            let declared = class.parent.clone().unwrap_or_else(|| OBJECT.into());

            // SELF_TYPE is final but never registered, so finality is checked first.
            let parent = if ClassTable::is_final(&declared) {
                sink.report_class(
                    class,
                    SemanticErrorKind::InheritsFromFinal {
                        class: class.name.clone(),
                        parent: declared,
                    },
                );
                OBJECT.into()
            } else if !table.contains(&declared) {
                sink.report_class(
                    class,
                    SemanticErrorKind::UndefinedParent {
                        class: class.name.clone(),
                        parent: declared,
                    },
                );
                OBJECT.into()
            } else {
                declared
            };

            trace!(class = %class.name, parent = %parent, "inheritance edge");
            graph.add_edge(class.name.clone(), parent);
        }

        graph
    }

    fn add_edge(&mut self, child: EcoString, parent: EcoString) {
        self.children
            .entry(parent.clone())
            .or_default()
            .push(child.clone());
        self.parents.insert(child, parent);
    }

    /// Class names in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &EcoString> {
        self.order.iter()
    }

    /// The parent of `class`, after error recovery.
    ///
    /// `None` for `Object` and for unknown classes.
    #[must_use]
    pub fn parent(&self, class: &str) -> Option<&EcoString> {
        self.parents.get(class)
    }

    /// Direct subclasses of `class`, in registration order.
    #[must_use]
    pub fn children(&self, class: &str) -> &[EcoString] {
        self.children.get(class).map_or(&[], Vec::as_slice)
    }

    /// Returns the ordered ancestor chain of a class (excluding the class itself).
    ///
    /// Example: `ancestors("Main")` → `["IO", "Object"]`
    ///
    /// Terminates on cyclic graphs: the walk stops when it meets a class it
    /// has already visited.
    #[must_use]
    pub fn ancestors(&self, class: &str) -> Vec<EcoString> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(class);

        let mut current = class;
        while let Some(parent) = self.parents.get(current) {
            if !visited.insert(parent.as_str()) {
                break;
            }
            chain.push(parent.clone());
            current = parent.as_str();
        }

        chain
    }

    /// All transitive subclasses of `class`, breadth first.
    #[must_use]
    pub fn descendants(&self, class: &str) -> Vec<EcoString> {
        let mut result = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(class);
        let mut queue: VecDeque<&str> = VecDeque::from([class]);

        while let Some(name) = queue.pop_front() {
            for child in self.children(name) {
                if seen.insert(child.as_str()) {
                    result.push(child.clone());
                    queue.push_back(child.as_str());
                }
            }
        }

        result
    }

    /// Returns true if `class` is `ancestor` or inherits from it.
    #[must_use]
    pub fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        class == ancestor || self.ancestors(class).iter().any(|a| a.as_str() == ancestor)
    }

    /// Renders the hierarchy as an indented tree rooted at `Object`.
    ///
    /// Classes not reachable from `Object` (those on or above a cycle) are
    /// listed afterwards with their parent.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut reached: HashSet<&str> = HashSet::new();
        let mut stack: Vec<(&str, usize)> = vec![(OBJECT, 0)];

        while let Some((name, depth)) = stack.pop() {
            if !reached.insert(name) {
                continue;
            }
            let _ = writeln!(out, "{:indent$}{name}", "", indent = depth * 2);
            for child in self.children(name).iter().rev() {
                stack.push((child.as_str(), depth + 1));
            }
        }

        let unreachable: Vec<&EcoString> = self
            .order
            .iter()
            .filter(|name| !reached.contains(name.as_str()))
            .collect();
        if !unreachable.is_empty() {
            out.push_str("unreachable from Object:\n");
            for name in unreachable {
                let parent = self.parent(name).map_or("?", EcoString::as_str);
                let _ = writeln!(out, "  {name} -> {parent}");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ClassDefinition, Program};
    use crate::source_analysis::{Location, Span};

    fn build(classes: Vec<ClassDefinition>) -> (InheritanceGraph, DiagnosticSink) {
        let mut sink = DiagnosticSink::new();
        let table = ClassTable::register(&Program::new(classes), &mut sink);
        let graph = InheritanceGraph::build(&table, &mut sink);
        (graph, sink)
    }

    #[test]
    fn builtins_hang_off_object() {
        let (graph, sink) = build(vec![]);
        assert!(sink.is_clean());
        assert!(graph.parent("Object").is_none());
        for name in ["IO", "Int", "Bool", "String"] {
            assert_eq!(graph.parent(name).map(EcoString::as_str), Some("Object"));
        }
        assert_eq!(graph.children("Object").len(), 4);
    }

    #[test]
    fn missing_parent_defaults_to_object() {
        let (graph, sink) = build(vec![ClassDefinition::new("Main", None)]);
        assert!(sink.is_clean());
        assert_eq!(graph.parent("Main").map(EcoString::as_str), Some("Object"));
    }

    #[test]
    fn ancestor_chain_ends_at_object() {
        let (graph, _) = build(vec![
            ClassDefinition::new("A", Some("IO")),
            ClassDefinition::new("B", Some("A")),
        ]);
        assert_eq!(
            graph.ancestors("B"),
            vec![
                EcoString::from("A"),
                EcoString::from("IO"),
                EcoString::from("Object")
            ]
        );
        assert!(graph.ancestors("Object").is_empty());
        assert!(graph.ancestors("Unknown").is_empty());
    }

    #[test]
    fn forward_reference_to_parent_is_fine() {
        let (graph, sink) = build(vec![
            ClassDefinition::new("B", Some("A")),
            ClassDefinition::new("A", None),
        ]);
        assert!(sink.is_clean());
        assert_eq!(graph.parent("B").map(EcoString::as_str), Some("A"));
    }

    #[test]
    fn undefined_parent_reported_and_reparented() {
        let class = ClassDefinition::new("A", Some("Missing")).at("a.cl", Span::new(1, 9));
        let (graph, sink) = build(vec![class]);

        assert_eq!(sink.errors(), 1);
        let err = &sink.diagnostics()[0];
        assert_eq!(
            err.kind,
            SemanticErrorKind::UndefinedParent {
                class: "A".into(),
                parent: "Missing".into()
            }
        );
        assert_eq!(err.location, Location::source("a.cl", Span::new(1, 9)));
        assert_eq!(graph.parent("A").map(EcoString::as_str), Some("Object"));
    }

    #[test]
    fn each_final_parent_reported_once_per_class() {
        let (graph, sink) = build(vec![
            ClassDefinition::new("A", Some("Int")),
            ClassDefinition::new("B", Some("Bool")),
            ClassDefinition::new("C", Some("String")),
            ClassDefinition::new("D", Some("SELF_TYPE")),
        ]);
        assert_eq!(sink.errors(), 4);
        assert!(
            sink.diagnostics()
                .iter()
                .all(|e| matches!(e.kind, SemanticErrorKind::InheritsFromFinal { .. }))
        );
        for name in ["A", "B", "C", "D"] {
            assert_eq!(graph.parent(name).map(EcoString::as_str), Some("Object"));
        }
    }

    #[test]
    fn inheriting_from_io_is_allowed() {
        let (_, sink) = build(vec![ClassDefinition::new("A", Some("IO"))]);
        assert!(sink.is_clean());
    }

    #[test]
    fn descendants_and_subclass_queries() {
        let (graph, _) = build(vec![
            ClassDefinition::new("A", None),
            ClassDefinition::new("B", Some("A")),
            ClassDefinition::new("C", Some("B")),
            ClassDefinition::new("D", Some("A")),
        ]);
        assert_eq!(
            graph.descendants("A"),
            vec![
                EcoString::from("B"),
                EcoString::from("D"),
                EcoString::from("C")
            ]
        );
        assert!(graph.is_subclass_of("C", "A"));
        assert!(graph.is_subclass_of("C", "C"));
        assert!(graph.is_subclass_of("Int", "Object"));
        assert!(!graph.is_subclass_of("A", "C"));
        assert!(!graph.is_subclass_of("D", "B"));
    }

    #[test]
    fn ancestors_terminate_on_cycles() {
        let (graph, _) = build(vec![
            ClassDefinition::new("C", Some("D")),
            ClassDefinition::new("D", Some("C")),
            ClassDefinition::new("S", Some("S")),
        ]);
        assert_eq!(graph.ancestors("C"), vec![EcoString::from("D")]);
        assert!(graph.ancestors("S").is_empty());
        assert!(!graph.is_subclass_of("C", "Object"));
    }

    #[test]
    fn dump_renders_tree_and_unreachable_classes() {
        let (graph, _) = build(vec![
            ClassDefinition::new("Main", Some("IO")),
            ClassDefinition::new("C", Some("D")),
            ClassDefinition::new("D", Some("C")),
        ]);
        let dump = graph.dump();
        assert!(dump.starts_with("Object\n  IO\n    Main\n  Int\n  Bool\n  String\n"));
        assert!(dump.contains("unreachable from Object:\n  C -> D\n  D -> C\n"));
    }
}
