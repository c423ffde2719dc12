// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Inheritance cycle detection.
//!
//! **DDD Context:** Semantic Analysis
//!
//! Each class has at most one parent, so a walk up the parent edges is a
//! simple path that either reaches `Object`, joins a path that was already
//! explored, or runs back into itself. The detector walks iteratively with an
//! explicit path stack and a tri-state mark per class; a class that names
//! itself as parent is just a path of length one that runs back into itself.

use super::class_table::ClassTable;
use super::error::SemanticErrorKind;
use super::inheritance::InheritanceGraph;
use super::sink::DiagnosticSink;
use ecow::EcoString;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Classes found to take part in an inheritance cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    cyclic: HashSet<EcoString>,
}

impl CycleReport {
    /// Returns true if `class` lies on an inheritance cycle.
    #[must_use]
    pub fn is_cyclic(&self, class: &str) -> bool {
        self.cyclic.contains(class)
    }

    /// Number of cyclic classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cyclic.len()
    }

    /// Returns true if the hierarchy is acyclic.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cyclic.is_empty()
    }

    /// Cyclic class names, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &EcoString> {
        self.cyclic.iter()
    }
}

/// Find every class on an inheritance cycle.
///
/// Reports one error per cyclic class, located at that class and emitted in
/// registration order. Classes that inherit from a cycle without being part
/// of it are not reported.
#[instrument(skip_all)]
pub fn find_cycles(
    graph: &InheritanceGraph,
    table: &ClassTable,
    sink: &mut DiagnosticSink,
) -> CycleReport {
    let mut marks: HashMap<&str, Mark> = graph
        .class_names()
        .map(|name| (name.as_str(), Mark::Unvisited))
        .collect();
    let mut report = CycleReport::default();
    let mut path: Vec<&str> = Vec::new();

    for start in graph.class_names() {
        if marks.get(start.as_str()) != Some(&Mark::Unvisited) {
            continue;
        }

        path.clear();
        let mut current = start.as_str();
        loop {
            marks.insert(current, Mark::InProgress);
            path.push(current);

            let Some(parent) = graph.parent(current) else {
                break;
            };
            match marks.get(parent.as_str()).copied() {
                Some(Mark::Unvisited) => current = parent.as_str(),
                Some(Mark::InProgress) => {
                    // The path runs back into itself: everything from the
                    // first visit of `parent` to the end is the cycle.
                    if let Some(entry) = path.iter().position(|name| *name == parent.as_str()) {
                        report
                            .cyclic
                            .extend(path[entry..].iter().map(|name| EcoString::from(*name)));
                    }
                    break;
                }
                Some(Mark::Done) | None => break,
            }
        }

        for &name in &path {
            marks.insert(name, Mark::Done);
        }
    }

    for class in table.iter().filter(|c| report.is_cyclic(&c.name)) {
        sink.report_class(
            class,
            SemanticErrorKind::InheritanceCycle {
                class: class.name.clone(),
            },
        );
    }

    debug!(cyclic = report.len(), "cycle detection finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ClassDefinition, Program};

    fn detect(classes: Vec<ClassDefinition>) -> (CycleReport, DiagnosticSink) {
        let mut sink = DiagnosticSink::new();
        let table = ClassTable::register(&Program::new(classes), &mut sink);
        let graph = InheritanceGraph::build(&table, &mut sink);
        let report = find_cycles(&graph, &table, &mut sink);
        (report, sink)
    }

    fn cycle_errors(sink: &DiagnosticSink) -> Vec<&str> {
        sink.diagnostics()
            .iter()
            .filter_map(|e| match &e.kind {
                SemanticErrorKind::InheritanceCycle { class } => Some(class.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn acyclic_hierarchy_has_no_cycles() {
        let (report, sink) = detect(vec![
            ClassDefinition::new("A", None),
            ClassDefinition::new("B", Some("A")),
            ClassDefinition::new("C", Some("B")),
        ]);
        assert!(report.is_empty());
        assert!(sink.is_clean());
    }

    #[test]
    fn self_inheritance_is_a_cycle_of_one() {
        let (report, sink) = detect(vec![ClassDefinition::new("S", Some("S"))]);
        assert!(report.is_cyclic("S"));
        assert_eq!(report.len(), 1);
        assert_eq!(cycle_errors(&sink), vec!["S"]);
        assert_eq!(sink.errors(), 1);
    }

    #[test]
    fn two_class_cycle_reports_each_class_once() {
        let (report, sink) = detect(vec![
            ClassDefinition::new("C", Some("D")),
            ClassDefinition::new("D", Some("C")),
        ]);
        assert_eq!(report.len(), 2);
        assert_eq!(cycle_errors(&sink), vec!["C", "D"]);
    }

    #[test]
    fn long_cycle_reports_k_errors() {
        let names: Vec<String> = (0..50).map(|i| format!("K{i}")).collect();
        let classes = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let parent = names[(i + 1) % names.len()].as_str();
                ClassDefinition::new(name, Some(parent))
            })
            .collect();
        let (report, sink) = detect(classes);
        assert_eq!(report.len(), 50);
        assert_eq!(sink.errors(), 50);
    }

    #[test]
    fn classes_hanging_off_a_cycle_are_not_reported() {
        let (report, sink) = detect(vec![
            ClassDefinition::new("Tail", Some("Mid")),
            ClassDefinition::new("Mid", Some("C")),
            ClassDefinition::new("C", Some("D")),
            ClassDefinition::new("D", Some("C")),
            ClassDefinition::new("Fine", Some("IO")),
        ]);
        assert_eq!(report.len(), 2);
        assert!(!report.is_cyclic("Tail"));
        assert!(!report.is_cyclic("Mid"));
        assert!(!report.is_cyclic("Fine"));
        assert_eq!(cycle_errors(&sink), vec!["C", "D"]);
    }

    #[test]
    fn independent_cycles_are_all_found() {
        let (report, sink) = detect(vec![
            ClassDefinition::new("A", Some("B")),
            ClassDefinition::new("B", Some("A")),
            ClassDefinition::new("X", Some("Y")),
            ClassDefinition::new("Y", Some("Z")),
            ClassDefinition::new("Z", Some("X")),
            ClassDefinition::new("S", Some("S")),
        ]);
        assert_eq!(report.len(), 6);
        assert_eq!(cycle_errors(&sink), vec!["A", "B", "X", "Y", "Z", "S"]);
    }

    #[test]
    fn deep_acyclic_chain_does_not_overflow() {
        let mut classes = vec![ClassDefinition::new("N0", None)];
        for i in 1..20_000 {
            let parent = format!("N{}", i - 1);
            classes.push(ClassDefinition::new(&format!("N{i}"), Some(parent.as_str())));
        }
        let (report, sink) = detect(classes);
        assert!(report.is_empty());
        assert!(sink.is_clean());
    }
}
