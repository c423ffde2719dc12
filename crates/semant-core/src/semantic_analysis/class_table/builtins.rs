// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Basic class definitions.
//!
//! **DDD Context:** Semantic Analysis
//!
//! The five basic classes (`Object`, `IO`, `Int`, `Bool`, `String`) are
//! installed into every class table before user classes. They are produced
//! fresh by [`builtin_classes`] on each run; nothing here is global state.

use crate::ast::{AttributeDefinition, ClassDefinition, MethodDefinition};

/// Root of the class hierarchy.
pub const OBJECT: &str = "Object";
pub const IO: &str = "IO";
pub const INT: &str = "Int";
pub const BOOL: &str = "Bool";
pub const STRING: &str = "String";
/// Type of `self`. Reserved: never a class name, never a parent.
pub const SELF_TYPE: &str = "SELF_TYPE";

/// Filename attached to basic classes.
pub const BUILTIN_FILENAME: &str = "<basic class>";

/// Type of the untyped slot holding a primitive value.
const PRIM_SLOT: &str = "_prim_slot";

/// Basic class names, in installation order.
const BUILTIN_NAMES: [&str; 5] = [OBJECT, IO, INT, BOOL, STRING];

/// Basic classes that may not be inherited from.
const FINAL_NAMES: [&str; 3] = [INT, BOOL, STRING];

/// Returns true if `name` is one of the basic classes.
pub(crate) fn is_builtin_class(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Returns true if `name` may not be used as a class name by user code.
pub(crate) fn is_reserved_class_name(name: &str) -> bool {
    is_builtin_class(name) || name == SELF_TYPE
}

/// Returns true if `name` may not appear as a declared parent.
pub(crate) fn is_final_class(name: &str) -> bool {
    FINAL_NAMES.contains(&name) || name == SELF_TYPE
}

fn basic(name: &str, parent: Option<&str>) -> ClassDefinition {
    let mut class = ClassDefinition::new(name, parent);
    class.filename = BUILTIN_FILENAME.into();
    class
}

/// Returns all basic class definitions, root first.
pub(crate) fn builtin_classes() -> Vec<ClassDefinition> {
    // Object: abort the program, report the dynamic type name, shallow copy.
    let object = basic(OBJECT, None)
        .with_method(MethodDefinition::new("abort", &[], OBJECT))
        .with_method(MethodDefinition::new("type_name", &[], STRING))
        .with_method(MethodDefinition::new("copy", &[], SELF_TYPE));

    let io = basic(IO, Some(OBJECT))
        .with_method(MethodDefinition::new("out_string", &[("x", STRING)], SELF_TYPE))
        .with_method(MethodDefinition::new("out_int", &[("x", INT)], SELF_TYPE))
        .with_method(MethodDefinition::new("in_string", &[], STRING))
        .with_method(MethodDefinition::new("in_int", &[], INT));

    let int = basic(INT, Some(OBJECT)).with_attribute(AttributeDefinition::new("_val", PRIM_SLOT));

    let bool_class =
        basic(BOOL, Some(OBJECT)).with_attribute(AttributeDefinition::new("_val", PRIM_SLOT));

    // String: `_val` is the length, `_str_field` the raw characters.
    let string = basic(STRING, Some(OBJECT))
        .with_attribute(AttributeDefinition::new("_val", INT))
        .with_attribute(AttributeDefinition::new("_str_field", PRIM_SLOT))
        .with_method(MethodDefinition::new("length", &[], INT))
        .with_method(MethodDefinition::new("concat", &[("s", STRING)], STRING))
        .with_method(MethodDefinition::new(
            "substr",
            &[("i", INT), ("l", INT)],
            STRING,
        ));

    vec![object, io, int, bool_class, string]
}
