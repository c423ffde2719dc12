// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Validator configuration.

use serde::Deserialize;

/// Options controlling which optional checks the validator runs.
///
/// The structural, cycle and override checks always run. The options here
/// enable the whole-program checks a complete compiler performs on top of
/// them.
///
/// The same structure is read from the `[semant]` table of `coolsem.toml`.
///
/// ```
/// use cool_semant_core::SemantOptions;
///
/// let options = SemantOptions::new().with_require_main(true);
/// assert!(options.require_main);
/// assert!(!options.check_signature_types);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemantOptions {
    /// Require a `Main` class declaring a zero-argument `main` method.
    pub require_main: bool,
    /// Require every formal and return type in a method signature to name a
    /// known class.
    pub check_signature_types: bool,
}

impl SemantOptions {
    /// Creates options with every optional check disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every optional check enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_main: true,
            check_signature_types: true,
        }
    }

    /// Enables or disables the program entry point check.
    #[must_use]
    pub fn with_require_main(mut self, enabled: bool) -> Self {
        self.require_main = enabled;
        self
    }

    /// Enables or disables the signature type existence check.
    #[must_use]
    pub fn with_check_signature_types(mut self, enabled: bool) -> Self {
        self.check_signature_types = enabled;
        self
    }
}
