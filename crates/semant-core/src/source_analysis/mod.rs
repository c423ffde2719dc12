// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location infrastructure.
//!
//! Scanning and parsing happen upstream; this module only provides the
//! location types that the parser attaches to every class and feature and
//! that diagnostics point back to.

mod location;
mod span;

pub use location::Location;
pub use span::Span;
