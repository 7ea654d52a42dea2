//! Variable identities and method handles
//!
//! These are produced by the variable-versioning and class-loading stages of
//! the decompiler and consumed by the naming passes. They live in their own
//! crate so that naming providers don't depend on the rest of the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One occurrence of a local variable within a method body
///
/// `var` is the declaration slot and `version` tells apart the SSA-like
/// revisions of that slot. Ordering is by slot first, then by version.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct VarVersion {
    /// Declaration slot
    pub var: u32,
    /// Revision of the slot
    pub version: u32,
}

impl VarVersion {
    /// Creates a new variable identity
    #[must_use]
    pub const fn new(var: u32, version: u32) -> Self {
        Self { var, version }
    }
}

impl fmt::Display for VarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.var, self.version)
    }
}

/// Opaque handle for the method currently being decompiled
///
/// Naming providers only use it as a construction token and as a label for
/// diagnostics.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct MethodContext {
    /// Internal name of the declaring class (e.g. `java/io/File`)
    pub class_name: String,
    /// Method name
    pub name: String,
    /// Method descriptor (e.g. `(I)V`)
    pub descriptor: String,
}

impl MethodContext {
    /// Creates a new method handle
    pub fn new(
        class_name: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl fmt::Display for MethodContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.class_name, self.name, self.descriptor)
    }
}
