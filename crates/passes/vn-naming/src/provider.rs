//! Naming provider capabilities
//!
//! Code emission only talks to these traits. A factory hands out one provider
//! per method, and nested scopes are linked with `add_parent_context` before
//! anything is renamed.

use crate::error::NamingError;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::any::{self, Any};
use vn_vars::{MethodContext, VarVersion};

/// Assigns names to the local variables of one method
pub trait VariableNameProvider: Send {
    /// Names every variable in `entries`, given its inferred type
    ///
    /// The result is ordered by variable identity. Providers may skip
    /// variables they don't name, such as the receiver.
    fn rename(&mut self, entries: &FxHashMap<VarVersion, String>) -> IndexMap<VarVersion, String>;

    /// Names a parameter of a synthetic or abstract method signature
    ///
    /// The default keeps the name it is given.
    fn rename_abstract_parameter(&self, name: &str, _index: usize) -> String {
        name.to_owned()
    }

    /// Continues numbering from an enclosing method's provider
    ///
    /// # Errors
    ///
    /// Returns `NamingError::IncompatibleParent` if `parent` is a kind of
    /// provider this one cannot inherit from.
    fn add_parent_context(&mut self, parent: &dyn VariableNameProvider) -> Result<(), NamingError>;

    /// Access to the concrete provider for parent linking
    fn as_any(&self) -> &dyn Any;

    /// Type name of the concrete provider, for diagnostics
    fn provider_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

/// Creates a naming provider for each decompiled method
pub trait VariableNamingFactory: Send + Sync {
    /// Creates a fresh provider for `method`
    fn create(&self, method: &MethodContext) -> Box<dyn VariableNameProvider>;
}
