//! Test fixtures for naming providers

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use vn_naming::VariableNameProvider;
use vn_vars::{MethodContext, VarVersion};

/// A method and the inferred types of its local variables
pub struct MethodFixture {
    /// Method the variables belong to
    pub method: MethodContext,
    /// Inferred type of every variable
    pub types: FxHashMap<VarVersion, String>,
}

impl MethodFixture {
    /// Creates a fixture for a method of `com/example/Fixture`
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            method: MethodContext::new("com/example/Fixture", name, "()V"),
            types: FxHashMap::default(),
        }
    }

    /// Adds a variable with its inferred type
    #[must_use]
    pub fn var(mut self, var: u32, version: u32, ty: &str) -> Self {
        self.types.insert(VarVersion::new(var, version), ty.to_owned());
        self
    }
}

/// Renders rename output one `(var,version) name` pair per line
#[must_use]
pub fn render(names: &IndexMap<VarVersion, String>) -> String {
    names
        .iter()
        .map(|(var, name)| format!("{var} {name}\n"))
        .collect()
}

/// Names `count` variables of type `ty`, one rename call each
pub fn name_each(provider: &mut dyn VariableNameProvider, ty: &str, count: usize) -> Vec<String> {
    (0..count)
        .flat_map(|_| {
            let types = FxHashMap::from_iter([(VarVersion::new(1, 0), ty.to_owned())]);
            provider.rename(&types).into_values()
        })
        .collect()
}
