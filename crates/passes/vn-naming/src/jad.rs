//! JAD-style variable naming
//!
//! Variables are named after their type: `int` locals become `i`, `j`, `k`,
//! `l`, `i1`, ..., strings become `s`, `s1`, ..., and any capitalized or
//! array type not in the table gets a family of its own the first time it is
//! seen (`Widget` gives `widget`, `widget1`; `String[]` gives `astring`,
//! `astring1`).
//!
//! Lookup for a type string goes, first match wins:
//! 1. exact key, after collapsing nested arrays
//! 2. lowercased key
//! 3. remap table, keyed by the uncollapsed type
//! 4. a new family, if the type is capitalized or an array
//!
//! Anything else is returned lowercased without touching any counter.

use crate::error::NamingError;
use crate::family::NameFamily;
use crate::options::NamingOptions;
use crate::provider::{VariableNameProvider, VariableNamingFactory};
use crate::type_key::{self, THIS_TYPE};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::any::Any;
use tracing::{debug, debug_span, trace, warn};
use vn_vars::{MethodContext, VarVersion};

/// Naming engine for one method
///
/// Owned by the pass decompiling that method. Counters only move forward, so
/// the same type never yields the same name twice from one provider.
#[derive(Debug, Clone)]
pub struct JadNameProvider {
    /// Method label for diagnostics
    scope: String,
    families: FxHashMap<String, NameFamily>,
    remaps: FxHashMap<String, String>,
}

impl JadNameProvider {
    /// Creates a provider seeded with the builtin families
    #[must_use]
    pub fn new(method: &MethodContext) -> Self {
        Self::seeded(method, &NamingOptions::default())
    }

    /// Creates a provider seeded from `options`
    ///
    /// # Errors
    ///
    /// Returns the error `NamingOptions::validate` reports for malformed
    /// options.
    pub fn with_options(method: &MethodContext, options: &NamingOptions) -> Result<Self, NamingError> {
        options.validate()?;
        Ok(Self::seeded(method, options))
    }

    /// Creates a provider for `method` that continues numbering from `parent`
    #[must_use]
    pub fn nested(method: &MethodContext, parent: &Self) -> Self {
        let mut provider = Self::new(method);
        provider.inherit_from(parent);
        provider
    }

    /// Builds the tables from options that are already validated
    fn seeded(method: &MethodContext, options: &NamingOptions) -> Self {
        let families = options
            .families
            .iter()
            .map(|seed| {
                (
                    seed.key.clone(),
                    NameFamily::new(seed.counter, seed.skip_zero, seed.names.clone()),
                )
            })
            .collect();
        let remaps = options
            .remaps
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();

        Self {
            scope: method.to_string(),
            families,
            remaps,
        }
    }

    /// Replaces this provider's tables with a deep copy of `parent`'s
    ///
    /// Counters continue where the parent left off but are independent from
    /// then on.
    pub fn inherit_from(&mut self, parent: &Self) {
        self.families.clone_from(&parent.families);
        self.remaps.clone_from(&parent.remaps);
    }

    /// Family registered under exactly `key`, if any
    #[must_use]
    pub fn family(&self, key: &str) -> Option<&NameFamily> {
        self.families.get(key)
    }

    /// Key the remap table redirects `key` to, if any
    #[must_use]
    pub fn remap_target(&self, key: &str) -> Option<&str> {
        self.remaps.get(key).map(String::as_str)
    }

    /// Issues the next name for an already normalized type string
    pub fn generate_name(&mut self, ty: &str) -> String {
        let collapsed = type_key::collapse_arrays(ty);
        let key = if self.families.contains_key(&collapsed) {
            Some(collapsed)
        } else {
            let lowered = collapsed.to_lowercase();
            if self.families.contains_key(&lowered) {
                Some(lowered)
            } else {
                self.remaps.get(ty).cloned()
            }
        };

        let family = match key {
            Some(found) => self.families.get_mut(&found),
            None if type_key::starts_uppercase(ty) || type_key::has_array_marker(ty) => {
                Some(self.dynamic_family(ty))
            }
            None => None,
        };

        if let Some(family) = family {
            family.next_name()
        } else {
            trace!(ty = %ty, "no naming family, keeping the type name");
            ty.to_lowercase()
        }
    }

    /// Looks up or registers the family for a type seen for the first time
    fn dynamic_family(&mut self, ty: &str) -> &mut NameFamily {
        let (key, base) = type_key::dynamic_seed(ty);
        self.families.entry(key).or_insert_with_key(|key| {
            debug!(key = %key, base = %base, "created naming family");
            NameFamily::new(0, true, vec![base])
        })
    }
}

impl VariableNameProvider for JadNameProvider {
    fn rename(&mut self, entries: &FxHashMap<VarVersion, String>) -> IndexMap<VarVersion, String> {
        let span = debug_span!("rename", method = %self.scope, entries = entries.len());
        let _guard = span.enter();

        // counters advance per assignment, so order must be deterministic
        let mut ordered: Vec<_> = entries.iter().collect();
        ordered.sort_unstable_by_key(|&(var, _)| *var);

        let mut names = IndexMap::with_capacity(ordered.len());
        for (&var, ty) in ordered {
            if ty == THIS_TYPE {
                continue;
            }
            let name = self.generate_name(type_key::normalize(ty));
            trace!(var = %var, ty = %ty, name = %name, "named variable");
            names.insert(var, name);
        }
        names
    }

    fn add_parent_context(&mut self, parent: &dyn VariableNameProvider) -> Result<(), NamingError> {
        let Some(jad_parent) = parent.as_any().downcast_ref::<Self>() else {
            let found = parent.provider_name();
            warn!(method = %self.scope, parent = found, "cannot inherit naming state");
            return Err(NamingError::IncompatibleParent { found });
        };
        self.inherit_from(jad_parent);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Hands out a `JadNameProvider` per method
#[derive(Debug, Clone, Default)]
pub struct JadNameProviderFactory {
    options: NamingOptions,
}

impl JadNameProviderFactory {
    /// Creates a factory for builtin-seeded providers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose providers are seeded from `options`
    ///
    /// # Errors
    ///
    /// Returns the error `NamingOptions::validate` reports for malformed
    /// options.
    pub fn from_options(options: NamingOptions) -> Result<Self, NamingError> {
        options.validate()?;
        Ok(Self { options })
    }
}

impl VariableNamingFactory for JadNameProviderFactory {
    fn create(&self, method: &MethodContext) -> Box<dyn VariableNameProvider> {
        Box::new(JadNameProvider::seeded(method, &self.options))
    }
}
