//! Local variable naming for decompiled methods
//!
//! This crate picks source names for the local variables of a method once
//! their identities and types are known. Names follow the JAD conventions:
//! short, type-derived identifiers with a numeric suffix to tell repeated
//! uses apart (`i`, `j`, `s`, `s1`, `flag`, `file`).
//!
//! # Architecture
//!
//! - **Provider** (`VariableNameProvider`): names every variable of one method
//! - **Factory** (`VariableNamingFactory`): hands out one provider per method
//! - **JAD provider** (`JadNameProvider`): per-type naming families with
//!   counters, created on demand for unseen types and inherited by nested
//!   scopes
//! - **Options** (`NamingOptions`): the families and remaps a provider starts
//!   with, loadable from TOML
//!
//! # Usage
//!
//! ```rust,ignore
//! use vn_naming::{JadNameProviderFactory, VariableNamingFactory};
//!
//! let factory = JadNameProviderFactory::new();
//! let mut outer = factory.create(&method);
//! let names = outer.rename(&types);
//!
//! // lambdas and anonymous classes continue numbering from their enclosing method
//! let mut inner = factory.create(&lambda);
//! inner.add_parent_context(outer.as_ref())?;
//! ```

pub mod error;
pub mod family;
pub mod jad;
pub mod options;
pub mod provider;
pub mod type_key;

pub use error::NamingError;
pub use family::NameFamily;
pub use jad::{JadNameProvider, JadNameProviderFactory};
pub use options::{FamilySeed, NamingOptions};
pub use provider::{VariableNameProvider, VariableNamingFactory};
pub use vn_vars::{MethodContext, VarVersion};
