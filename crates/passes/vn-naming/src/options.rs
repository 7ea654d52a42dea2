//! Seed tables for naming providers
//!
//! The builtin table reproduces the JAD naming conventions. Options can also
//! be loaded from TOML:
//!
//! ```toml
//! extend_builtins = true
//!
//! [[family]]
//! key = "Object"
//! skip_zero = true
//! names = ["obj"]
//!
//! [remap]
//! Integer = "int"
//! ```
//!
//! Without `extend_builtins`, a `[[family]]` list or `[remap]` table replaces
//! the corresponding builtin part instead of extending it.

use crate::error::NamingError;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// `(key, counter, skip_zero, names)` for every builtin family
const BUILTIN_FAMILIES: &[(&str, usize, bool, &[&str])] = &[
    ("int", 0, true, &["i", "j", "k", "l"]),
    ("byte", 0, false, &["b"]),
    ("char", 0, false, &["c"]),
    ("short", 1, false, &["short"]),
    ("boolean", 0, true, &["flag"]),
    ("double", 0, false, &["d"]),
    ("float", 0, true, &["f"]),
    ("File", 0, true, &["file"]),
    ("String", 0, true, &["s"]),
    ("Class", 0, true, &["oclass"]),
    ("Long", 0, true, &["olong"]),
    ("Byte", 0, true, &["obyte"]),
    ("Short", 0, true, &["oshort"]),
    ("Boolean", 0, true, &["obool"]),
    ("Package", 0, true, &["opackage"]),
    ("Enum", 0, true, &["oenum"]),
];

const BUILTIN_REMAPS: &[(&str, &str)] = &[("long", "int")];

/// Initial state of one naming family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilySeed {
    /// Type key the family is registered under
    pub key: String,
    /// Starting counter value
    #[serde(default)]
    pub counter: usize,
    /// Leave the suffix off the first rotation
    #[serde(default)]
    pub skip_zero: bool,
    /// Candidate base names, in rotation order
    pub names: Vec<String>,
}

impl FamilySeed {
    /// Creates a seed
    pub fn new(key: impl Into<String>, counter: usize, skip_zero: bool, names: &[&str]) -> Self {
        Self {
            key: key.into(),
            counter,
            skip_zero,
            names: names.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

/// Families and remaps a fresh provider starts with
///
/// When two seeds share a key, the later one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OptionsDocument")]
pub struct NamingOptions {
    /// Family seeds
    #[serde(rename = "family")]
    pub families: Vec<FamilySeed>,
    /// Fallback aliases from one type key to another family's key
    #[serde(rename = "remap")]
    pub remaps: IndexMap<String, String>,
}

impl NamingOptions {
    /// Parses and validates options from a TOML document
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidOptions` if the document doesn't parse,
    /// or any error `validate` reports.
    pub fn from_toml_str(text: &str) -> Result<Self, NamingError> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every family can issue names and every remap resolves
    ///
    /// # Errors
    ///
    /// Returns `NamingError::EmptyKey` or `NamingError::EmptyCandidates` for
    /// a malformed seed, and `NamingError::UnknownRemapTarget` for a remap
    /// pointing at a key no seed defines.
    pub fn validate(&self) -> Result<(), NamingError> {
        for seed in &self.families {
            if seed.key.is_empty() {
                return Err(NamingError::EmptyKey);
            }
            if seed.names.is_empty() {
                return Err(NamingError::EmptyCandidates {
                    key: seed.key.clone(),
                });
            }
        }

        let keys: FxHashSet<&str> = self.families.iter().map(|seed| seed.key.as_str()).collect();
        for (from, to) in &self.remaps {
            if !keys.contains(to.as_str()) {
                return Err(NamingError::UnknownRemapTarget {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            families: BUILTIN_FAMILIES
                .iter()
                .map(|&(key, counter, skip_zero, names)| {
                    FamilySeed::new(key, counter, skip_zero, names)
                })
                .collect(),
            remaps: BUILTIN_REMAPS
                .iter()
                .map(|&(from, to)| (from.to_owned(), to.to_owned()))
                .collect(),
        }
    }
}

/// On-disk shape of `NamingOptions`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsDocument {
    #[serde(default)]
    extend_builtins: bool,
    family: Option<Vec<FamilySeed>>,
    remap: Option<IndexMap<String, String>>,
}

impl From<OptionsDocument> for NamingOptions {
    fn from(document: OptionsDocument) -> Self {
        let builtin = Self::default();
        if document.extend_builtins {
            let mut options = builtin;
            options.families.extend(document.family.unwrap_or_default());
            options.remaps.extend(document.remap.unwrap_or_default());
            options
        } else {
            Self {
                families: document.family.unwrap_or(builtin.families),
                remaps: document.remap.unwrap_or(builtin.remaps),
            }
        }
    }
}
