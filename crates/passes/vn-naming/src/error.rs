//! Error types for variable naming

/// Errors raised while configuring or linking naming providers
///
/// Naming itself never fails; these only come from building a provider out of
/// options or attaching a parent scope.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// The parent passed to `add_parent_context` is a different kind of provider
    #[error("cannot inherit naming state from a {found} parent")]
    IncompatibleParent {
        /// Type name of the rejected parent
        found: &'static str,
    },

    /// A family seed has no candidate names
    #[error("naming family `{key}` has no candidate names")]
    EmptyCandidates {
        /// Key of the offending family
        key: String,
    },

    /// A family seed has an empty key
    #[error("naming family key must not be empty")]
    EmptyKey,

    /// A remap entry points at a key no family is registered under
    #[error("remap `{from}` -> `{to}` targets an unknown naming family")]
    UnknownRemapTarget {
        /// Remapped type key
        from: String,
        /// Missing target key
        to: String,
    },

    /// The options document could not be parsed
    #[error("invalid naming options: {0}")]
    InvalidOptions(#[from] toml::de::Error),
}
