//! Transcoder configuration.

use serde::{Deserialize, Serialize};

/// Default bound on embedded-entity nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Kind used for a root document whose `type` names nothing registered.
pub const DEFAULT_FALLBACK_KIND: &str = "Object";

/// What to do when a functional property receives a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionalListPolicy {
    /// Keep the first element and log a warning. An empty list leaves the
    /// property unset.
    #[default]
    TakeFirst,
    /// Fail with [`CodecError::CardinalityMismatch`](crate::CodecError) when
    /// the list has more than one element.
    Reject,
}

/// Settings for a [`Transcoder`](crate::Transcoder).
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```toml
/// max-depth = 16
/// functional-lists = "reject"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CodecConfig {
    /// Deepest level of embedded entities accepted on decode. The root is
    /// level 0.
    pub max_depth: usize,
    /// Handling of lists given for functional properties.
    pub functional_lists: FunctionalListPolicy,
    /// Kind a root document is decoded as when its `type` is missing or
    /// unregistered. `None` makes such documents an error.
    pub fallback_kind: Option<String>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            functional_lists: FunctionalListPolicy::default(),
            fallback_kind: Some(DEFAULT_FALLBACK_KIND.to_owned()),
        }
    }
}

impl CodecConfig {
    /// Returns a strict configuration: lists on functional properties are
    /// rejected and the root must name a registered kind.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            functional_lists: FunctionalListPolicy::Reject,
            fallback_kind: None,
            ..Self::default()
        }
    }
}
