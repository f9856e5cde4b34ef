//! Error types for scalar decoding and document transcoding.

use streams_vocab::Shape;

/// A raw scalar that has the right JSON type for a literal kind but does not
/// parse as one.
///
/// A scalar of the wrong JSON type is not an error: decoders report that as a
/// mismatch (`Ok(None)`) and the next candidate shape is tried.
#[derive(Debug, thiserror::Error)]
pub enum ScalarError {
    /// The string is not an RFC 3339 date-time.
    #[error("invalid date-time {text:?}: {source}")]
    InvalidDateTime {
        /// The offending text.
        text: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// The string is not an ISO 8601 duration.
    #[error("invalid duration {text:?}: {reason}")]
    InvalidDuration {
        /// The offending text.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The string is not an absolute IRI.
    #[error("invalid IRI {text:?}: {source}")]
    InvalidIri {
        /// The offending text.
        text: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A number other than 0 or 1 where a boolean was expected.
    #[error("invalid boolean {0}: only true, false, 0 and 1 are accepted")]
    InvalidBoolean(serde_json::Number),

    /// A number that is negative or not integral where a non-negative integer
    /// was expected.
    #[error("invalid non-negative integer {0}")]
    InvalidInteger(serde_json::Number),

    /// A number that cannot be represented as a finite `f64`.
    #[error("invalid float {0}")]
    InvalidFloat(serde_json::Number),
}

/// Errors raised while decoding a document into an [`Entity`](crate::Entity)
/// or while mutating an entity through its accessors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A value claimed a literal kind but failed to parse as it. Aborts the
    /// enclosing decode.
    #[error("malformed value for `{property}`: {source}")]
    MalformedScalar {
        /// Document key of the property (or `id`).
        property: String,
        /// The scalar failure.
        #[source]
        source: ScalarError,
    },

    /// The `type` key holds something other than a string or a list of
    /// strings.
    #[error("`type` must be a string or a list of strings, found {found}")]
    MalformedTypeTag {
        /// JSON type name of the offending value.
        found: &'static str,
    },

    /// A type tag names a registered kind the entity is not an instance of.
    #[error("`{tag}` is a registered kind unrelated to `{kind}`")]
    ConflictingTypeTag {
        /// Name of the entity's kind.
        kind: &'static str,
        /// The rejected tag.
        tag: String,
    },

    /// A functional property received more than one value and the configured
    /// policy rejects that.
    #[error("`{property}` holds at most one value, received {count}")]
    CardinalityMismatch {
        /// Document key of the property.
        property: String,
        /// Number of values received.
        count: usize,
    },

    /// No kind with this name is registered.
    #[error("unknown kind `{0}`")]
    UnknownKind(String),

    /// The root object names no registered kind and no fallback is configured.
    #[error("no registered kind among {names:?}")]
    UnresolvableDocument {
        /// The discriminator names found on the root object.
        names: Vec<String>,
    },

    /// The property is not declared on the entity's kind.
    #[error("`{property}` is not a property of `{kind}`")]
    UndeclaredProperty {
        /// Name of the entity's kind.
        kind: &'static str,
        /// The requested property.
        property: String,
    },

    /// The value's shape is not in the property's range.
    #[error("`{property}` does not accept {shape:?}")]
    IllegalShape {
        /// Document key of the property.
        property: &'static str,
        /// The rejected shape.
        shape: Shape,
    },

    /// NaN and infinities have no document form.
    #[error("`{property}` cannot hold a non-finite float")]
    NonFiniteFloat {
        /// Document key of the property.
        property: &'static str,
    },

    /// A sequence operation was applied to a functional property.
    #[error("`{property}` is functional; use `set`")]
    NotNonFunctional {
        /// Document key of the property.
        property: &'static str,
    },

    /// A language-map operation was applied to a property without one.
    #[error("`{property}` has no natural-language map")]
    NoLanguageMap {
        /// Document key of the property.
        property: &'static str,
    },

    /// Embedded entities nest deeper than the configured limit.
    #[error("embedded entities nest deeper than {limit} levels")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// The document (or an embedded entity) is not a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// Returns the JSON type name of a raw value, for error messages.
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
