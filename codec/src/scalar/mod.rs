//! Scalar codecs: one external primitive shape to and from its raw document
//! form.
//!
//! Every decoder follows the same contract. `Ok(Some(_))` is a match,
//! `Ok(None)` means the raw value has the wrong JSON type for this kind (the
//! caller moves on to the next candidate), and `Err(_)` means the JSON type
//! was right but the content does not parse.

mod duration;
mod iri;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Map, Number, Value};
use streams_vocab::LiteralKind;

pub use duration::Duration;
pub use iri::Iri;

use crate::error::ScalarError;

/// JSON-LD keyword holding a value object's lexical form.
pub const VALUE_KEY: &str = "@value";
/// JSON-LD keyword holding a value object's language tag.
pub const LANGUAGE_KEY: &str = "@language";

/// A string tagged with an optional BCP 47 language, written as a JSON-LD
/// value object: `{"@value": "Robot", "@language": "fr"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageString {
    /// The text.
    pub value: String,
    /// The language tag, if any.
    pub language: Option<String>,
}

impl LanguageString {
    /// Creates a language-tagged string.
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }
}

/// A decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `xsd:string`.
    String(String),
    /// `rdf:langString`.
    LangString(LanguageString),
    /// `xsd:dateTime`; the original offset is kept.
    DateTime(DateTime<FixedOffset>),
    /// `xsd:duration`.
    Duration(Duration),
    /// `xsd:float`.
    Float(f64),
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger(u64),
    /// `xsd:boolean`.
    Boolean(bool),
    /// A MIME media type.
    MimeType(String),
    /// A BCP 47 language tag.
    Bcp47(String),
}

impl Literal {
    /// Returns the literal kind of this value.
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::LangString(_) => LiteralKind::LangString,
            Literal::DateTime(_) => LiteralKind::DateTime,
            Literal::Duration(_) => LiteralKind::Duration,
            Literal::Float(_) => LiteralKind::Float,
            Literal::NonNegativeInteger(_) => LiteralKind::NonNegativeInteger,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::MimeType(_) => LiteralKind::MimeType,
            Literal::Bcp47(_) => LiteralKind::Bcp47,
        }
    }

    /// Encodes the literal in its natural raw form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Literal::String(s) | Literal::MimeType(s) | Literal::Bcp47(s) => {
                Value::String(s.clone())
            }
            Literal::LangString(s) => encode_language_string(s),
            Literal::DateTime(dt) => Value::String(encode_date_time(dt)),
            Literal::Duration(d) => Value::String(d.to_string()),
            // Non-finite floats have no JSON form.
            Literal::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Literal::NonNegativeInteger(n) => Value::from(*n),
            Literal::Boolean(b) => Value::Bool(*b),
        }
    }
}

/// Decodes `raw` as a literal of the given kind.
///
/// # Errors
///
/// Returns a [`ScalarError`] if `raw` has the JSON type `kind` is written in
/// but its content does not parse.
pub fn decode_literal(kind: LiteralKind, raw: &Value) -> Result<Option<Literal>, ScalarError> {
    Ok(match kind {
        LiteralKind::String => decode_string(raw).map(Literal::String),
        LiteralKind::MimeType => decode_string(raw).map(Literal::MimeType),
        LiteralKind::Bcp47 => decode_string(raw).map(Literal::Bcp47),
        LiteralKind::LangString => decode_language_string(raw).map(Literal::LangString),
        LiteralKind::DateTime => decode_date_time(raw)?.map(Literal::DateTime),
        LiteralKind::Duration => decode_duration(raw)?.map(Literal::Duration),
        LiteralKind::Float => decode_float(raw)?.map(Literal::Float),
        LiteralKind::NonNegativeInteger => {
            decode_non_negative_integer(raw)?.map(Literal::NonNegativeInteger)
        }
        LiteralKind::Boolean => decode_boolean(raw)?.map(Literal::Boolean),
    })
}

/// Decodes a plain string.
#[must_use]
pub fn decode_string(raw: &Value) -> Option<String> {
    raw.as_str().map(str::to_owned)
}

/// Decodes a JSON-LD value object made of `@value` and an optional
/// `@language`, both strings. Any other key makes the map a mismatch.
#[must_use]
pub fn decode_language_string(raw: &Value) -> Option<LanguageString> {
    let map = raw.as_object()?;
    let value = map.get(VALUE_KEY)?.as_str()?.to_owned();
    let language = match map.get(LANGUAGE_KEY) {
        Some(tag) => Some(tag.as_str()?.to_owned()),
        None => None,
    };
    let expected = 1 + usize::from(language.is_some());
    (map.len() == expected).then_some(LanguageString { value, language })
}

/// Encodes a language string as a JSON-LD value object.
#[must_use]
pub fn encode_language_string(s: &LanguageString) -> Value {
    let mut map = Map::new();
    map.insert(VALUE_KEY.to_owned(), Value::String(s.value.clone()));
    if let Some(language) = &s.language {
        map.insert(LANGUAGE_KEY.to_owned(), Value::String(language.clone()));
    }
    Value::Object(map)
}

/// Decodes an RFC 3339 date-time.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidDateTime`] for a string that is not RFC 3339.
pub fn decode_date_time(raw: &Value) -> Result<Option<DateTime<FixedOffset>>, ScalarError> {
    let Some(text) = raw.as_str() else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(text)
        .map(Some)
        .map_err(|source| ScalarError::InvalidDateTime {
            text: text.to_owned(),
            source,
        })
}

/// Encodes a date-time as RFC 3339, using `Z` for UTC and only as many
/// fractional digits as needed.
#[must_use]
pub fn encode_date_time(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Decodes an ISO 8601 duration.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidDuration`] for a string that is not a
/// duration.
pub fn decode_duration(raw: &Value) -> Result<Option<Duration>, ScalarError> {
    raw.as_str().map(Duration::parse).transpose()
}

/// Decodes a float from any JSON number.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidFloat`] if the number has no finite `f64`
/// form.
pub fn decode_float(raw: &Value) -> Result<Option<f64>, ScalarError> {
    let Value::Number(n) = raw else {
        return Ok(None);
    };
    match n.as_f64() {
        Some(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(ScalarError::InvalidFloat(n.clone())),
    }
}

/// Decodes a non-negative integer. Integral floats such as `3.0` are
/// accepted.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidInteger`] for negative or fractional numbers.
pub fn decode_non_negative_integer(raw: &Value) -> Result<Option<u64>, ScalarError> {
    let Value::Number(n) = raw else {
        return Ok(None);
    };
    if let Some(u) = n.as_u64() {
        return Ok(Some(u));
    }
    match n.as_f64() {
        // 2^53: beyond this an f64 no longer names a unique integer.
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= 9_007_199_254_740_992.0 => {
            Ok(Some(f as u64))
        }
        _ => Err(ScalarError::InvalidInteger(n.clone())),
    }
}

/// Decodes a boolean from a JSON boolean or the numbers 0 and 1.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidBoolean`] for any other number.
pub fn decode_boolean(raw: &Value) -> Result<Option<bool>, ScalarError> {
    match raw {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            _ => Err(ScalarError::InvalidBoolean(n.clone())),
        },
        _ => Ok(None),
    }
}

/// Decodes an absolute IRI.
///
/// # Errors
///
/// Returns [`ScalarError::InvalidIri`] for a string that is not an absolute
/// IRI.
pub fn decode_iri(raw: &Value) -> Result<Option<Iri>, ScalarError> {
    raw.as_str().map(Iri::parse).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_json_type_is_a_mismatch_not_an_error() {
        assert!(matches!(decode_date_time(&json!(5)), Ok(None)));
        assert!(matches!(decode_duration(&json!(true)), Ok(None)));
        assert!(matches!(decode_float(&json!("1.5")), Ok(None)));
        assert!(matches!(decode_boolean(&json!("true")), Ok(None)));
        assert!(matches!(decode_iri(&json!({ "id": "x" })), Ok(None)));
        assert_eq!(decode_string(&json!(1)), None);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(matches!(
            decode_date_time(&json!("yesterday")),
            Err(ScalarError::InvalidDateTime { .. })
        ));
        assert!(matches!(
            decode_duration(&json!("5 minutes")),
            Err(ScalarError::InvalidDuration { .. })
        ));
        assert!(matches!(
            decode_iri(&json!("not a uri")),
            Err(ScalarError::InvalidIri { .. })
        ));
    }

    #[test]
    fn booleans_accept_zero_and_one() {
        assert_eq!(decode_boolean(&json!(true)).ok().flatten(), Some(true));
        assert_eq!(decode_boolean(&json!(0)).ok().flatten(), Some(false));
        assert_eq!(decode_boolean(&json!(1)).ok().flatten(), Some(true));
        assert!(matches!(
            decode_boolean(&json!(2)),
            Err(ScalarError::InvalidBoolean(_))
        ));
        assert_eq!(Literal::Boolean(true).to_value(), json!(true));
    }

    #[test]
    fn non_negative_integers() {
        assert_eq!(decode_non_negative_integer(&json!(640)).ok().flatten(), Some(640));
        assert_eq!(decode_non_negative_integer(&json!(3.0)).ok().flatten(), Some(3));
        assert!(decode_non_negative_integer(&json!(-1)).is_err());
        assert!(decode_non_negative_integer(&json!(1.5)).is_err());
    }

    #[test]
    fn date_times_keep_their_offset() {
        let dt = decode_date_time(&json!("2014-12-12T12:12:12+02:00"))
            .expect("valid")
            .expect("string");
        assert_eq!(encode_date_time(&dt), "2014-12-12T12:12:12+02:00");

        let utc = decode_date_time(&json!("2014-12-12T12:12:12Z"))
            .expect("valid")
            .expect("string");
        assert_eq!(encode_date_time(&utc), "2014-12-12T12:12:12Z");
    }

    #[test]
    fn language_strings_are_value_objects() {
        let raw = json!({ "@value": "Robot", "@language": "fr" });
        let s = decode_language_string(&raw).expect("value object");
        assert_eq!(s, LanguageString::new("Robot", "fr"));
        assert_eq!(encode_language_string(&s), raw);

        let untagged = json!({ "@value": "Robot" });
        assert_eq!(
            decode_language_string(&untagged).map(|s| s.language),
            Some(None)
        );

        assert_eq!(decode_language_string(&json!("Robot")), None);
        assert_eq!(
            decode_language_string(&json!({ "@value": "Robot", "@direction": "ltr" })),
            None
        );
        assert_eq!(
            decode_language_string(&json!({ "@value": "Robot", "@language": 5 })),
            None
        );
    }

    #[test]
    fn string_kinds_share_a_wire_form() {
        for kind in [LiteralKind::String, LiteralKind::MimeType, LiteralKind::Bcp47] {
            let literal = decode_literal(kind, &json!("text/html"))
                .expect("valid")
                .expect("string");
            assert_eq!(literal.kind(), kind);
            assert_eq!(literal.to_value(), json!("text/html"));
        }
    }

    #[test]
    fn non_finite_floats_encode_as_null() {
        assert_eq!(Literal::Float(f64::NAN).to_value(), Value::Null);
        assert_eq!(Literal::Float(1.5).to_value(), json!(1.5));
    }
}
