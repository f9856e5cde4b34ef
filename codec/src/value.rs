//! Property cells: one resolved value ([`IntermediateValue`]) and the
//! cardinality-aware container a property holds ([`PropertyValue`]).

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use streams_vocab::{Role, Shape};

use crate::entity::Entity;
use crate::scalar::{Duration, Iri, LanguageString, Literal};

/// One value of one property, in exactly one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum IntermediateValue {
    /// An embedded entity, tagged with the role it was resolved under.
    Entity {
        /// The capability role the entity fills for this property.
        role: Role,
        /// The embedded entity.
        entity: Box<Entity>,
    },
    /// A bare IRI pointing at another entity.
    Reference(Iri),
    /// A scalar literal.
    Literal(Literal),
    /// A raw value no candidate shape matched, kept verbatim.
    Unknown(Value),
}

impl IntermediateValue {
    /// Returns the shape of this value, or `None` for [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match self {
            IntermediateValue::Entity { role, .. } => Some(Shape::Entity(*role)),
            IntermediateValue::Reference(_) => Some(Shape::Reference),
            IntermediateValue::Literal(literal) => Some(Shape::Literal(literal.kind())),
            IntermediateValue::Unknown(_) => None,
        }
    }

    /// Returns the embedded entity, if this is one.
    #[must_use]
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            IntermediateValue::Entity { entity, .. } => Some(entity),
            _ => None,
        }
    }

    /// Returns the referenced IRI, if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&Iri> {
        match self {
            IntermediateValue::Reference(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal, if this is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            IntermediateValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns the text of a string-like literal (`xsd:string`, MIME type or
    /// language tag).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IntermediateValue::Literal(
                Literal::String(s) | Literal::MimeType(s) | Literal::Bcp47(s),
            ) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw value, if nothing matched it.
    #[must_use]
    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            IntermediateValue::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns true for [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, IntermediateValue::Unknown(_))
    }
}

impl From<Entity> for IntermediateValue {
    /// Wraps an entity under its kind's first role. Setters re-tag it with
    /// the role the property's range prefers.
    fn from(entity: Entity) -> Self {
        let role = entity.schema().roles().first().copied().unwrap_or(Role::Object);
        IntermediateValue::Entity {
            role,
            entity: Box::new(entity),
        }
    }
}

impl From<Iri> for IntermediateValue {
    fn from(iri: Iri) -> Self {
        IntermediateValue::Reference(iri)
    }
}

impl From<Literal> for IntermediateValue {
    fn from(literal: Literal) -> Self {
        IntermediateValue::Literal(literal)
    }
}

impl From<&str> for IntermediateValue {
    fn from(s: &str) -> Self {
        Literal::String(s.to_owned()).into()
    }
}

impl From<String> for IntermediateValue {
    fn from(s: String) -> Self {
        Literal::String(s).into()
    }
}

impl From<LanguageString> for IntermediateValue {
    fn from(s: LanguageString) -> Self {
        Literal::LangString(s).into()
    }
}

impl From<DateTime<FixedOffset>> for IntermediateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Literal::DateTime(dt).into()
    }
}

impl From<Duration> for IntermediateValue {
    fn from(d: Duration) -> Self {
        Literal::Duration(d).into()
    }
}

impl From<f64> for IntermediateValue {
    fn from(f: f64) -> Self {
        Literal::Float(f).into()
    }
}

impl From<u64> for IntermediateValue {
    fn from(n: u64) -> Self {
        Literal::NonNegativeInteger(n).into()
    }
}

impl From<bool> for IntermediateValue {
    fn from(b: bool) -> Self {
        Literal::Boolean(b).into()
    }
}

/// Everything one property holds.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// At most one value.
    Functional(Option<IntermediateValue>),
    /// An ordered sequence of values.
    NonFunctional(Vec<IntermediateValue>),
}

impl PropertyValue {
    /// Returns an empty container of the given cardinality.
    #[must_use]
    pub fn empty(functional: bool) -> Self {
        if functional {
            PropertyValue::Functional(None)
        } else {
            PropertyValue::NonFunctional(Vec::new())
        }
    }

    /// Returns true for the functional variant.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        matches!(self, PropertyValue::Functional(_))
    }

    /// The values, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[IntermediateValue] {
        match self {
            PropertyValue::Functional(value) => value.as_slice(),
            PropertyValue::NonFunctional(values) => values,
        }
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if no value is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IntermediateValue> {
        self.as_slice().get(index)
    }

    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> Option<&IntermediateValue> {
        self.as_slice().first()
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IntermediateValue> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a PropertyValue {
    type Item = &'a IntermediateValue;
    type IntoIter = std::slice::Iter<'a, IntermediateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
