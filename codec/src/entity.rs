//! Typed entities and their property accessors.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};
use streams_vocab::{Kind, Property, Shape};

use crate::error::CodecError;
use crate::language::NaturalLanguageMap;
use crate::registry::{KindSchema, TypeRegistry};
use crate::scalar::{Iri, Literal};
use crate::transcoder::{self, Transcoder};
use crate::unknown::UnknownBag;
use crate::value::{IntermediateValue, PropertyValue};

/// An instance of one vocabulary kind.
///
/// Properties are only reachable through accessors that check the kind's
/// schema, so an entity never holds a value in a shape its property does not
/// accept (other than [`IntermediateValue::Unknown`]) and a functional
/// property never holds more than one value.
///
/// ```
/// use streams_codec::{Entity, IntermediateValue};
///
/// let mut note = Entity::new("Note")?;
/// note.set("content", "hello")?;
/// note.set_language("content", "fr", "bonjour")?;
/// assert_eq!(note.get("content").and_then(IntermediateValue::as_str), Some("hello"));
/// assert_eq!(note.to_document()["type"], "Note");
/// # Ok::<(), streams_codec::CodecError>(())
/// ```
#[derive(Clone)]
pub struct Entity {
    registry: &'static TypeRegistry,
    schema: &'static KindSchema,
    type_tags: Vec<String>,
    id: Option<Iri>,
    properties: BTreeMap<&'static str, PropertyValue>,
    language_maps: BTreeMap<&'static str, NaturalLanguageMap>,
    unknown: UnknownBag,
}

impl Entity {
    /// Creates an empty entity of kind `kind` from the standard vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKind`] if `kind` is not registered.
    pub fn new(kind: &str) -> Result<Self, CodecError> {
        TypeRegistry::standard().create(kind)
    }

    /// Creates an empty entity of kind `kind` from `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKind`] if `kind` is not registered.
    pub fn with_registry(registry: &'static TypeRegistry, kind: &str) -> Result<Self, CodecError> {
        registry.create(kind)
    }

    pub(crate) fn zero(registry: &'static TypeRegistry, schema: &'static KindSchema) -> Self {
        Self {
            registry,
            schema,
            type_tags: Vec::new(),
            id: None,
            properties: BTreeMap::new(),
            language_maps: BTreeMap::new(),
            unknown: UnknownBag::new(),
        }
    }

    /// Decodes a document with the standard transcoder.
    ///
    /// # Errors
    ///
    /// See [`Transcoder::decode`].
    pub fn from_document(document: &Value) -> Result<Self, CodecError> {
        Transcoder::default().decode(document)
    }

    /// Encodes the entity as a document. Encoding cannot fail.
    #[must_use]
    pub fn to_document(&self) -> Value {
        Value::Object(self.to_map())
    }

    /// Encodes the entity as a JSON object.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        transcoder::encode(self)
    }

    /// The kind of this entity.
    #[must_use]
    pub fn kind(&self) -> &'static Kind {
        self.schema.kind()
    }

    /// The resolved schema of this entity's kind.
    #[must_use]
    pub fn schema(&self) -> &'static KindSchema {
        self.schema
    }

    /// The registry this entity was created from.
    #[must_use]
    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    /// Declared and inherited properties, in write order.
    #[must_use]
    pub fn declared_properties(&self) -> &'static [&'static Property] {
        self.schema.properties()
    }

    /// Type tags as set or decoded. The canonical kind name is not added
    /// until the entity is written; see [`canonical_type_tags`](Self::canonical_type_tags).
    #[must_use]
    pub fn type_tags(&self) -> &[String] {
        &self.type_tags
    }

    /// Appends a type tag.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::ConflictingTypeTag`] if `tag` names a
    /// registered kind that is neither this entity's kind nor one of its
    /// supertypes.
    pub fn push_type(&mut self, tag: impl Into<String>) -> Result<(), CodecError> {
        let tag = self.admit_tag(tag.into())?;
        self.type_tags.push(tag);
        Ok(())
    }

    /// Replaces all type tags.
    ///
    /// # Errors
    ///
    /// Fails as [`push_type`](Self::push_type) on the first conflicting tag;
    /// the tags are left unchanged.
    pub fn set_type_tags(&mut self, tags: Vec<String>) -> Result<(), CodecError> {
        self.type_tags = tags
            .into_iter()
            .map(|tag| self.admit_tag(tag))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    pub(crate) fn store_type_tags(&mut self, tags: Vec<String>) {
        self.type_tags = tags;
    }

    /// Type tags as they will be written. The canonical kind name is
    /// prepended when absent and moved to the front when a registered name
    /// precedes it, so the written document reads back as the same kind.
    #[must_use]
    pub fn canonical_type_tags(&self) -> Vec<String> {
        let name = self.kind().name;
        let found = self.type_tags.iter().position(|tag| tag == name);
        if let Some(at) = found {
            let shadowed = self.type_tags[..at]
                .iter()
                .any(|tag| self.registry.schema(tag).is_some());
            if !shadowed {
                return self.type_tags.clone();
            }
        }
        let mut tags = Vec::with_capacity(self.type_tags.len() + 1);
        tags.push(name.to_owned());
        tags.extend(
            self.type_tags
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != found)
                .map(|(_, tag)| tag.clone()),
        );
        tags
    }

    /// Applies [`canonical_type_tags`](Self::canonical_type_tags) in place,
    /// here and in every embedded entity. Idempotent.
    pub fn canonicalize_types(&mut self) {
        self.type_tags = self.canonical_type_tags();
        for value in self.properties.values_mut() {
            let values: &mut [IntermediateValue] = match value {
                PropertyValue::Functional(value) => value.as_mut_slice(),
                PropertyValue::NonFunctional(values) => values,
            };
            for value in values {
                if let IntermediateValue::Entity { entity, .. } = value {
                    entity.canonicalize_types();
                }
            }
        }
    }

    /// The entity's IRI.
    #[must_use]
    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    /// Sets or clears the entity's IRI.
    pub fn set_id(&mut self, id: Option<Iri>) {
        self.id = id;
    }

    /// Everything a property holds, or `None` if it holds nothing.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The values of a property, in order. Empty when unset or undeclared.
    #[must_use]
    pub fn values(&self, name: &str) -> &[IntermediateValue] {
        self.properties
            .get(name)
            .map(PropertyValue::as_slice)
            .unwrap_or_default()
    }

    /// The first value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IntermediateValue> {
        self.values(name).first()
    }

    /// Iterates over every property holding at least one value, in write
    /// order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static Property, &PropertyValue)> + '_ {
        self.schema
            .properties()
            .iter()
            .filter_map(|p| Some((*p, self.properties.get(p.name)?)))
    }

    /// Replaces every value of a property with `value`.
    ///
    /// # Errors
    ///
    /// Fails if the property is not declared on this kind or does not accept
    /// the value's shape.
    pub fn set(&mut self, name: &str, value: impl Into<IntermediateValue>) -> Result<(), CodecError> {
        let property = self.declared(name)?;
        let value = admit(property, value.into())?;
        let cell = if property.functional {
            PropertyValue::Functional(Some(value))
        } else {
            PropertyValue::NonFunctional(vec![value])
        };
        self.properties.insert(property.name, cell);
        Ok(())
    }

    /// Appends a value to a non-functional property.
    ///
    /// # Errors
    ///
    /// Fails if the property is undeclared, functional, or does not accept
    /// the value's shape.
    pub fn append(&mut self, name: &str, value: impl Into<IntermediateValue>) -> Result<(), CodecError> {
        let (values, value) = self.sequence(name, value.into())?;
        values.push(value);
        Ok(())
    }

    /// Prepends a value to a non-functional property.
    ///
    /// # Errors
    ///
    /// As for [`append`](Self::append).
    pub fn prepend(&mut self, name: &str, value: impl Into<IntermediateValue>) -> Result<(), CodecError> {
        let (values, value) = self.sequence(name, value.into())?;
        values.insert(0, value);
        Ok(())
    }

    /// Inserts a value into a non-functional property at `index`, clamped to
    /// the end of the sequence.
    ///
    /// # Errors
    ///
    /// As for [`append`](Self::append).
    pub fn insert(
        &mut self,
        name: &str,
        index: usize,
        value: impl Into<IntermediateValue>,
    ) -> Result<(), CodecError> {
        let (values, value) = self.sequence(name, value.into())?;
        values.insert(index.min(values.len()), value);
        Ok(())
    }

    /// Removes and returns the value at `index`. For a functional property
    /// the only index is 0.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UndeclaredProperty`] if the property is not
    /// declared on this kind.
    pub fn remove(&mut self, name: &str, index: usize) -> Result<Option<IntermediateValue>, CodecError> {
        let property = self.declared(name)?;
        let Some(cell) = self.properties.get_mut(property.name) else {
            return Ok(None);
        };
        let removed = match cell {
            PropertyValue::Functional(value) if index == 0 => value.take(),
            PropertyValue::Functional(_) => None,
            PropertyValue::NonFunctional(values) => {
                (index < values.len()).then(|| values.remove(index))
            }
        };
        if cell.is_empty() {
            self.properties.remove(property.name);
        }
        Ok(removed)
    }

    /// Removes every value of a property, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UndeclaredProperty`] if the property is not
    /// declared on this kind.
    pub fn clear(&mut self, name: &str) -> Result<Option<PropertyValue>, CodecError> {
        let property = self.declared(name)?;
        Ok(self.properties.remove(property.name))
    }

    /// The natural-language map of a property, if it holds any entry.
    #[must_use]
    pub fn language_map(&self, name: &str) -> Option<&NaturalLanguageMap> {
        self.language_maps.get(name)
    }

    /// The text of a property in one language.
    #[must_use]
    pub fn language(&self, name: &str, language: &str) -> Option<&str> {
        self.language_maps.get(name)?.get(language)
    }

    /// Sets the text of a property in one language, returning the previous
    /// text. The property's ordinary values are untouched.
    ///
    /// # Errors
    ///
    /// Fails if the property is undeclared or carries no language map.
    pub fn set_language(
        &mut self,
        name: &str,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Option<String>, CodecError> {
        let property = self.language_property(name)?;
        Ok(self
            .language_maps
            .entry(property.name)
            .or_default()
            .insert(language, text))
    }

    /// Removes the text of a property in one language.
    ///
    /// # Errors
    ///
    /// Fails if the property is undeclared or carries no language map.
    pub fn remove_language(&mut self, name: &str, language: &str) -> Result<Option<String>, CodecError> {
        let property = self.language_property(name)?;
        let Some(map) = self.language_maps.get_mut(property.name) else {
            return Ok(None);
        };
        let removed = map.remove(language);
        if map.is_empty() {
            self.language_maps.remove(property.name);
        }
        Ok(removed)
    }

    /// Replaces the whole natural-language map of a property. An empty map
    /// clears it.
    ///
    /// # Errors
    ///
    /// Fails if the property is undeclared or carries no language map.
    pub fn set_language_map(&mut self, name: &str, map: NaturalLanguageMap) -> Result<(), CodecError> {
        let property = self.language_property(name)?;
        if map.is_empty() {
            self.language_maps.remove(property.name);
        } else {
            self.language_maps.insert(property.name, map);
        }
        Ok(())
    }

    /// Keys the schema does not declare, kept verbatim.
    #[must_use]
    pub fn unknown(&self) -> &UnknownBag {
        &self.unknown
    }

    /// Mutable access to the unknown bag.
    pub fn unknown_mut(&mut self) -> &mut UnknownBag {
        &mut self.unknown
    }

    /// Stores a decoded property without re-checking its shapes.
    pub(crate) fn store(&mut self, property: &'static Property, cell: PropertyValue) {
        if cell.is_empty() {
            self.properties.remove(property.name);
        } else {
            self.properties.insert(property.name, cell);
        }
    }

    pub(crate) fn store_language_map(&mut self, property: &'static Property, map: NaturalLanguageMap) {
        if !map.is_empty() {
            self.language_maps.insert(property.name, map);
        }
    }

    fn admit_tag(&self, tag: String) -> Result<String, CodecError> {
        let kind = self.kind().name;
        if self.registry.schema(&tag).is_some() && !self.registry.is_subtype(kind, &tag) {
            return Err(CodecError::ConflictingTypeTag { kind, tag });
        }
        Ok(tag)
    }

    fn declared(&self, name: &str) -> Result<&'static Property, CodecError> {
        self.schema
            .property(name)
            .ok_or_else(|| CodecError::UndeclaredProperty {
                kind: self.kind().name,
                property: name.to_owned(),
            })
    }

    fn language_property(&self, name: &str) -> Result<&'static Property, CodecError> {
        let property = self.declared(name)?;
        if property.natural_language {
            Ok(property)
        } else {
            Err(CodecError::NoLanguageMap {
                property: property.name,
            })
        }
    }

    fn sequence(
        &mut self,
        name: &str,
        value: IntermediateValue,
    ) -> Result<(&mut Vec<IntermediateValue>, IntermediateValue), CodecError> {
        let property = self.declared(name)?;
        if property.functional {
            return Err(CodecError::NotNonFunctional {
                property: property.name,
            });
        }
        let value = admit(property, value)?;
        let cell = self
            .properties
            .entry(property.name)
            .or_insert_with(|| PropertyValue::NonFunctional(Vec::new()));
        match cell {
            PropertyValue::NonFunctional(values) => Ok((values, value)),
            // Cells follow their property's cardinality.
            PropertyValue::Functional(_) => Err(CodecError::NotNonFunctional {
                property: property.name,
            }),
        }
    }
}

/// Checks `value` against the range of `property`. Embedded entities are
/// re-tagged with the first range role their kind implements, the role
/// decoding would pick.
fn admit(property: &'static Property, value: IntermediateValue) -> Result<IntermediateValue, CodecError> {
    match value {
        IntermediateValue::Entity { role, entity } => {
            match property.entity_roles().find(|r| entity.schema.implements(*r)) {
                Some(role) => Ok(IntermediateValue::Entity { role, entity }),
                None => Err(CodecError::IllegalShape {
                    property: property.name,
                    shape: Shape::Entity(role),
                }),
            }
        }
        IntermediateValue::Literal(Literal::Float(f)) if !f.is_finite() => {
            Err(CodecError::NonFiniteFloat {
                property: property.name,
            })
        }
        IntermediateValue::Unknown(_) => Ok(value),
        value => match value.shape() {
            Some(shape) if property.accepts(shape) => Ok(value),
            Some(shape) => Err(CodecError::IllegalShape {
                property: property.name,
                shape,
            }),
            None => Ok(value),
        },
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name()
            && self.type_tags == other.type_tags
            && self.id == other.id
            && self.properties == other.properties
            && self.language_maps == other.language_maps
            && self.unknown == other.unknown
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &self.schema.name())
            .field("type_tags", &self.type_tags)
            .field("id", &self.id)
            .field("properties", &self.properties)
            .field("language_maps", &self.language_maps)
            .field("unknown", &self.unknown)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::LanguageString;
    use streams_vocab::{LiteralKind, Role};

    fn entity(kind: &str) -> Entity {
        Entity::new(kind).expect("registered kind")
    }

    fn iri(text: &str) -> Iri {
        Iri::parse(text).expect("valid IRI")
    }

    #[test]
    fn functional_set_replaces() {
        let mut note = entity("Note");
        let mime = |text: &str| IntermediateValue::from(Literal::MimeType(text.to_owned()));
        note.set("mediaType", mime("text/plain")).expect("accepted");
        note.set("mediaType", mime("text/html")).expect("accepted");
        assert_eq!(note.values("mediaType").len(), 1);
        assert_eq!(note.get("mediaType").and_then(IntermediateValue::as_str), Some("text/html"));
        assert!(matches!(
            note.set("mediaType", "text/html"),
            Err(CodecError::IllegalShape { property: "mediaType", .. })
        ));
    }

    #[test]
    fn set_on_a_sequence_replaces_every_value() {
        let mut note = entity("Note");
        note.append("summary", "first").expect("accepted");
        note.append("summary", "second").expect("accepted");
        note.set("summary", "only").expect("accepted");
        assert_eq!(note.values("summary").len(), 1);
    }

    #[test]
    fn sequence_operations_keep_order() {
        let mut note = entity("Note");
        note.append("to", iri("https://example.com/b")).expect("accepted");
        note.prepend("to", iri("https://example.com/a")).expect("accepted");
        note.append("to", iri("https://example.com/d")).expect("accepted");
        note.insert("to", 2, iri("https://example.com/c")).expect("accepted");
        note.insert("to", 99, iri("https://example.com/e")).expect("accepted");
        let targets: Vec<_> = note
            .values("to")
            .iter()
            .filter_map(|v| v.as_reference().map(Iri::as_str))
            .collect();
        assert_eq!(
            targets,
            [
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c",
                "https://example.com/d",
                "https://example.com/e",
            ]
        );

        let removed = note.remove("to", 1).expect("declared");
        assert_eq!(removed, Some(IntermediateValue::from(iri("https://example.com/b"))));
        assert_eq!(note.remove("to", 42).expect("declared"), None);
        assert_eq!(note.values("to").len(), 4);
    }

    #[test]
    fn sequence_operations_reject_functional_properties() {
        let mut note = entity("Note");
        assert!(matches!(
            note.append("duration", crate::scalar::Duration::default()),
            Err(CodecError::NotNonFunctional { property: "duration" })
        ));
    }

    #[test]
    fn undeclared_and_illegal() {
        let mut note = entity("Note");
        assert!(matches!(
            note.set("totalItems", 3_u64),
            Err(CodecError::UndeclaredProperty { kind: "Note", .. })
        ));
        assert!(matches!(
            note.set("published", true),
            Err(CodecError::IllegalShape { property: "published", .. })
        ));
        assert!(matches!(
            note.set("latitude", f64::NAN),
            Err(CodecError::UndeclaredProperty { .. })
        ));
        let mut place = entity("Place");
        assert!(matches!(
            place.set("latitude", f64::INFINITY),
            Err(CodecError::NonFiniteFloat { property: "latitude" })
        ));
        place.set("latitude", 36.75).expect("finite");
    }

    #[test]
    fn unknown_values_are_always_accepted() {
        let mut note = entity("Note");
        note.append("tag", IntermediateValue::Unknown(serde_json::json!({ "x": 1 })))
            .expect("accepted");
        assert!(note.get("tag").is_some_and(IntermediateValue::is_unknown));
    }

    #[test]
    fn embedded_entities_take_the_preferred_role() {
        let mut activity = entity("Create");
        activity.set("object", entity("OrderedCollection")).expect("accepted");
        assert!(matches!(
            activity.get("object"),
            Some(IntermediateValue::Entity { role: Role::Object, .. })
        ));

        let mut note = entity("Note");
        note.set("replies", entity("OrderedCollection")).expect("accepted");
        assert!(matches!(
            note.get("replies"),
            Some(IntermediateValue::Entity { role: Role::Collection, .. })
        ));
        assert!(matches!(
            note.set("replies", entity("Note")),
            Err(CodecError::IllegalShape { property: "replies", .. })
        ));
    }

    #[test]
    fn language_maps_are_independent_of_values() {
        let mut app = entity("Application");
        app.set("name", "Bot").expect("accepted");
        app.set_language("name", "en", "Bot").expect("natural language");
        app.set_language("name", "fr", "Robot").expect("natural language");
        assert_eq!(app.values("name").len(), 1);
        assert_eq!(app.language("name", "fr"), Some("Robot"));

        app.clear("name").expect("declared");
        assert_eq!(app.language_map("name").map(NaturalLanguageMap::len), Some(2));

        app.remove_language("name", "en").expect("natural language");
        app.remove_language("name", "fr").expect("natural language");
        assert!(app.language_map("name").is_none());

        assert!(matches!(
            app.set_language("to", "en", "x"),
            Err(CodecError::NoLanguageMap { property: "to" })
        ));
    }

    #[test]
    fn language_strings_are_a_distinct_literal() {
        let mut note = entity("Note");
        note.set("content", LanguageString::new("salut", "fr")).expect("accepted");
        assert_eq!(
            note.get("content").and_then(IntermediateValue::shape),
            Some(Shape::Literal(LiteralKind::LangString))
        );
    }

    #[test]
    fn canonical_type_tags() {
        let mut note = entity("Note");
        assert_eq!(note.canonical_type_tags(), ["Note"]);
        note.push_type("ex:Draft").expect("unregistered");
        assert_eq!(note.canonical_type_tags(), ["Note", "ex:Draft"]);
        note.set_type_tags(vec!["ex:Draft".into(), "Note".into()]).expect("own kind");
        assert_eq!(note.canonical_type_tags(), ["ex:Draft", "Note"]);
        note.set_type_tags(vec!["Object".into(), "Note".into()]).expect("supertype");
        assert_eq!(note.canonical_type_tags(), ["Note", "Object"]);
    }

    #[test]
    fn unrelated_registered_tags_are_rejected() {
        let mut note = entity("Note");
        note.push_type("ex:Draft").expect("unregistered");
        let err = note
            .set_type_tags(vec!["Article".into(), "Note".into()])
            .expect_err("Article is not a Note");
        assert!(matches!(
            err,
            CodecError::ConflictingTypeTag { kind: "Note", ref tag } if tag == "Article"
        ));
        assert_eq!(note.type_tags(), ["ex:Draft"]);
        assert!(note.push_type("Mention").is_err());
    }

    #[test]
    fn canonicalize_reaches_embedded_entities() {
        let mut create = entity("Create");
        create.set("object", entity("Note")).expect("accepted");
        create.canonicalize_types();
        assert_eq!(create.type_tags(), ["Create"]);
        let note = create.get("object").and_then(IntermediateValue::as_entity);
        assert_eq!(note.map(Entity::type_tags), Some(&["Note".to_owned()][..]));
        let once = create.clone();
        create.canonicalize_types();
        assert_eq!(create, once);
    }
}
