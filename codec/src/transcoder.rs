//! Document transcoding: raw JSON maps to [`Entity`] and back.
//!
//! Decoding walks the keys of a map once. The reserved keys (`@context`,
//! `type`, `id`) are handled here, declared property keys go through the
//! property codec, `<name>Map` keys of natural-language properties become
//! language maps and everything else lands in the unknown bag.
//!
//! Encoding writes `type` first, then `id`, then each declared property in
//! vocabulary order followed by its language map, then the unknown bag.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use streams_vocab::Role;
use tracing::{debug, trace};

use crate::config::CodecConfig;
use crate::entity::Entity;
use crate::error::{json_type, CodecError};
use crate::language::NaturalLanguageMap;
use crate::property;
use crate::registry::{KindSchema, TypeRegistry};
use crate::scalar::decode_iri;

/// The discriminator key.
pub const TYPE_KEY: &str = "type";
/// The identifier key.
pub const ID_KEY: &str = "id";
/// The JSON-LD context key, dropped on decode.
pub const CONTEXT_KEY: &str = "@context";

/// Roles a root document may resolve to.
const ROOT_ROLES: [Role; 2] = [Role::Object, Role::Link];

/// Decodes documents into entities of one registry.
#[derive(Debug, Clone)]
pub struct Transcoder {
    registry: &'static TypeRegistry,
    config: CodecConfig,
}

impl Default for Transcoder {
    /// The standard registry with the default configuration.
    fn default() -> Self {
        Self::new(TypeRegistry::standard(), CodecConfig::default())
    }
}

impl Transcoder {
    /// Creates a transcoder over `registry`.
    #[must_use]
    pub fn new(registry: &'static TypeRegistry, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    /// The registry entities are resolved against.
    #[must_use]
    pub fn registry(&self) -> &'static TypeRegistry {
        self.registry
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a root document.
    ///
    /// The kind is the first of the document's `type` names registered as an
    /// Object, then as a Link. A document naming no registered kind is
    /// decoded as the configured fallback kind.
    ///
    /// # Errors
    ///
    /// Fails if the document is not a JSON object, if no kind can be picked,
    /// if a scalar is malformed, if a functional property receives several
    /// values under [`FunctionalListPolicy::Reject`](crate::FunctionalListPolicy),
    /// or if embedded entities nest deeper than the configured limit.
    pub fn decode(&self, document: &Value) -> Result<Entity, CodecError> {
        let map = as_object(document)?;
        let names = map
            .get(TYPE_KEY)
            .map(type_names)
            .transpose()?
            .unwrap_or_default();
        let schema = match self.registry.resolve(&names, &ROOT_ROLES) {
            Some((_, schema)) => schema,
            None => self.fallback(names)?,
        };
        self.decode_object(schema, map, 0)
    }

    /// Decodes a root document as kind `kind`, whatever its `type` says.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::UnknownKind`] if `kind` is not registered,
    /// otherwise as [`decode`](Self::decode).
    pub fn decode_as(&self, kind: &str, document: &Value) -> Result<Entity, CodecError> {
        let schema = self
            .registry
            .schema(kind)
            .ok_or_else(|| CodecError::UnknownKind(kind.to_owned()))?;
        self.decode_object(schema, as_object(document)?, 0)
    }

    /// Encodes an entity. Encoding is independent of the configuration and
    /// cannot fail.
    #[must_use]
    pub fn encode(&self, entity: &Entity) -> Value {
        entity.to_document()
    }

    /// Encodes an entity as a JSON object.
    #[must_use]
    pub fn encode_map(&self, entity: &Entity) -> Map<String, Value> {
        encode(entity)
    }

    fn fallback(&self, names: Vec<String>) -> Result<&'static KindSchema, CodecError> {
        let Some(kind) = &self.config.fallback_kind else {
            return Err(CodecError::UnresolvableDocument { names });
        };
        debug!(types = ?names, fallback = %kind, "no registered root kind; using the fallback");
        self.registry
            .schema(kind)
            .ok_or_else(|| CodecError::UnknownKind(kind.clone()))
    }

    pub(crate) fn decode_object(
        &self,
        schema: &'static KindSchema,
        map: &Map<String, Value>,
        depth: usize,
    ) -> Result<Entity, CodecError> {
        if depth > self.config.max_depth {
            return Err(CodecError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        let mut entity = Entity::zero(self.registry, schema);
        for (key, raw) in map {
            match key.as_str() {
                CONTEXT_KEY => trace!(kind = schema.name(), "dropping @context"),
                TYPE_KEY => entity.store_type_tags(type_names(raw)?),
                ID_KEY => match decode_iri(raw) {
                    Ok(Some(id)) => entity.set_id(Some(id)),
                    // Not a string: nothing to decode, keep it as written.
                    Ok(None) => {
                        entity.unknown_mut().insert(key.clone(), raw.clone());
                    }
                    Err(source) => {
                        return Err(CodecError::MalformedScalar {
                            property: ID_KEY.to_owned(),
                            source,
                        })
                    }
                },
                _ => {
                    if let Some(declared) = schema.property(key) {
                        let cell = property::resolve(self, declared, raw, depth)?;
                        entity.store(declared, cell);
                    } else if let Some(declared) = schema.language_property(key) {
                        match NaturalLanguageMap::from_value(raw) {
                            Some(languages) => entity.store_language_map(declared, languages),
                            None => {
                                debug!(key = %key, "language map is not a flat string map; keeping it verbatim");
                                entity.unknown_mut().insert(key.clone(), raw.clone());
                            }
                        }
                    } else {
                        entity.unknown_mut().insert(key.clone(), raw.clone());
                    }
                }
            }
        }
        Ok(entity)
    }
}

/// Reads a `type` value: a string or a list of strings.
pub(crate) fn type_names(raw: &Value) -> Result<Vec<String>, CodecError> {
    let malformed = || CodecError::MalformedTypeTag {
        found: json_type(raw),
    };
    match raw {
        Value::String(name) => Ok(vec![name.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned).ok_or_else(malformed))
            .collect(),
        _ => Err(malformed()),
    }
}

fn as_object(document: &Value) -> Result<&Map<String, Value>, CodecError> {
    document.as_object().ok_or_else(|| CodecError::NotAnObject {
        found: json_type(document),
    })
}

pub(crate) fn encode(entity: &Entity) -> Map<String, Value> {
    let mut out = Map::new();

    let mut tags = entity.canonical_type_tags();
    let tags = if tags.len() == 1 {
        Value::String(tags.remove(0))
    } else {
        Value::Array(tags.into_iter().map(Value::String).collect())
    };
    out.insert(TYPE_KEY.to_owned(), tags);

    if let Some(id) = entity.id() {
        out.insert(ID_KEY.to_owned(), Value::String(id.as_str().to_owned()));
    }

    for declared in entity.declared_properties() {
        if let Some(raw) = entity.property(declared.name).and_then(property::compact) {
            out.insert(declared.name.to_owned(), raw);
        }
        if let (Some(key), Some(languages)) =
            (declared.language_map_key(), entity.language_map(declared.name))
        {
            out.insert(key, languages.to_value());
        }
    }

    for (key, raw) in entity.unknown().iter() {
        if out.contains_key(key) {
            debug!(key = %key, "unknown entry shadowed by a written key; skipping it");
        } else {
            out.insert(key.to_owned(), raw.clone());
        }
    }
    out
}

/// Returns `document` with an `@context` entry in first position.
#[must_use]
pub fn with_context(document: Map<String, Value>, context: Value) -> Map<String, Value> {
    let mut out = Map::with_capacity(document.len() + 1);
    out.insert(CONTEXT_KEY.to_owned(), context);
    out.extend(document.into_iter().filter(|(key, _)| key != CONTEXT_KEY));
    out
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Value::deserialize(deserializer)?;
        Transcoder::default()
            .decode(&document)
            .map_err(D::Error::custom)
    }
}
