//! The property codec: one generic read path (`resolve`) and write path
//! (`compact`), driven by a property's cardinality and candidate shapes.

use serde_json::Value;
use streams_vocab::{Property, Role, Shape};
use tracing::{debug, warn};

use crate::config::FunctionalListPolicy;
use crate::error::{CodecError, ScalarError};
use crate::scalar::{decode_iri, decode_literal};
use crate::transcoder::{type_names, Transcoder, TYPE_KEY};
use crate::value::{IntermediateValue, PropertyValue};

/// Resolves the raw value of `property` found on an entity at `depth`.
pub(crate) fn resolve(
    transcoder: &Transcoder,
    property: &'static Property,
    raw: &Value,
    depth: usize,
) -> Result<PropertyValue, CodecError> {
    if property.functional {
        let raw = match raw {
            Value::Array(items) => single(transcoder, property, items)?,
            raw => Some(raw),
        };
        let value = raw
            .map(|raw| resolve_value(transcoder, property, raw, depth))
            .transpose()?;
        return Ok(PropertyValue::Functional(value));
    }

    let values = match raw {
        Value::Array(items) => items
            .iter()
            .map(|item| resolve_value(transcoder, property, item, depth))
            .collect::<Result<_, _>>()?,
        raw => vec![resolve_value(transcoder, property, raw, depth)?],
    };
    Ok(PropertyValue::NonFunctional(values))
}

/// Applies the functional-list policy to a list given for a functional
/// property.
fn single<'a>(
    transcoder: &Transcoder,
    property: &'static Property,
    items: &'a [Value],
) -> Result<Option<&'a Value>, CodecError> {
    if items.len() > 1 {
        match transcoder.config().functional_lists {
            FunctionalListPolicy::TakeFirst => {
                warn!(
                    property = property.name,
                    count = items.len(),
                    "functional property received a list; keeping the first value"
                );
            }
            FunctionalListPolicy::Reject => {
                return Err(CodecError::CardinalityMismatch {
                    property: property.name.to_owned(),
                    count: items.len(),
                });
            }
        }
    }
    Ok(items.first())
}

fn resolve_value(
    transcoder: &Transcoder,
    property: &'static Property,
    raw: &Value,
    depth: usize,
) -> Result<IntermediateValue, CodecError> {
    match raw {
        // A list inside a list has no shape.
        Value::Array(_) => Ok(IntermediateValue::Unknown(raw.clone())),
        Value::Object(map) if map.contains_key(TYPE_KEY) => {
            resolve_embedded(transcoder, property, raw, depth)
        }
        _ => resolve_shapes(property, raw),
    }
}

/// Resolves a map carrying a discriminator against the property's entity
/// roles. Unregistered names and unreadable `type` values degrade to
/// [`IntermediateValue::Unknown`].
fn resolve_embedded(
    transcoder: &Transcoder,
    property: &'static Property,
    raw: &Value,
    depth: usize,
) -> Result<IntermediateValue, CodecError> {
    let Value::Object(map) = raw else {
        return Ok(IntermediateValue::Unknown(raw.clone()));
    };
    let names = match map.get(TYPE_KEY).map(type_names).transpose() {
        Ok(names) => names.unwrap_or_default(),
        Err(err) => {
            debug!(property = property.name, %err, "unreadable embedded type; keeping it verbatim");
            return Ok(IntermediateValue::Unknown(raw.clone()));
        }
    };
    let roles: Vec<Role> = property.entity_roles().collect();
    match transcoder.registry().resolve(&names, &roles) {
        Some((role, schema)) => {
            let entity = transcoder.decode_object(schema, map, depth + 1)?;
            Ok(IntermediateValue::Entity {
                role,
                entity: Box::new(entity),
            })
        }
        None => {
            debug!(
                property = property.name,
                types = ?names,
                "no registered kind for embedded object; keeping it verbatim"
            );
            Ok(IntermediateValue::Unknown(raw.clone()))
        }
    }
}

/// Tries the reference and literal shapes of the range in declared order.
fn resolve_shapes(property: &'static Property, raw: &Value) -> Result<IntermediateValue, CodecError> {
    let mut failure: Option<ScalarError> = None;
    for shape in property.range {
        let attempt = match shape {
            Shape::Entity(_) => continue,
            Shape::Reference => decode_iri(raw).map(|iri| iri.map(IntermediateValue::Reference)),
            Shape::Literal(kind) => {
                decode_literal(*kind, raw).map(|literal| literal.map(IntermediateValue::Literal))
            }
        };
        match attempt {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(err) => {
                failure.get_or_insert(err);
            }
        }
    }
    match failure {
        Some(source) => Err(CodecError::MalformedScalar {
            property: property.name.to_owned(),
            source,
        }),
        None => Ok(IntermediateValue::Unknown(raw.clone())),
    }
}

/// Produces the raw value of a property, or `None` when the key is omitted.
///
/// One value is written bare and two or more as a list. A lone value that is
/// itself a raw list stays wrapped so it reads back as one value.
pub(crate) fn compact(cell: &PropertyValue) -> Option<Value> {
    match cell.as_slice() {
        [] => None,
        [IntermediateValue::Unknown(raw @ Value::Array(_))] => Some(Value::Array(vec![raw.clone()])),
        [value] => Some(encode_value(value)),
        values => Some(Value::Array(values.iter().map(encode_value).collect())),
    }
}

fn encode_value(value: &IntermediateValue) -> Value {
    match value {
        IntermediateValue::Entity { entity, .. } => entity.to_document(),
        IntermediateValue::Reference(iri) => Value::String(iri.as_str().to_owned()),
        IntermediateValue::Literal(literal) => literal.to_value(),
        IntermediateValue::Unknown(raw) => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfig;
    use crate::scalar::Literal;
    use serde_json::json;
    use streams_vocab::Vocabulary;

    fn property(name: &str) -> &'static Property {
        Vocabulary::full().find_property(name).expect("declared property")
    }

    fn resolved(name: &str, raw: Value) -> PropertyValue {
        resolve(&Transcoder::default(), property(name), &raw, 0).expect("resolves")
    }

    #[test]
    fn bare_value_and_single_element_list_agree() {
        let bare = resolved("to", json!("https://example.com/a"));
        let listed = resolved("to", json!(["https://example.com/a"]));
        assert_eq!(bare, listed);
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn typed_maps_become_entities() {
        let cell = resolved("attachment", json!({ "type": "Image", "url": "https://example.com/i.png" }));
        assert!(matches!(
            cell.first(),
            Some(IntermediateValue::Entity { role: Role::Object, .. })
        ));
        let image = cell.first().and_then(IntermediateValue::as_entity);
        assert_eq!(image.map(|e| e.kind().name), Some("Image"));
    }

    #[test]
    fn unregistered_and_typeless_maps_are_unknown() {
        let custom = json!({ "type": "ex:Widget", "size": 3 });
        assert_eq!(
            resolved("attachment", custom.clone()).first(),
            Some(&IntermediateValue::Unknown(custom))
        );
        let untyped = json!({ "type": 5, "foo": 1 });
        assert_eq!(
            resolved("attachment", untyped.clone()).first(),
            Some(&IntermediateValue::Unknown(untyped))
        );
        let typeless = json!({ "foo": 1 });
        assert_eq!(
            resolved("attachment", typeless.clone()).first(),
            Some(&IntermediateValue::Unknown(typeless))
        );
    }

    #[test]
    fn first_matching_shape_wins() {
        let closed = resolved("closed", json!("2016-05-10T00:00:00Z"));
        assert!(matches!(
            closed.first(),
            Some(IntermediateValue::Literal(Literal::DateTime(_)))
        ));
        let closed = resolved("closed", json!("https://example.com/question/1"));
        assert!(matches!(closed.first(), Some(IntermediateValue::Reference(_))));
        let closed = resolved("closed", json!(true));
        assert!(matches!(
            closed.first(),
            Some(IntermediateValue::Literal(Literal::Boolean(true)))
        ));
    }

    #[test]
    fn malformed_scalars_abort() {
        let err = resolve(&Transcoder::default(), property("published"), &json!("last tuesday"), 0)
            .expect_err("malformed date-time");
        assert!(matches!(
            err,
            CodecError::MalformedScalar { ref property, source: ScalarError::InvalidDateTime { .. } }
                if property == "published"
        ));
    }

    #[test]
    fn wrong_json_types_are_unknown() {
        assert_eq!(
            resolved("published", json!(12)).first(),
            Some(&IntermediateValue::Unknown(json!(12)))
        );
    }

    #[test]
    fn functional_lists_take_the_first_value() {
        let cell = resolved("mediaType", json!(["text/html", "text/plain"]));
        assert_eq!(cell.first().and_then(IntermediateValue::as_str), Some("text/html"));
        assert_eq!(resolved("mediaType", json!([])), PropertyValue::Functional(None));
    }

    #[test]
    fn functional_lists_can_be_rejected() {
        let strict = Transcoder::new(crate::TypeRegistry::standard(), CodecConfig::strict());
        let err = resolve(&strict, property("mediaType"), &json!(["text/html", "text/plain"]), 0)
            .expect_err("two values");
        assert!(matches!(err, CodecError::CardinalityMismatch { count: 2, .. }));
        assert!(resolve(&strict, property("mediaType"), &json!(["text/html"]), 0).is_ok());
    }

    #[test]
    fn compaction() {
        assert_eq!(compact(&PropertyValue::NonFunctional(vec![])), None);
        assert_eq!(compact(&PropertyValue::Functional(None)), None);
        assert_eq!(
            compact(&PropertyValue::NonFunctional(vec!["a".into()])),
            Some(json!("a"))
        );
        assert_eq!(
            compact(&PropertyValue::NonFunctional(vec!["a".into(), "b".into()])),
            Some(json!(["a", "b"]))
        );
    }

    #[test]
    fn nested_lists_survive_compaction() {
        let cell = resolved("tag", json!([[1, 2]]));
        assert_eq!(cell.first(), Some(&IntermediateValue::Unknown(json!([1, 2]))));
        assert_eq!(compact(&cell), Some(json!([[1, 2]])));
    }

    #[test]
    fn nested_lists_survive_compaction_on_functional_properties() {
        let cell = resolved("published", json!([[1, 2]]));
        assert_eq!(cell, PropertyValue::Functional(Some(IntermediateValue::Unknown(json!([1, 2])))));
        let written = compact(&cell).expect("one value");
        assert_eq!(written, json!([[1, 2]]));
        assert_eq!(resolved("published", written), cell);
    }
}
