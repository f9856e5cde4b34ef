//! Document-level behavior of the standard transcoder.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use streams_codec::{
    CodecConfig, CodecError, Entity, IntermediateValue, Literal, ScalarError, Transcoder,
    TypeRegistry,
};
use streams_vocab::Role;

fn decode(document: Value) -> Entity {
    Entity::from_document(&document).expect("document decodes")
}

fn round_trip(document: Value) -> Value {
    decode(document).to_document()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn language_maps_travel_beside_plain_values() {
    let document = json!({
        "type": "Application",
        "name": "Bot",
        "nameMap": { "en": "Bot", "fr": "Robot" },
    });
    let entity = decode(document.clone());

    assert_eq!(entity.type_tags(), ["Application"]);
    assert_eq!(entity.values("name").len(), 1);
    assert!(matches!(
        entity.get("name"),
        Some(IntermediateValue::Literal(Literal::String(name))) if name == "Bot"
    ));
    assert_eq!(entity.language("name", "en"), Some("Bot"));
    assert_eq!(entity.language("name", "fr"), Some("Robot"));

    assert_eq!(entity.to_document(), document);
}

#[test]
fn embedded_note_compacts_to_a_bare_map() {
    let entity = decode(json!({ "attachment": { "type": "Note", "content": "hi" } }));

    let attachments = entity.values("attachment");
    assert_eq!(attachments.len(), 1);
    let note = attachments[0].as_entity().expect("sub-entity");
    assert_eq!(note.kind().name, "Note");
    assert_eq!(note.get("content").and_then(IntermediateValue::as_str), Some("hi"));

    assert_eq!(
        entity.to_document(),
        json!({
            "type": "Object",
            "attachment": { "type": "Note", "content": "hi" },
        })
    );
}

#[test]
fn bare_strings_resolve_as_references() {
    let entity = decode(json!({ "to": "https://example.com/actor" }));
    let target = entity.get("to").and_then(IntermediateValue::as_reference);
    assert_eq!(target.map(|iri| iri.as_str()), Some("https://example.com/actor"));
    assert_eq!(entity.to_document()["to"], json!("https://example.com/actor"));
}

#[test]
fn undeclared_keys_pass_through() {
    let entity = decode(json!({ "customField": { "foo": 1 } }));
    assert_eq!(entity.unknown().get("customField"), Some(&json!({ "foo": 1 })));
    assert_eq!(entity.to_document()["customField"], json!({ "foo": 1 }));
}

// =============================================================================
// Resolution rules
// =============================================================================

#[test]
fn declared_role_priority_beats_type_list_order() {
    let entity = decode(json!({
        "type": "Note",
        "attachment": { "type": ["Link", "Object"], "href": "https://example.com/x" },
    }));
    let attachment = entity.get("attachment");
    assert!(matches!(
        attachment,
        Some(IntermediateValue::Entity { role: Role::Object, .. })
    ));
    let object = attachment.and_then(IntermediateValue::as_entity).expect("entity");
    assert_eq!(object.kind().name, "Object");
    // `href` is not an Object property, so it stays in the bag.
    assert_eq!(object.unknown().get("href"), Some(&json!("https://example.com/x")));
}

#[test]
fn link_role_is_tried_when_no_object_name_matches() {
    let entity = decode(json!({
        "type": "Note",
        "tag": [
            { "type": "Mention", "href": "https://example.com/@alice" },
            { "type": "ex:Hashtag", "name": "#rust" },
        ],
    }));
    let tags = entity.values("tag");
    assert!(matches!(tags[0], IntermediateValue::Entity { role: Role::Link, .. }));
    assert!(tags[1].is_unknown());
}

#[test]
fn unknown_payloads_are_written_back_structurally_identical() {
    let document = json!({
        "type": "Create",
        "actor": "https://example.com/alice",
        "object": [
            { "kind": "typeless", "nested": [1, 2, { "deep": null }] },
            { "type": "ex:Future", "payload": { "a": [true] } },
        ],
        "ex:score": 4.5,
        "ex:labels": ["a", "b"],
    });
    assert_eq!(round_trip(document.clone()), document);
}

#[test]
fn embedded_maps_with_unreadable_types_pass_through() {
    let document = json!({
        "type": "Note",
        "attachment": { "type": 5, "foo": 1 },
        "tag": [{ "type": ["Mention", 7] }],
    });
    let entity = decode(document.clone());
    assert!(entity.get("attachment").is_some_and(IntermediateValue::is_unknown));
    assert!(entity.get("tag").is_some_and(IntermediateValue::is_unknown));
    assert_eq!(entity.to_document(), document);
}

#[test]
fn language_maps_that_are_not_flat_pass_through() {
    let document = json!({
        "type": "Note",
        "content": "a",
        "contentMap": { "en": ["a", "b"] },
        "nameMap": { "en": 1 },
    });
    let entity = decode(document.clone());
    assert!(entity.language_map("content").is_none());
    assert_eq!(entity.unknown().get("contentMap"), Some(&json!({ "en": ["a", "b"] })));
    assert_eq!(entity.to_document(), document);
}

#[test]
fn multiple_values_keep_their_order() {
    let document = json!({
        "type": "Note",
        "to": [
            "https://example.com/c",
            "https://example.com/a",
            { "type": "Person", "name": "Bea" },
            "https://example.com/b",
        ],
    });
    assert_eq!(round_trip(document.clone()), document);
}

#[test]
fn single_element_lists_compact() {
    let entity = decode(json!({ "type": "Note", "cc": ["https://example.com/a"] }));
    assert_eq!(entity.to_document()["cc"], json!("https://example.com/a"));
}

#[test]
fn language_strings_are_value_objects() {
    let document = json!({
        "type": "Note",
        "content": [
            "plain",
            { "@value": "bonjour", "@language": "fr" },
        ],
    });
    let entity = decode(document.clone());
    assert!(matches!(
        entity.values("content")[1],
        IntermediateValue::Literal(Literal::LangString(ref s)) if s.language.as_deref() == Some("fr")
    ));
    assert_eq!(entity.to_document(), document);
}

#[test]
fn scalars_in_their_wire_formats() {
    let document = json!({
        "type": "Video",
        "duration": "PT2H30M",
        "published": "2015-02-10T15:04:55Z",
        "mediaType": "video/mp4",
        "sensitive": true,
    });
    let entity = decode(document.clone());
    assert!(matches!(
        entity.get("duration"),
        Some(IntermediateValue::Literal(Literal::Duration(d))) if d.hours == 2 && d.minutes == 30
    ));
    assert_eq!(entity.to_document(), document);
}

#[test]
fn numeric_booleans_are_written_as_booleans() {
    let entity = decode(json!({ "type": "Note", "sensitive": 1 }));
    assert_eq!(entity.to_document()["sensitive"], json!(true));
}

#[test]
fn collections_resolve_pages_and_counts() {
    let document = json!({
        "type": "OrderedCollection",
        "id": "https://example.com/outbox",
        "totalItems": 2,
        "first": {
            "type": "OrderedCollectionPage",
            "partOf": "https://example.com/outbox",
            "orderedItems": ["https://example.com/1", "https://example.com/2"],
        },
    });
    let entity = decode(document.clone());
    assert!(matches!(
        entity.get("first"),
        Some(IntermediateValue::Entity { role: Role::CollectionPage, .. })
    ));
    assert!(matches!(
        entity.get("totalItems"),
        Some(IntermediateValue::Literal(Literal::NonNegativeInteger(2)))
    ));
    assert_eq!(entity.to_document(), document);
}

#[test]
fn empty_language_maps_are_omitted() {
    let entity = decode(json!({ "type": "Note", "summary": "s", "summaryMap": {} }));
    assert!(entity.language_map("summary").is_none());
    assert_eq!(entity.to_document(), json!({ "type": "Note", "summary": "s" }));
}

#[test]
fn canonical_type_is_injected_once() {
    let document = json!({ "type": ["ex:Draft"], "content": "x" });
    let encoded = Transcoder::default()
        .decode_as("Note", &document)
        .expect("note")
        .to_document();
    assert_eq!(encoded["type"], json!(["Note", "ex:Draft"]));

    let again = decode(encoded.clone()).to_document();
    assert_eq!(again, encoded);
}

#[test]
fn written_tags_read_back_as_the_same_kind() {
    let person = Transcoder::default()
        .decode_as("Person", &json!({ "type": ["Note", "ex:Bot"] }))
        .expect("person");
    let encoded = person.to_document();
    assert_eq!(encoded["type"], json!(["Person", "Note", "ex:Bot"]));
    assert_eq!(decode(encoded).kind().name, "Person");

    let mut note = Entity::new("Note").expect("registered");
    note.set_type_tags(vec!["ex:Draft".into(), "Object".into(), "Note".into()])
        .expect("related tags");
    let encoded = note.to_document();
    assert_eq!(encoded["type"], json!(["Note", "ex:Draft", "Object"]));
    assert_eq!(decode(encoded).kind().name, "Note");
    assert!(matches!(
        note.push_type("Article"),
        Err(CodecError::ConflictingTypeTag { kind: "Note", .. })
    ));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_date_time_aborts_the_whole_decode() {
    let err = Entity::from_document(&json!({
        "type": "Create",
        "object": { "type": "Note", "published": "2015-02-30T99:00:00Z" },
    }))
    .expect_err("malformed nested date-time");
    assert!(matches!(
        err,
        CodecError::MalformedScalar { ref property, source: ScalarError::InvalidDateTime { .. } }
            if property == "published"
    ));
}

#[test]
fn malformed_booleans_and_durations() {
    assert!(matches!(
        Entity::from_document(&json!({ "type": "Note", "sensitive": 2 })),
        Err(CodecError::MalformedScalar { source: ScalarError::InvalidBoolean(_), .. })
    ));
    assert!(matches!(
        Entity::from_document(&json!({ "type": "Note", "duration": "two hours" })),
        Err(CodecError::MalformedScalar { source: ScalarError::InvalidDuration { .. }, .. })
    ));
}

#[test]
fn malformed_root_type_tags() {
    assert!(matches!(
        Entity::from_document(&json!({ "type": { "name": "Note" } })),
        Err(CodecError::MalformedTypeTag { found: "object" })
    ));
}

#[test]
fn nesting_is_bounded() {
    let mut document = json!({ "type": "Note", "content": "leaf" });
    for _ in 0..4 {
        document = json!({ "type": "Note", "inReplyTo": document });
    }

    let shallow = Transcoder::new(
        TypeRegistry::standard(),
        CodecConfig {
            max_depth: 3,
            ..CodecConfig::default()
        },
    );
    assert!(matches!(
        shallow.decode(&document),
        Err(CodecError::DepthExceeded { limit: 3 })
    ));

    let deep_enough = Transcoder::new(
        TypeRegistry::standard(),
        CodecConfig {
            max_depth: 4,
            ..CodecConfig::default()
        },
    );
    assert!(deep_enough.decode(&document).is_ok());
}

#[test]
fn functional_list_policies() {
    let document = json!({ "type": "Note", "published": ["2015-02-10T15:04:55Z", "2016-01-01T00:00:00Z"] });

    let lenient = Entity::from_document(&document).expect("first value kept");
    assert_eq!(
        lenient.to_document()["published"],
        json!("2015-02-10T15:04:55Z")
    );

    let strict = Transcoder::new(TypeRegistry::standard(), CodecConfig::strict());
    assert!(matches!(
        strict.decode(&document),
        Err(CodecError::CardinalityMismatch { ref property, count: 2 }) if property == "published"
    ));
}
