//! Activity Streams 2.0 vocabulary encoded as typed Rust data.
//!
//! The `streams-vocab` crate provides the vocabulary the codec consults,
//! 54 kinds and 72 properties across six modules, as static Rust data
//! structures, along with a serializer that describes the vocabulary itself
//! as JSON-LD.
//!
//! Every property carries its cardinality and its ordered list of candidate
//! shapes; every kind carries the capability roles it introduces. Nothing in
//! this crate interprets documents: that is the job of `streams-codec`.
//!
//! # Entry Point
//!
//! ```
//! let vocabulary = streams_vocab::Vocabulary::full();
//! assert_eq!(vocabulary.modules.len(), 6);
//! let note = vocabulary.find_kind("Note").expect("Note is a core kind");
//! assert!(vocabulary.properties_of(note).iter().any(|p| p.name == "content"));
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocabulary = streams_vocab::Vocabulary::full();
//! let json_ld = streams_vocab::serializer::jsonld::to_json_ld(vocabulary);
//! assert!(json_ld["@graph"].is_array());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use model::{Kind, LiteralKind, Module, Property, Role, Shape, Vocabulary, LANGUAGE_MAP_SUFFIX};

impl Vocabulary {
    /// Returns the standard vocabulary: the Activity Streams core and
    /// extended types plus the ActivityPub actor properties.
    ///
    /// Assembly order follows the `extends` graph:
    /// `core → activities → actors → objects → links → extensions`
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "2.0",
            base_iri: model::iris::AS,
            modules: vec![
                catalog::base::module(),
                catalog::activities::module(),
                catalog::actors::module(),
                catalog::objects::module(),
                catalog::links::module(),
                catalog::extensions::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_count() {
        assert_eq!(Vocabulary::full().modules.len(), 6);
    }

    #[test]
    fn kind_count() {
        // 8 core + 28 activities + 5 actors + 12 objects + 1 link.
        assert_eq!(Vocabulary::full().kind_count(), 54);
    }

    #[test]
    fn property_count() {
        // 48 core + 3 Question + 11 object-type + 10 extension properties.
        assert_eq!(Vocabulary::full().property_count(), 72);
    }

    #[test]
    fn all_kind_names_unique() {
        let mut names = std::collections::HashSet::new();
        for kind in Vocabulary::full().kinds() {
            assert!(names.insert(kind.name), "Duplicate kind: {}", kind.name);
        }
    }

    #[test]
    fn all_property_names_unique() {
        let mut names = std::collections::HashSet::new();
        for property in Vocabulary::full().properties() {
            assert!(
                names.insert(property.name),
                "Duplicate property: {}",
                property.name
            );
        }
    }

    #[test]
    fn every_extends_resolves() {
        let vocabulary = Vocabulary::full();
        for kind in vocabulary.kinds() {
            for parent in kind.extends {
                assert!(
                    vocabulary.find_kind(parent).is_some(),
                    "{} extends unknown kind {parent}",
                    kind.name
                );
            }
        }
    }

    #[test]
    fn every_domain_resolves() {
        let vocabulary = Vocabulary::full();
        for property in vocabulary.properties() {
            assert!(!property.domain.is_empty(), "{} has no domain", property.name);
            for kind in property.domain {
                assert!(
                    vocabulary.find_kind(kind).is_some(),
                    "{} declared on unknown kind {kind}",
                    property.name
                );
            }
        }
    }

    #[test]
    fn every_range_is_non_empty() {
        for property in Vocabulary::full().properties() {
            assert!(!property.range.is_empty(), "{} has no range", property.name);
        }
    }

    #[test]
    fn every_kind_has_a_role() {
        let vocabulary = Vocabulary::full();
        for kind in vocabulary.kinds() {
            assert!(
                !vocabulary.roles_of(kind).is_empty(),
                "{} implements no role",
                kind.name
            );
        }
    }

    #[test]
    fn ordered_collection_page_roles() {
        let vocabulary = Vocabulary::full();
        let page = vocabulary
            .find_kind("OrderedCollectionPage")
            .expect("OrderedCollectionPage exists");
        assert_eq!(
            vocabulary.roles_of(page),
            vec![
                Role::Object,
                Role::Collection,
                Role::OrderedCollection,
                Role::CollectionPage,
                Role::OrderedCollectionPage,
            ]
        );
    }

    #[test]
    fn ancestors_are_deduplicated() {
        let vocabulary = Vocabulary::full();
        let page = vocabulary
            .find_kind("OrderedCollectionPage")
            .expect("OrderedCollectionPage exists");
        let names: Vec<&str> = vocabulary.ancestors(page).iter().map(|k| k.name).collect();
        assert_eq!(
            names,
            vec![
                "OrderedCollectionPage",
                "OrderedCollection",
                "CollectionPage",
                "Collection",
                "Object",
            ]
        );
    }

    #[test]
    fn intransitive_activities_drop_object() {
        let vocabulary = Vocabulary::full();
        let question = vocabulary.find_kind("Question").expect("Question exists");
        let names: Vec<&str> = vocabulary
            .properties_of(question)
            .iter()
            .map(|p| p.name)
            .collect();
        assert!(!names.contains(&"object"));
        assert!(names.contains(&"actor"));
        assert!(names.contains(&"oneOf"));
    }

    #[test]
    fn link_does_not_inherit_object_properties() {
        let vocabulary = Vocabulary::full();
        let mention = vocabulary.find_kind("Mention").expect("Mention exists");
        let names: Vec<&str> = vocabulary
            .properties_of(mention)
            .iter()
            .map(|p| p.name)
            .collect();
        assert!(names.contains(&"href"));
        assert!(names.contains(&"name"));
        assert!(!names.contains(&"content"));
    }

    #[test]
    fn subtype_checks() {
        let vocabulary = Vocabulary::full();
        assert!(vocabulary.is_subtype("Block", "Ignore"));
        assert!(vocabulary.is_subtype("Block", "Object"));
        assert!(vocabulary.is_subtype("Note", "Note"));
        assert!(!vocabulary.is_subtype("Mention", "Object"));
        assert!(!vocabulary.is_subtype("Hashtag", "Link"));
    }

    #[test]
    fn actor_properties_stay_on_actors() {
        let vocabulary = Vocabulary::full();
        let person = vocabulary.find_kind("Person").expect("Person exists");
        let note = vocabulary.find_kind("Note").expect("Note exists");
        assert!(vocabulary.properties_of(person).iter().any(|p| p.name == "inbox"));
        assert!(!vocabulary.properties_of(note).iter().any(|p| p.name == "inbox"));
    }

    #[test]
    fn with_module_appends() {
        let extension = Module {
            name: "test",
            label: "Test",
            comment: "Test extension.",
            kinds: vec![Kind {
                id: "https://example.com/ns#Hashtag",
                name: "Hashtag",
                comment: "A hashtag link.",
                extends: &["Link"],
                roles: &[],
                excludes: &[],
            }],
            properties: vec![],
        };
        let extended = Vocabulary::full().with_module(extension);
        assert_eq!(extended.kind_count(), 55);
        assert!(extended.is_subtype("Hashtag", "Link"));
        assert_eq!(Vocabulary::full().kind_count(), 54);
    }
}
