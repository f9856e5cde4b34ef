//! ActivityPub actor properties and the `sensitive` flag.
//!
//! These are not part of the Activity Streams core vocabulary but appear in
//! practically every document exchanged between servers, so the standard
//! catalog carries them. They introduce no kinds.

use super::{ACTORS, COLLECTION, ORDERED_COLLECTION};
use crate::model::{LiteralKind, Module, Property, Shape};

/// Returns the extensions module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "extensions",
        label: "ActivityPub and Common Extensions",
        comment: "Actor endpoints from ActivityPub plus widely deployed \
                  extension properties.",
        kinds: vec![],
        properties: properties(),
    }
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "http://www.w3.org/ns/ldp#inbox",
            name: "inbox",
            comment: "An OrderedCollection comprised of all the messages \
                      received by the actor.",
            functional: true,
            natural_language: false,
            domain: ACTORS,
            range: ORDERED_COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#outbox",
            name: "outbox",
            comment: "An OrderedCollection comprised of all the messages \
                      produced by the actor.",
            functional: true,
            natural_language: false,
            domain: ACTORS,
            range: ORDERED_COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#following",
            name: "following",
            comment: "A collection of the actors this actor is following.",
            functional: true,
            natural_language: false,
            domain: ACTORS,
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#followers",
            name: "followers",
            comment: "A collection of the actors that follow this actor.",
            functional: true,
            natural_language: false,
            domain: ACTORS,
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#liked",
            name: "liked",
            comment: "A collection of every object this actor has liked.",
            functional: true,
            natural_language: false,
            domain: ACTORS,
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#streams",
            name: "streams",
            comment: "Supplementary collections which may be of interest.",
            functional: false,
            natural_language: false,
            domain: ACTORS,
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preferredUsername",
            name: "preferredUsername",
            comment: "A short username which may be used to refer to the actor, \
                      with no uniqueness guarantees.",
            functional: true,
            natural_language: true,
            domain: ACTORS,
            range: super::TEXT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#likes",
            name: "likes",
            comment: "A collection of Like activities with this object as the \
                      object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#shares",
            name: "shares",
            comment: "A collection of Announce activities with this object as \
                      the object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#sensitive",
            name: "sensitive",
            comment: "Marks the object as containing content that should be \
                      hidden behind a warning by default.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: &[Shape::Literal(LiteralKind::Boolean)],
        },
    ]
}
