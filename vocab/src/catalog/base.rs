//! Core types: Object, Link, Activity and the collection family.
//!
//! Every other kind in the catalog extends one of these. The core module also
//! declares the bulk of the properties, since most of them are defined on
//! `Object` or `Link` and inherited from there.

use super::{COLLECTION, DATE_TIME, NON_NEGATIVE_INTEGER, OBJECT_OR_LINK, PAGE_OR_LINK, TEXT};
use crate::model::{Kind, LiteralKind, Module, Property, Role, Shape};

/// Returns the core module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "core",
        label: "Activity Streams Core Types",
        comment: "The abstract base types of the vocabulary: objects, links, \
                  activities and collections.",
        kinds: kinds(),
        properties: properties(),
    }
}

fn kinds() -> Vec<Kind> {
    vec![
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Object",
            name: "Object",
            comment: "Describes an object of any kind. The root of every \
                      non-link kind.",
            extends: &[],
            roles: &[Role::Object],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Link",
            name: "Link",
            comment: "A qualified, indirect reference to a resource identified \
                      by a URL.",
            extends: &[],
            roles: &[Role::Link],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Activity",
            name: "Activity",
            comment: "An action that has been, is being, or will be taken by an \
                      actor.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#IntransitiveActivity",
            name: "IntransitiveActivity",
            comment: "An activity that does not have an object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &["object"],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Collection",
            name: "Collection",
            comment: "An unordered set of objects or links.",
            extends: &["Object"],
            roles: &[Role::Collection],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#OrderedCollection",
            name: "OrderedCollection",
            comment: "A collection whose items are strictly ordered.",
            extends: &["Collection"],
            roles: &[Role::OrderedCollection],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#CollectionPage",
            name: "CollectionPage",
            comment: "A distinct subset of the items of a collection.",
            extends: &["Collection"],
            roles: &[Role::CollectionPage],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#OrderedCollectionPage",
            name: "OrderedCollectionPage",
            comment: "A page of an ordered collection.",
            extends: &["OrderedCollection", "CollectionPage"],
            roles: &[Role::OrderedCollectionPage],
            excludes: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        // Object
        Property {
            id: "https://www.w3.org/ns/activitystreams#attachment",
            name: "attachment",
            comment: "Resources attached or related to an object that potentially \
                      require special handling.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#attributedTo",
            name: "attributedTo",
            comment: "Entities to which this object is attributed.",
            functional: false,
            natural_language: false,
            domain: &["Object", "Link"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#audience",
            name: "audience",
            comment: "Entities considered to be the total population for which \
                      the object can be considered relevant.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bcc",
            name: "bcc",
            comment: "Private secondary audience of this object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#bto",
            name: "bto",
            comment: "Private primary audience of this object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#cc",
            name: "cc",
            comment: "Public secondary audience of this object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#content",
            name: "content",
            comment: "The content or textual representation of the object, \
                      HTML by default.",
            functional: false,
            natural_language: true,
            domain: &["Object"],
            range: TEXT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#context",
            name: "context",
            comment: "The context within which the object exists or an activity \
                      was performed.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#duration",
            name: "duration",
            comment: "The approximate duration of a time-bound object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: &[Shape::Literal(LiteralKind::Duration)],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#endTime",
            name: "endTime",
            comment: "The date and time describing the actual or expected ending \
                      time of the object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: DATE_TIME,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#generator",
            name: "generator",
            comment: "The entity that generated the object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#icon",
            name: "icon",
            comment: "An icon for the object, usually square with a 1:1 aspect \
                      ratio.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#image",
            name: "image",
            comment: "An image document of any aspect ratio.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#inReplyTo",
            name: "inReplyTo",
            comment: "Entities for which this object is considered a response.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#location",
            name: "location",
            comment: "Physical or logical locations associated with the object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#mediaType",
            name: "mediaType",
            comment: "The MIME media type of the referenced resource or content.",
            functional: true,
            natural_language: false,
            domain: &["Object", "Link"],
            range: &[Shape::Literal(LiteralKind::MimeType)],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#name",
            name: "name",
            comment: "A simple, human-readable, plain-text name.",
            functional: false,
            natural_language: true,
            domain: &["Object", "Link"],
            range: TEXT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#preview",
            name: "preview",
            comment: "Entities that provide a preview of this object.",
            functional: false,
            natural_language: false,
            domain: &["Object", "Link"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#published",
            name: "published",
            comment: "The date and time at which the object was published.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: DATE_TIME,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#replies",
            name: "replies",
            comment: "A collection of responses to this object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: COLLECTION,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#source",
            name: "source",
            comment: "The source from which the content markup was derived.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: &[Shape::Entity(Role::Object), Shape::Reference],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#startTime",
            name: "startTime",
            comment: "The date and time describing the actual or expected \
                      starting time of the object.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: DATE_TIME,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#summary",
            name: "summary",
            comment: "A natural language summarization of the object.",
            functional: false,
            natural_language: true,
            domain: &["Object"],
            range: TEXT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#tag",
            name: "tag",
            comment: "Objects or links associated with this object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#to",
            name: "to",
            comment: "Public primary audience of this object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#updated",
            name: "updated",
            comment: "The date and time at which the object was updated.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: DATE_TIME,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#url",
            name: "url",
            comment: "Links to representations of the object.",
            functional: false,
            natural_language: false,
            domain: &["Object"],
            range: &[Shape::Reference, Shape::Entity(Role::Link)],
        },
        // Link
        Property {
            id: "https://www.w3.org/ns/activitystreams#height",
            name: "height",
            comment: "A hint as to the rendering height in device-independent \
                      pixels of the linked resource.",
            functional: true,
            natural_language: false,
            domain: &["Link"],
            range: NON_NEGATIVE_INTEGER,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#href",
            name: "href",
            comment: "The target resource pointed to by a Link.",
            functional: true,
            natural_language: false,
            domain: &["Link"],
            range: &[Shape::Reference],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#hreflang",
            name: "hreflang",
            comment: "The language of the linked resource.",
            functional: true,
            natural_language: false,
            domain: &["Link"],
            range: &[Shape::Literal(LiteralKind::Bcp47)],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#rel",
            name: "rel",
            comment: "Link relation types of the link.",
            functional: false,
            natural_language: false,
            domain: &["Link"],
            range: &[Shape::Literal(LiteralKind::String)],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#width",
            name: "width",
            comment: "A hint as to the rendering width in device-independent \
                      pixels of the linked resource.",
            functional: true,
            natural_language: false,
            domain: &["Link"],
            range: NON_NEGATIVE_INTEGER,
        },
        // Activity
        Property {
            id: "https://www.w3.org/ns/activitystreams#actor",
            name: "actor",
            comment: "The entities that performed or are expected to perform the \
                      activity.",
            functional: false,
            natural_language: false,
            domain: &["Activity"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#instrument",
            name: "instrument",
            comment: "Entities used to perform the activity.",
            functional: false,
            natural_language: false,
            domain: &["Activity"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#object",
            name: "object",
            comment: "The direct object of the activity, or the subject of a \
                      relationship.",
            functional: false,
            natural_language: false,
            domain: &["Activity", "Relationship"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#origin",
            name: "origin",
            comment: "An indirect object of the activity from which it is \
                      directed.",
            functional: false,
            natural_language: false,
            domain: &["Activity"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#result",
            name: "result",
            comment: "The result of the activity.",
            functional: false,
            natural_language: false,
            domain: &["Activity"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#target",
            name: "target",
            comment: "The indirect object, or target, of the activity.",
            functional: false,
            natural_language: false,
            domain: &["Activity"],
            range: OBJECT_OR_LINK,
        },
        // Collection
        Property {
            id: "https://www.w3.org/ns/activitystreams#current",
            name: "current",
            comment: "The page containing the most recently updated member items.",
            functional: true,
            natural_language: false,
            domain: &["Collection"],
            range: PAGE_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#first",
            name: "first",
            comment: "The furthest preceding page of items in the collection.",
            functional: true,
            natural_language: false,
            domain: &["Collection"],
            range: PAGE_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#items",
            name: "items",
            comment: "The items contained in a collection.",
            functional: false,
            natural_language: false,
            domain: &["Collection"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#last",
            name: "last",
            comment: "The furthest proceeding page of the collection.",
            functional: true,
            natural_language: false,
            domain: &["Collection"],
            range: PAGE_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#totalItems",
            name: "totalItems",
            comment: "The total number of items in a logical view of the \
                      collection.",
            functional: true,
            natural_language: false,
            domain: &["Collection"],
            range: NON_NEGATIVE_INTEGER,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#orderedItems",
            name: "orderedItems",
            comment: "The items of an ordered collection, in order.",
            functional: false,
            natural_language: false,
            domain: &["OrderedCollection"],
            range: OBJECT_OR_LINK,
        },
        // CollectionPage
        Property {
            id: "https://www.w3.org/ns/activitystreams#next",
            name: "next",
            comment: "The next page of items.",
            functional: true,
            natural_language: false,
            domain: &["CollectionPage"],
            range: PAGE_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#partOf",
            name: "partOf",
            comment: "The collection of which a page is a part.",
            functional: true,
            natural_language: false,
            domain: &["CollectionPage"],
            range: &[
                Shape::Entity(Role::Link),
                Shape::Entity(Role::Collection),
                Shape::Reference,
            ],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#prev",
            name: "prev",
            comment: "The previous page of items.",
            functional: true,
            natural_language: false,
            domain: &["CollectionPage"],
            range: PAGE_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#startIndex",
            name: "startIndex",
            comment: "The relative position of the first item of this page within \
                      the ordered collection.",
            functional: true,
            natural_language: false,
            domain: &["OrderedCollectionPage"],
            range: NON_NEGATIVE_INTEGER,
        },
    ]
}
