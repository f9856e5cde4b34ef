//! Object types: documents, places, relationships and tombstones.

use super::{DATE_TIME, FLOAT, OBJECT_OR_LINK};
use crate::model::{Kind, LiteralKind, Module, Property, Role, Shape};

/// Returns the objects module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "objects",
        label: "Activity Streams Object Types",
        comment: "Extended object types for content, locations and \
                  relationships.",
        kinds: kinds(),
        properties: properties(),
    }
}

fn kinds() -> Vec<Kind> {
    vec![
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Article",
            name: "Article",
            comment: "Any kind of multi-paragraph written work.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Audio",
            name: "Audio",
            comment: "Represents an audio document of any kind.",
            extends: &["Document"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Document",
            name: "Document",
            comment: "Represents a document of any kind.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Event",
            name: "Event",
            comment: "Represents any kind of event.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Image",
            name: "Image",
            comment: "An image document of any kind.",
            extends: &["Document"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Note",
            name: "Note",
            comment: "Represents a short written work typically less than a single \
                      paragraph in length.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Page",
            name: "Page",
            comment: "Represents a Web Page.",
            extends: &["Document"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Place",
            name: "Place",
            comment: "Represents a logical or physical location.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Profile",
            name: "Profile",
            comment: "A Profile is a content object that describes another Object, \
                      typically used to describe actor objects.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Relationship",
            name: "Relationship",
            comment: "Describes a relationship between two individuals. The \
                      subject and object properties identify the connected \
                      individuals.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Tombstone",
            name: "Tombstone",
            comment: "A Tombstone represents a content object that has been \
                      deleted.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Video",
            name: "Video",
            comment: "Represents a video document of any kind.",
            extends: &["Document"],
            roles: &[],
            excludes: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        // Place
        Property {
            id: "https://www.w3.org/ns/activitystreams#accuracy",
            name: "accuracy",
            comment: "The accuracy of position coordinates on a Place, as a \
                      percentage.",
            functional: true,
            natural_language: false,
            domain: &["Place"],
            range: FLOAT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#altitude",
            name: "altitude",
            comment: "The altitude of a place, in `units`.",
            functional: true,
            natural_language: false,
            domain: &["Object"],
            range: FLOAT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#latitude",
            name: "latitude",
            comment: "The latitude of a place.",
            functional: true,
            natural_language: false,
            domain: &["Place"],
            range: FLOAT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#longitude",
            name: "longitude",
            comment: "The longitude of a place.",
            functional: true,
            natural_language: false,
            domain: &["Place"],
            range: FLOAT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#radius",
            name: "radius",
            comment: "The radius from the given latitude and longitude for a \
                      Place, in `units`.",
            functional: true,
            natural_language: false,
            domain: &["Place"],
            range: FLOAT,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#units",
            name: "units",
            comment: "Measurement units for the radius and altitude properties.",
            functional: true,
            natural_language: false,
            domain: &["Place"],
            range: &[Shape::Literal(LiteralKind::String)],
        },
        // Relationship
        Property {
            id: "https://www.w3.org/ns/activitystreams#relationship",
            name: "relationship",
            comment: "The kind of relationship that exists between subject and \
                      object.",
            functional: false,
            natural_language: false,
            domain: &["Relationship"],
            range: &[Shape::Entity(Role::Object), Shape::Reference],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#subject",
            name: "subject",
            comment: "The subject of a relationship.",
            functional: true,
            natural_language: false,
            domain: &["Relationship"],
            range: OBJECT_OR_LINK,
        },
        // Profile
        Property {
            id: "https://www.w3.org/ns/activitystreams#describes",
            name: "describes",
            comment: "The object described by a Profile.",
            functional: true,
            natural_language: false,
            domain: &["Profile"],
            range: &[Shape::Entity(Role::Object), Shape::Reference],
        },
        // Tombstone
        Property {
            id: "https://www.w3.org/ns/activitystreams#deleted",
            name: "deleted",
            comment: "The date and time the object was deleted.",
            functional: true,
            natural_language: false,
            domain: &["Tombstone"],
            range: DATE_TIME,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#formerType",
            name: "formerType",
            comment: "The type of the object that was deleted.",
            functional: false,
            natural_language: false,
            domain: &["Tombstone"],
            range: &[Shape::Literal(LiteralKind::String), Shape::Entity(Role::Object)],
        },
    ]
}
