//! Actor types.
//!
//! Actors are ordinary objects as far as the codec is concerned; what sets
//! them apart are the ActivityPub properties declared in
//! [`extensions`](super::extensions).

use crate::model::{Kind, Module};

/// Returns the actors module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "actors",
        label: "Activity Streams Actor Types",
        comment: "Kinds of entities that can perform activities.",
        kinds: kinds(),
        properties: vec![],
    }
}

fn kinds() -> Vec<Kind> {
    vec![
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Application",
            name: "Application",
            comment: "Describes a software application.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Group",
            name: "Group",
            comment: "Represents a formal or informal collective of actors.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Organization",
            name: "Organization",
            comment: "Represents an organization.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Person",
            name: "Person",
            comment: "Represents an individual person.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Service",
            name: "Service",
            comment: "Represents a service of any kind.",
            extends: &["Object"],
            roles: &[],
            excludes: &[],
        },
    ]
}
