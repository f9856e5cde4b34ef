//! Link types.

use crate::model::{Kind, Module};

/// Returns the links module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "links",
        label: "Activity Streams Link Types",
        comment: "Extended link types.",
        kinds: vec![Kind {
            id: "https://www.w3.org/ns/activitystreams#Mention",
            name: "Mention",
            comment: "A specialized Link that represents an @mention.",
            extends: &["Link"],
            roles: &[],
            excludes: &[],
        }],
        properties: vec![],
    }
}
