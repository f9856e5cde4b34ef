//! Activity types, the verbs of the vocabulary.
//!
//! Every activity extends `Activity` or `IntransitiveActivity` and introduces
//! no roles of its own. `Question` is the only activity with extra properties.

use super::OBJECT_OR_LINK;
use crate::model::{Kind, LiteralKind, Module, Property, Role, Shape};

/// Returns the activities module.
#[must_use]
pub fn module() -> Module {
    Module {
        name: "activities",
        label: "Activity Streams Activity Types",
        comment: "Extended activity types describing what an actor did, is \
                  doing, or will do.",
        kinds: kinds(),
        properties: properties(),
    }
}

fn kinds() -> Vec<Kind> {
    vec![
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Accept",
            name: "Accept",
            comment: "The actor accepts the object. The target property can be \
                      used to indicate the context into which the object has been \
                      accepted.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Add",
            name: "Add",
            comment: "The actor has added the object to the target.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Announce",
            name: "Announce",
            comment: "The actor is calling the target's attention to the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Arrive",
            name: "Arrive",
            comment: "An actor has arrived at the location. The origin can be used \
                      to identify the context from which the actor originated.",
            extends: &["IntransitiveActivity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Block",
            name: "Block",
            comment: "The actor is blocking the object. Blocking is a stronger \
                      form of Ignore.",
            extends: &["Ignore"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Create",
            name: "Create",
            comment: "The actor has created the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Delete",
            name: "Delete",
            comment: "The actor has deleted the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Dislike",
            name: "Dislike",
            comment: "The actor dislikes the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Flag",
            name: "Flag",
            comment: "The actor is flagging the object, typically as \
                      inappropriate.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Follow",
            name: "Follow",
            comment: "The actor is following the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Ignore",
            name: "Ignore",
            comment: "The actor is ignoring the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Invite",
            name: "Invite",
            comment: "A specialization of Offer in which the actor is extending an \
                      invitation for the object to the target.",
            extends: &["Offer"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Join",
            name: "Join",
            comment: "The actor has joined the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Leave",
            name: "Leave",
            comment: "The actor has left the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Like",
            name: "Like",
            comment: "The actor likes, recommends or endorses the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Listen",
            name: "Listen",
            comment: "The actor has listened to the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Move",
            name: "Move",
            comment: "The actor has moved object from origin to target.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Offer",
            name: "Offer",
            comment: "The actor is offering the object, optionally to the target.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Question",
            name: "Question",
            comment: "A question being asked. Options are given by oneOf \
                      (exclusive) or anyOf (inclusive).",
            extends: &["IntransitiveActivity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Reject",
            name: "Reject",
            comment: "The actor is rejecting the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Read",
            name: "Read",
            comment: "The actor has read the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Remove",
            name: "Remove",
            comment: "The actor is removing the object, optionally from the \
                      origin.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#TentativeAccept",
            name: "TentativeAccept",
            comment: "A specialization of Accept indicating that the acceptance is \
                      tentative.",
            extends: &["Accept"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#TentativeReject",
            name: "TentativeReject",
            comment: "A specialization of Reject in which the rejection is \
                      considered tentative.",
            extends: &["Reject"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Travel",
            name: "Travel",
            comment: "The actor is traveling to the target from the origin.",
            extends: &["IntransitiveActivity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Undo",
            name: "Undo",
            comment: "The actor is undoing the object, usually a previous \
                      activity.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#Update",
            name: "Update",
            comment: "The actor has updated the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
        Kind {
            id: "https://www.w3.org/ns/activitystreams#View",
            name: "View",
            comment: "The actor has viewed the object.",
            extends: &["Activity"],
            roles: &[],
            excludes: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://www.w3.org/ns/activitystreams#anyOf",
            name: "anyOf",
            comment: "An inclusive option for a Question.",
            functional: false,
            natural_language: false,
            domain: &["Question"],
            range: OBJECT_OR_LINK,
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#closed",
            name: "closed",
            comment: "Indicates that a question has been closed, and answers are \
                      no longer accepted.",
            functional: false,
            natural_language: false,
            domain: &["Question"],
            range: &[
                Shape::Entity(Role::Object),
                Shape::Entity(Role::Link),
                Shape::Literal(LiteralKind::DateTime),
                Shape::Literal(LiteralKind::Boolean),
                Shape::Reference,
            ],
        },
        Property {
            id: "https://www.w3.org/ns/activitystreams#oneOf",
            name: "oneOf",
            comment: "An exclusive option for a Question.",
            functional: false,
            natural_language: false,
            domain: &["Question"],
            range: OBJECT_OR_LINK,
        },
    ]
}
