//! Activity Streams catalog modules.
//!
//! Each sub-module encodes one slice of the vocabulary as Rust static data.
//! Modules are listed in dependency order; see [`crate::Vocabulary::full`] for
//! the assembly sequence.

use crate::model::{LiteralKind, Role, Shape};

pub mod activities;
pub mod actors;
pub mod base;
pub mod extensions;
pub mod links;
pub mod objects;

/// Object, then Link, then a bare IRI. The range of most relationship
/// properties.
pub(crate) const OBJECT_OR_LINK: &[Shape] = &[
    Shape::Entity(Role::Object),
    Shape::Entity(Role::Link),
    Shape::Reference,
];

/// A collection page, a Link pointing at one, or a bare IRI.
pub(crate) const PAGE_OR_LINK: &[Shape] = &[
    Shape::Entity(Role::CollectionPage),
    Shape::Entity(Role::Link),
    Shape::Reference,
];

/// An embedded collection or a bare IRI.
pub(crate) const COLLECTION: &[Shape] = &[Shape::Entity(Role::Collection), Shape::Reference];

/// An embedded ordered collection or a bare IRI.
pub(crate) const ORDERED_COLLECTION: &[Shape] = &[
    Shape::Entity(Role::OrderedCollection),
    Shape::Reference,
];

/// Plain string first, so bare strings always decode as `xsd:string`.
pub(crate) const TEXT: &[Shape] = &[
    Shape::Literal(LiteralKind::String),
    Shape::Literal(LiteralKind::LangString),
];

pub(crate) const DATE_TIME: &[Shape] = &[Shape::Literal(LiteralKind::DateTime)];

pub(crate) const FLOAT: &[Shape] = &[Shape::Literal(LiteralKind::Float)];

pub(crate) const NON_NEGATIVE_INTEGER: &[Shape] =
    &[Shape::Literal(LiteralKind::NonNegativeInteger)];

/// The kinds ActivityPub treats as actors.
pub(crate) const ACTORS: &[&str] = &["Application", "Group", "Organization", "Person", "Service"];
