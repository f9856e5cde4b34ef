//! Serializers for the vocabulary description.
//!
//! - **JSON-LD** ([`jsonld`]): an OWL-flavoured `@graph` describing every
//!   kind and property, written by `streams-vocab --out`.

pub mod jsonld;
