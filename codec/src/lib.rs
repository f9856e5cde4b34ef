//! Schema-driven codec between loosely typed Activity Streams documents and
//! typed entities.
//!
//! Most properties of the vocabulary accept values of several unrelated
//! shapes: an embedded entity, a bare IRI, a plain or language-tagged string,
//! a date-time. `streams-codec` decides on read which shape a raw value has,
//! using each property's ordered candidate list from `streams-vocab`, and on
//! write emits the most compact legal form. Anything it does not understand
//! is kept verbatim and written back unchanged.
//!
//! # Decoding and encoding
//!
//! ```
//! use serde_json::json;
//! use streams_codec::{Entity, IntermediateValue};
//!
//! let document = json!({
//!     "type": "Application",
//!     "name": "Bot",
//!     "nameMap": { "en": "Bot", "fr": "Robot" },
//! });
//! let entity = Entity::from_document(&document)?;
//! assert_eq!(entity.type_tags(), ["Application"]);
//! assert_eq!(entity.get("name").and_then(IntermediateValue::as_str), Some("Bot"));
//! assert_eq!(entity.language("name", "fr"), Some("Robot"));
//! assert_eq!(entity.to_document(), document);
//! # Ok::<(), streams_codec::CodecError>(())
//! ```
//!
//! # Layout
//!
//! - [`scalar`]: literal and IRI codecs.
//! - [`TypeRegistry`]: discriminator names per capability role.
//! - [`IntermediateValue`] and [`PropertyValue`]: property cells.
//! - [`Entity`]: typed properties, language maps and the unknown bag.
//! - [`Transcoder`]: the document entry points and their [`CodecConfig`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod entity;
pub mod error;
pub mod language;
mod property;
pub mod registry;
pub mod scalar;
pub mod transcoder;
pub mod unknown;
pub mod value;

pub use config::{CodecConfig, FunctionalListPolicy};
pub use entity::Entity;
pub use error::{CodecError, ScalarError};
pub use language::NaturalLanguageMap;
pub use registry::{KindSchema, TypeRegistry};
pub use scalar::{Duration, Iri, LanguageString, Literal};
pub use transcoder::{with_context, Transcoder, CONTEXT_KEY, ID_KEY, TYPE_KEY};
pub use unknown::UnknownBag;
pub use value::{IntermediateValue, PropertyValue};
