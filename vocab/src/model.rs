//! Core vocabulary model types.
//!
//! These types describe the Activity Streams vocabulary as typed Rust data.
//! Kinds and properties are plain `'static` records grouped into modules; the
//! top-level entry point is [`Vocabulary::full()`](crate::Vocabulary::full).

/// A capability role: an interface family a kind may implement.
///
/// Roles decide which kinds are eligible when an embedded object is resolved
/// for a property. A kind implements the roles it declares plus every role of
/// the kinds it extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Behaves as a generic Object.
    Object,
    /// Behaves as a Link.
    Link,
    /// Behaves as a Collection.
    Collection,
    /// Behaves as an OrderedCollection.
    OrderedCollection,
    /// Behaves as a CollectionPage.
    CollectionPage,
    /// Behaves as an OrderedCollectionPage.
    OrderedCollectionPage,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Object,
        Role::Link,
        Role::Collection,
        Role::OrderedCollection,
        Role::CollectionPage,
        Role::OrderedCollectionPage,
    ];

    /// Returns the role's display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Object => "Object",
            Role::Link => "Link",
            Role::Collection => "Collection",
            Role::OrderedCollection => "OrderedCollection",
            Role::CollectionPage => "CollectionPage",
            Role::OrderedCollectionPage => "OrderedCollectionPage",
        }
    }
}

/// The literal (scalar) kinds a property may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `xsd:string`.
    String,
    /// `rdf:langString`, carried as a JSON-LD value object.
    LangString,
    /// `xsd:dateTime` as RFC 3339.
    DateTime,
    /// `xsd:duration` as an ISO 8601 duration.
    Duration,
    /// `xsd:float`.
    Float,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:boolean`.
    Boolean,
    /// A MIME media type string.
    MimeType,
    /// A BCP 47 language tag.
    Bcp47,
}

impl LiteralKind {
    /// Returns the compact IRI of the datatype this literal kind encodes.
    #[must_use]
    pub fn datatype(self) -> &'static str {
        match self {
            LiteralKind::String => "xsd:string",
            LiteralKind::LangString => "rdf:langString",
            LiteralKind::DateTime => "xsd:dateTime",
            LiteralKind::Duration => "xsd:duration",
            LiteralKind::Float => "xsd:float",
            LiteralKind::NonNegativeInteger => "xsd:nonNegativeInteger",
            LiteralKind::Boolean => "xsd:boolean",
            LiteralKind::MimeType => "rfc:mimeType",
            LiteralKind::Bcp47 => "rfc:bcp47",
        }
    }
}

/// One candidate shape a property value may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An embedded, typed sub-entity implementing the given role.
    Entity(Role),
    /// A bare IRI reference to another entity.
    Reference,
    /// A scalar literal.
    Literal(LiteralKind),
}

/// A vocabulary kind (a concrete type such as `Note` or `Follow`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    /// Full IRI (e.g., `"https://www.w3.org/ns/activitystreams#Note"`).
    pub id: &'static str,
    /// The discriminator name used under the `type` key (e.g., `"Note"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Names of the kinds this kind extends.
    pub extends: &'static [&'static str],
    /// Roles this kind introduces; inherited roles are not repeated.
    pub roles: &'static [Role],
    /// Names of inherited properties this kind does not carry
    /// (`IntransitiveActivity` drops `object`).
    pub excludes: &'static [&'static str],
}

/// A vocabulary property definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Document key (e.g., `"attachment"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Whether the property carries a `<name>Map` natural-language companion.
    pub natural_language: bool,
    /// Names of the kinds declaring this property; subtypes inherit it.
    pub domain: &'static [&'static str],
    /// Candidate shapes in resolution priority order.
    pub range: &'static [Shape],
}

impl Property {
    /// Returns the embedded-entity roles of the range, in priority order.
    pub fn entity_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.range.iter().filter_map(|shape| match shape {
            Shape::Entity(role) => Some(*role),
            _ => None,
        })
    }

    /// Returns true if the range accepts the given shape.
    #[must_use]
    pub fn accepts(&self, shape: Shape) -> bool {
        self.range.contains(&shape)
    }

    /// Returns the document key of the natural-language companion, if any.
    #[must_use]
    pub fn language_map_key(&self) -> Option<String> {
        self.natural_language
            .then(|| format!("{}{}", self.name, LANGUAGE_MAP_SUFFIX))
    }
}

/// Suffix appended to a property name to form its natural-language map key.
pub const LANGUAGE_MAP_SUFFIX: &str = "Map";

/// A group of related kinds and properties (core types, activities, ...).
#[derive(Debug, Clone)]
pub struct Module {
    /// Short module name (e.g., `"core"`).
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the module.
    pub comment: &'static str,
    /// Kinds declared in this module.
    pub kinds: Vec<Kind>,
    /// Properties declared in this module.
    pub properties: Vec<Property>,
}

/// A complete vocabulary: every module in dependency order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Vocabulary version.
    pub version: &'static str,
    /// Base IRI of the vocabulary.
    pub base_iri: &'static str,
    /// All modules in dependency order.
    pub modules: Vec<Module>,
}

impl Vocabulary {
    /// Iterates over every kind in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = &Kind> {
        self.modules.iter().flat_map(|m| m.kinds.iter())
    }

    /// Iterates over every property in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.modules.iter().flat_map(|m| m.properties.iter())
    }

    /// Looks up a kind by its discriminator name. Returns `None` if not found.
    #[must_use]
    pub fn find_kind(&self, name: &str) -> Option<&Kind> {
        self.kinds().find(|k| k.name == name)
    }

    /// Looks up a property by its document key. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties().find(|p| p.name == name)
    }

    /// Returns the total number of kinds across all modules.
    #[must_use]
    pub fn kind_count(&self) -> usize {
        self.modules.iter().map(|m| m.kinds.len()).sum()
    }

    /// Returns the total number of properties across all modules.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.modules.iter().map(|m| m.properties.len()).sum()
    }

    /// Returns `kind` followed by all of its ancestors, breadth first.
    ///
    /// Each ancestor appears once even when reachable along several paths
    /// (`OrderedCollectionPage` reaches `Collection` twice). Unknown names in
    /// `extends` are skipped.
    #[must_use]
    pub fn ancestors<'a>(&'a self, kind: &'a Kind) -> Vec<&'a Kind> {
        let mut seen: Vec<&Kind> = vec![kind];
        let mut cursor = 0;
        while cursor < seen.len() {
            let current = seen[cursor];
            for parent in current.extends {
                if let Some(parent) = self.find_kind(parent) {
                    if !seen.iter().any(|k| k.name == parent.name) {
                        seen.push(parent);
                    }
                }
            }
            cursor += 1;
        }
        seen
    }

    /// Returns true if `kind` is `ancestor` or extends it transitively.
    #[must_use]
    pub fn is_subtype(&self, kind: &str, ancestor: &str) -> bool {
        self.find_kind(kind).is_some_and(|k| {
            self.ancestors(k)
                .iter()
                .any(|candidate| candidate.name == ancestor)
        })
    }

    /// Returns every role `kind` implements, including inherited ones, in
    /// [`Role`] declaration order.
    #[must_use]
    pub fn roles_of(&self, kind: &Kind) -> Vec<Role> {
        let ancestors = self.ancestors(kind);
        Role::ALL
            .into_iter()
            .filter(|role| ancestors.iter().any(|k| k.roles.contains(role)))
            .collect()
    }

    /// Returns every property declared on `kind` or one of its ancestors, in
    /// vocabulary declaration order, minus those excluded along the way.
    #[must_use]
    pub fn properties_of(&self, kind: &Kind) -> Vec<&Property> {
        let ancestors = self.ancestors(kind);
        self.properties()
            .filter(|p| {
                p.domain
                    .iter()
                    .any(|d| ancestors.iter().any(|k| k.name == *d))
            })
            .filter(|p| !ancestors.iter().any(|k| k.excludes.contains(&p.name)))
            .collect()
    }

    /// Returns a copy of this vocabulary with `module` appended.
    ///
    /// Used to register extension kinds and properties alongside the standard
    /// catalog.
    #[must_use]
    pub fn with_module(&self, module: Module) -> Vocabulary {
        let mut extended = self.clone();
        extended.modules.push(module);
        extended
    }
}

/// Standard IRI constants used across the catalog modules.
pub mod iris {
    /// Activity Streams namespace.
    pub const AS: &str = "https://www.w3.org/ns/activitystreams#";
    /// Linked Data Platform namespace (ActivityPub inbox).
    pub const LDP: &str = "http://www.w3.org/ns/ldp#";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// The JSON-LD context document for Activity Streams.
    pub const AS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";
}
