//! The type registry: discriminator name to zero-value entity, per
//! capability role.
//!
//! The registry is built once from a [`Vocabulary`]. For every kind it keeps
//! a [`KindSchema`] (implemented roles, declared properties in order, and the
//! `<name>Map` companion keys), and for every role the set of kind names
//! registered under it. Lookups are pure reads.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use streams_vocab::{Kind, Property, Role, Vocabulary};

use crate::entity::Entity;
use crate::error::CodecError;

/// Resolved schema of one kind.
#[derive(Debug)]
pub struct KindSchema {
    kind: &'static Kind,
    roles: Vec<Role>,
    properties: Vec<&'static Property>,
    by_name: HashMap<&'static str, &'static Property>,
    by_map_key: HashMap<String, &'static Property>,
}

impl KindSchema {
    fn new(vocabulary: &'static Vocabulary, kind: &'static Kind) -> Self {
        let properties = vocabulary.properties_of(kind);
        let by_name = properties.iter().map(|p| (p.name, *p)).collect();
        let by_map_key = properties
            .iter()
            .filter_map(|p| Some((p.language_map_key()?, *p)))
            .collect();
        Self {
            kind,
            roles: vocabulary.roles_of(kind),
            properties,
            by_name,
            by_map_key,
        }
    }

    /// The kind this schema describes.
    #[must_use]
    pub fn kind(&self) -> &'static Kind {
        self.kind
    }

    /// The kind's discriminator name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name
    }

    /// Roles the kind implements, own and inherited, in [`Role`] order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns true if the kind implements `role`.
    #[must_use]
    pub fn implements(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Declared and inherited properties, in vocabulary order. This is also
    /// the order properties are written in.
    #[must_use]
    pub fn properties(&self) -> &[&'static Property] {
        &self.properties
    }

    /// Looks up a declared property by document key.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static Property> {
        self.by_name.get(name).copied()
    }

    /// Looks up the property whose `<name>Map` companion is `key`.
    #[must_use]
    pub fn language_property(&self, key: &str) -> Option<&'static Property> {
        self.by_map_key.get(key).copied()
    }
}

/// Discriminator-name lookup tables, one per capability role.
#[derive(Debug)]
pub struct TypeRegistry {
    vocabulary: &'static Vocabulary,
    schemas: HashMap<&'static str, KindSchema>,
    by_role: BTreeMap<Role, BTreeSet<&'static str>>,
}

impl TypeRegistry {
    /// Builds a registry over `vocabulary`.
    ///
    /// When two modules declare the same kind name, the first declaration
    /// wins.
    #[must_use]
    pub fn new(vocabulary: &'static Vocabulary) -> Self {
        let mut schemas = HashMap::new();
        let mut by_role: BTreeMap<Role, BTreeSet<&'static str>> = BTreeMap::new();
        for kind in vocabulary.kinds() {
            if schemas.contains_key(kind.name) {
                continue;
            }
            let schema = KindSchema::new(vocabulary, kind);
            for role in schema.roles() {
                by_role.entry(*role).or_default().insert(kind.name);
            }
            schemas.insert(kind.name, schema);
        }
        Self {
            vocabulary,
            schemas,
            by_role,
        }
    }

    /// Returns the registry over [`Vocabulary::full`], built on first use.
    #[must_use]
    pub fn standard() -> &'static TypeRegistry {
        static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| TypeRegistry::new(Vocabulary::full()))
    }

    /// The vocabulary this registry was built from.
    #[must_use]
    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocabulary
    }

    /// Returns the schema of a kind by name.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&KindSchema> {
        self.schemas.get(name)
    }

    /// Returns the schema of `name` if it is registered under `role`.
    #[must_use]
    pub fn lookup(&self, name: &str, role: Role) -> Option<&KindSchema> {
        if !self.by_role.get(&role)?.contains(name) {
            return None;
        }
        self.schemas.get(name)
    }

    /// Iterates over the kind names registered under `role`, sorted.
    pub fn kinds_with_role(&self, role: Role) -> impl Iterator<Item = &'static str> + '_ {
        self.by_role.get(&role).into_iter().flatten().copied()
    }

    /// Returns a zero-value entity of kind `name` if it implements `role`.
    #[must_use]
    pub fn resolve_role(&'static self, name: &str, role: Role) -> Option<Entity> {
        self.lookup(name, role).map(|schema| Entity::zero(self, schema))
    }

    /// Picks a kind for an embedded object carrying the discriminator
    /// `names`, for a property whose range lists `roles`.
    ///
    /// Roles are the outer loop: every name is tried against the first role
    /// before any name is tried against the second. Within a role the first
    /// registered name in document order wins.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, names: &[S], roles: &[Role]) -> Option<(Role, &KindSchema)> {
        roles.iter().find_map(|role| {
            names
                .iter()
                .find_map(|name| self.lookup(name.as_ref(), *role))
                .map(|schema| (*role, schema))
        })
    }

    /// Returns a zero-value entity of kind `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownKind`] if no kind has that name.
    pub fn create(&'static self, name: &str) -> Result<Entity, CodecError> {
        self.schema(name)
            .map(|schema| Entity::zero(self, schema))
            .ok_or_else(|| CodecError::UnknownKind(name.to_owned()))
    }

    /// Returns true if kind `name` is `ancestor` or extends it.
    #[must_use]
    pub fn is_subtype(&self, name: &str, ancestor: &str) -> bool {
        self.vocabulary.is_subtype(name, ancestor)
    }
}
