use crate::schema::{Description, Entity, EntityOptions, Name};

use std::sync::Arc;

/// A model's binding declaration: the storage source plus the schema it
/// should be bound to.
///
/// Two entry points mirror the two ways a schema is supplied: an existing
/// entity (by value or by name), or an inline description the entity factory
/// compiles during the bind.
#[derive(Debug, Clone)]
pub struct BindingDef {
    pub(crate) source: String,
    pub(crate) schema: SchemaDef,
    pub(crate) options: Option<EntityOptions>,
}

#[derive(Debug, Clone)]
pub(crate) enum SchemaDef {
    Entity(EntityRef),
    Inline(Description),
}

/// A reference to an entity: held directly, or by name and resolved lazily
/// against the registry's catalog at first use.
#[derive(Debug, Clone)]
pub enum EntityRef {
    Entity(Arc<Entity>),
    Named(Name),
}

impl BindingDef {
    /// Binds to an existing entity.
    pub fn new(source: impl Into<String>, entity: impl Into<EntityRef>) -> Self {
        Self {
            source: source.into(),
            schema: SchemaDef::Entity(entity.into()),
            options: None,
        }
    }

    /// Binds to an inline description, compiled by the entity factory during
    /// the bind.
    pub fn inline(source: impl Into<String>, description: Description) -> Self {
        Self {
            source: source.into(),
            schema: SchemaDef::Inline(description),
            options: None,
        }
    }

    /// Call-site schema options, merged over the application-wide defaults.
    ///
    /// Only consulted when the schema is inline; an existing entity was
    /// compiled with its own options already.
    pub fn options(mut self, options: EntityOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl EntityRef {
    /// References an entity by name, to be resolved at first use.
    pub fn named(name: &str) -> Self {
        Self::Named(Name::new(name))
    }
}

impl From<Arc<Entity>> for EntityRef {
    fn from(entity: Arc<Entity>) -> Self {
        Self::Entity(entity)
    }
}

impl From<Entity> for EntityRef {
    fn from(entity: Entity) -> Self {
        Self::Entity(Arc::new(entity))
    }
}

impl From<&str> for EntityRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
