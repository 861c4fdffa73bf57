use super::def::SchemaDef;
use super::{Binding, BindingDef, Catalog, EntityRef, Registry};
use crate::schema::{Entity, EntityOptions, ModelId, Name, ResolvedOptions};
use crate::{Error, Model, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Collects binding declarations during startup and freezes them into a
/// [`Registry`].
///
/// Each model transitions from unbound to bound exactly once; a bind that
/// fails leaves the model unbound and the builder otherwise untouched.
#[derive(Debug, Default)]
pub struct Builder {
    /// Application-wide default schema options
    defaults: EntityOptions,

    /// Entities available to by-name references
    catalog: Catalog,

    /// Bindings recorded so far, in registration order
    bound: IndexMap<ModelId, Pending>,
}

#[derive(Debug)]
struct Pending {
    owner_name: Name,
    source: String,
    schema: EntityRef,
}

impl Builder {
    /// Sets the application-wide default option set.
    ///
    /// Consulted for every inline bind that follows; call-site options
    /// override it key-wise.
    pub fn defaults(&mut self, options: EntityOptions) -> &mut Self {
        self.defaults = options;
        self
    }

    /// Adds a standalone compiled entity to the catalog so by-name
    /// references can resolve to it.
    pub fn entity(&mut self, entity: Entity) -> Result<&mut Self> {
        if self.catalog.contains(&entity.name) {
            return Err(Error::invalid_entity(format!(
                "entity `{}` is already registered",
                entity.name.snake_case()
            )));
        }
        self.catalog.insert(Arc::new(entity));
        Ok(self)
    }

    /// Registers a model using its own declaration.
    pub fn register<M: Model>(&mut self) -> Result<&mut Self> {
        self.bind::<M>(M::binding())
    }

    /// Binds a model with an explicit declaration.
    pub fn bind<M: Model>(&mut self, def: BindingDef) -> Result<&mut Self> {
        self.bind_model(M::id(), M::name(), def)?;
        Ok(self)
    }

    /// Freezes the collected bindings into an immutable registry.
    pub fn build(&mut self) -> Registry {
        let catalog = Arc::new(std::mem::take(&mut self.catalog));

        let bindings = std::mem::take(&mut self.bound)
            .into_iter()
            .map(|(id, pending)| {
                let binding = Binding::new(
                    pending.source,
                    pending.schema,
                    id,
                    pending.owner_name,
                    catalog.clone(),
                );
                (id, binding)
            })
            .collect();

        Registry { bindings }
    }

    fn bind_model(&mut self, id: ModelId, name: Name, def: BindingDef) -> Result<()> {
        if def.source.is_empty() {
            return Err(Error::empty_source(name.upper_camel_case()));
        }

        if let Some(existing) = self.bound.get(&id) {
            return Err(Error::already_bound(
                name.upper_camel_case(),
                existing.source.clone(),
            ));
        }

        let schema = match def.schema {
            SchemaDef::Entity(entity_ref) => entity_ref,
            SchemaDef::Inline(description) => {
                if self.catalog.contains(description.name()) {
                    return Err(Error::invalid_entity(format!(
                        "entity `{}` is already registered",
                        description.name().snake_case()
                    )));
                }

                let local = def.options.unwrap_or_default();
                let resolved = ResolvedOptions::resolve(&self.defaults, &local, id);
                let entity = Arc::new(Entity::from_description(&resolved, description)?);

                // Inline entities land in the catalog too, so later by-name
                // references can see them.
                self.catalog.insert(entity.clone());

                EntityRef::Entity(entity)
            }
        };

        self.bound.insert(
            id,
            Pending {
                owner_name: name,
                source: def.source,
                schema,
            },
        );

        Ok(())
    }
}
