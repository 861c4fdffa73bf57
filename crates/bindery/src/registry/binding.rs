use super::{Catalog, EntityRef};
use crate::schema::{Entity, ModelId, Name, QueryMetadata};
use crate::stmt::{Value, ValueRecord};
use crate::{Error, Result};

use std::sync::Arc;

/// The resolved `(source, schema, owner)` triple for one model, plus the
/// constructor and reflection surface derived from it.
///
/// Set exactly once while the registry is built and immutable thereafter.
/// The entity reference may be by-name; it is resolved on each accessor call
/// so that an entity registered later in the same declaration pass is picked
/// up, and a reference that never resolves fails at first use rather than at
/// bind time.
#[derive(Debug)]
pub struct Binding {
    source: String,
    schema: EntityRef,
    owner: ModelId,
    owner_name: Name,
    catalog: Arc<Catalog>,
}

impl Binding {
    pub(crate) fn new(
        source: String,
        schema: EntityRef,
        owner: ModelId,
        owner_name: Name,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            source,
            schema,
            owner,
            owner_name,
            catalog,
        }
    }

    /// The storage source the model is bound to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The model that owns this binding.
    pub fn owner(&self) -> ModelId {
        self.owner
    }

    pub fn owner_name(&self) -> &Name {
        &self.owner_name
    }

    /// The raw schema reference, without resolving it.
    pub fn schema(&self) -> &EntityRef {
        &self.schema
    }

    /// The compiled entity this binding points at.
    pub fn entity(&self) -> Result<Arc<Entity>> {
        match &self.schema {
            EntityRef::Entity(entity) => Ok(entity.clone()),
            EntityRef::Named(name) => self
                .catalog
                .get(name)
                .ok_or_else(|| Error::unresolved_entity(name.snake_case())),
        }
    }

    /// Creates an empty record, delegating to the entity.
    pub fn new_record(&self) -> Result<ValueRecord> {
        Ok(self.entity()?.new_record())
    }

    /// Creates a record with the given field values, delegating to the
    /// entity. Field name validation is the entity's responsibility.
    pub fn new_record_with<K>(
        &self,
        values: impl IntoIterator<Item = (K, Value)>,
    ) -> Result<ValueRecord>
    where
        K: AsRef<str>,
    {
        self.entity()?.new_record_with(values)
    }

    /// The `(source, entity, model)` triple consumed by the query builder,
    /// recomputed from the binding on each call.
    pub fn query_metadata(&self) -> Result<QueryMetadata> {
        Ok(QueryMetadata {
            source: self.source.clone(),
            entity: self.entity()?,
            model: self.owner,
        })
    }
}
