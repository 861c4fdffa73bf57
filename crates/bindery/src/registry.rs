//! The process-wide binding registry.
//!
//! Bindings are declared once, during startup, through [`Builder`]; the
//! resulting [`Registry`] is immutable and safe to read from any number of
//! threads without locking.

mod binding;
pub use binding::Binding;

mod builder;
pub use builder::Builder;

mod def;
pub use def::{BindingDef, EntityRef};

use crate::schema::{Entity, ModelId, Name};
use crate::{err, Model, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// An immutable model-to-binding map, keyed by model identity and populated
/// once at startup.
#[derive(Debug)]
pub struct Registry {
    bindings: IndexMap<ModelId, Binding>,
}

/// The frozen entity catalog shared by every binding in a registry.
///
/// By-name entity references resolve against this at first use.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    entities: IndexMap<String, Arc<Entity>>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the binding for model `M`.
    pub fn binding<M: Model>(&self) -> Result<&Binding> {
        self.bindings.get(&M::id()).ok_or_else(|| {
            err!(
                "model `{}` is not registered; did you forget to register it \
                 with `Registry::builder()`?",
                M::name().upper_camel_case()
            )
        })
    }

    /// Returns the binding for the given model identity.
    pub fn binding_for(&self, id: impl Into<ModelId>) -> Result<&Binding> {
        let id = id.into();
        self.bindings.get(&id).ok_or_else(|| {
            err!(
                "model {id:?} is not registered; did you forget to register \
                 it with `Registry::builder()`?"
            )
        })
    }

    /// Iterate over all bindings in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Catalog {
    pub(crate) fn insert(&mut self, entity: Arc<Entity>) {
        self.entities.insert(entity.name.snake_case(), entity);
    }

    pub(crate) fn contains(&self, name: &Name) -> bool {
        self.entities.contains_key(&name.snake_case())
    }

    pub(crate) fn get(&self, name: &Name) -> Option<Arc<Entity>> {
        self.entities.get(&name.snake_case()).cloned()
    }
}
