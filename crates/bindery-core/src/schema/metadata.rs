use super::{Entity, ModelId};

use std::sync::Arc;

/// The `(source, entity, model)` triple a query builder starts from.
///
/// Derived from a binding on each access; all three parts are immutable once
/// the registry is built.
#[derive(Debug, Clone)]
pub struct QueryMetadata {
    /// Storage source the owning model is bound to
    pub source: String,

    /// The compiled record schema
    pub entity: Arc<Entity>,

    /// The owning model
    pub model: ModelId,
}
