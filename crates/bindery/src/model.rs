use crate::registry::BindingDef;
use crate::schema::{ModelId, Name};

/// Generate a unique model ID at runtime.
///
/// This function uses a global atomic counter to ensure each call returns
/// a unique ModelId. IDs start at 0 and increment with each call.
/// This is thread-safe and can be called concurrently.
pub fn generate_unique_id() -> ModelId {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

    let id = NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed);
    ModelId(id)
}

/// A logical unit that owns exactly one binding.
pub trait Model: Sized {
    /// Unique identifier for this model within the registry.
    ///
    /// Identifiers are *not* unique across registries. Implementations must
    /// return the same value on every call; memoize [`generate_unique_id`]
    /// behind a `OnceLock`.
    fn id() -> ModelId;

    /// Name of the model, used for diagnostics and entity naming.
    fn name() -> Name;

    /// The model's binding declaration: its storage source plus either an
    /// entity reference or an inline entity description.
    fn binding() -> BindingDef;
}
