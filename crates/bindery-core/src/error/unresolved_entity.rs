use super::Error;

/// Error when a by-name entity reference never resolves.
///
/// A binding may reference its entity by name rather than by value; existence
/// is deliberately not checked at bind time, since the entity may be
/// registered later in the same declaration pass. The reference is resolved
/// lazily, so this error surfaces at the first use of a constructor or
/// metadata accessor rather than at bind time.
#[derive(Debug)]
pub(super) struct UnresolvedEntityError {
    entity: Box<str>,
}

impl std::error::Error for UnresolvedEntityError {}

impl core::fmt::Display for UnresolvedEntityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "entity `{}` is not registered; did you forget to register it \
             with `Registry::builder()`?",
            self.entity
        )
    }
}

impl Error {
    /// Creates an unresolved entity error for the named entity.
    pub fn unresolved_entity(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedEntity(UnresolvedEntityError {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved entity error.
    pub fn is_unresolved_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedEntity(_))
    }
}
