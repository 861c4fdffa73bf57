use std::fmt;

/// Uniquely identifies a model within the registry.
///
/// Identifiers are *not* unique across registries.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub usize);

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
