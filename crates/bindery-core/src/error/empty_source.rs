use super::Error;

/// Error when a model declares a binding with an empty storage source name.
///
/// Sources are opaque, caller-supplied strings (table names, collection
/// names); the only shape rule the binding layer enforces is that they are
/// non-empty. Raised at declaration time, before any binding is recorded.
#[derive(Debug)]
pub(super) struct EmptySourceError {
    model: Box<str>,
}

impl std::error::Error for EmptySourceError {}

impl core::fmt::Display for EmptySourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot bind model `{}`: source name is empty",
            self.model
        )
    }
}

impl Error {
    /// Creates an empty source error for the named model.
    pub fn empty_source(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptySource(EmptySourceError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an empty source error.
    pub fn is_empty_source(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptySource(_))
    }
}
