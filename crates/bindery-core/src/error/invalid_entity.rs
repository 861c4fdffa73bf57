use super::Error;

/// Error when an entity description is malformed.
///
/// This occurs when:
/// - A field declaration has an empty name
/// - Two field declarations share a name
/// - A declared field collides with the generated primary key field
/// - A relation declares a non-key foreign key type
///
/// These errors are caught while the factory compiles a description, at
/// declaration time.
#[derive(Debug)]
pub(super) struct InvalidEntityError {
    message: Box<str>,
}

impl std::error::Error for InvalidEntityError {}

impl core::fmt::Display for InvalidEntityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid entity description: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid entity description error.
    pub fn invalid_entity(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidEntity(InvalidEntityError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid entity description error.
    pub fn is_invalid_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEntity(_))
    }
}
