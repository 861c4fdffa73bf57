use super::Error;

/// Error when a resolved option set has a malformed shape.
///
/// This occurs when:
/// - The primary key specification names an empty field
/// - The primary key type is not a key type
/// - The default foreign key type is not a key type
///
/// Option shapes are validated by the entity factory, never by the option
/// resolver; the resolver is pure mapping arithmetic and accepts any input.
#[derive(Debug)]
pub(super) struct InvalidOptionsError {
    message: Box<str>,
}

impl std::error::Error for InvalidOptionsError {}

impl core::fmt::Display for InvalidOptionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid options: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidOptions(InvalidOptionsError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid options error.
    pub fn is_invalid_options(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidOptions(_))
    }
}
