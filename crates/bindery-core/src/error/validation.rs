use super::Error;

/// Error when constructor input fails entity validation.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A constructor was given a field name the entity does not declare.
    UnknownField { entity: Box<str>, field: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::UnknownField { entity, field } => {
                write!(f, "unknown field `{}` for entity `{}`", field, entity)
            }
        }
    }
}

impl Error {
    /// Creates a validation error for an unknown constructor field.
    pub fn unknown_field(entity: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::UnknownField {
                entity: entity.into().into(),
                field: field.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
