mod adhoc;
mod already_bound;
mod empty_source;
mod invalid_entity;
mod invalid_options;
mod unresolved_entity;
mod validation;

use adhoc::AdhocError;
use already_bound::AlreadyBoundError;
use empty_source::EmptySourceError;
use invalid_entity::InvalidEntityError;
use invalid_options::InvalidOptionsError;
use std::sync::Arc;
use unresolved_entity::UnresolvedEntityError;
use validation::ValidationError;

/// Returns an ad-hoc [`Error`] from the enclosing function, formatted from
/// the given arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] formatted from the given arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while declaring or using a binding.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause.
    #[inline(always)]
    pub fn context(self, consequent: Error) -> Error {
        self.context_impl(consequent)
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AlreadyBound(AlreadyBoundError),
    EmptySource(EmptySourceError),
    InvalidEntity(InvalidEntityError),
    InvalidOptions(InvalidOptionsError),
    UnresolvedEntity(UnresolvedEntityError),
    Validation(ValidationError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AlreadyBound(err) => core::fmt::Display::fmt(err, f),
            EmptySource(err) => core::fmt::Display::fmt(err, f),
            InvalidEntity(err) => core::fmt::Display::fmt(err, f),
            InvalidOptions(err) => core::fmt::Display::fmt(err, f),
            UnresolvedEntity(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown bindery error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn anyhow_bridge() {
        // anyhow::Error converts to our Error
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn empty_source_display() {
        let err = Error::empty_source("Post");
        assert_eq!(
            err.to_string(),
            "cannot bind model `Post`: source name is empty"
        );
        assert!(err.is_empty_source());
        assert!(!err.is_already_bound());
    }

    #[test]
    fn already_bound_display() {
        let err = Error::already_bound("Comment", "comments");
        assert_eq!(
            err.to_string(),
            "model `Comment` is already bound to source `comments`"
        );
        assert!(err.is_already_bound());
    }

    #[test]
    fn unresolved_entity_display() {
        let err = Error::unresolved_entity("user");
        assert_eq!(
            err.to_string(),
            "entity `user` is not registered; did you forget to register it \
             with `Registry::builder()`?"
        );
        assert!(err.is_unresolved_entity());
    }

    #[test]
    fn invalid_options_with_context() {
        let err = Error::invalid_options("foreign_key_type Bool is not a key type")
            .context(err!("building entity `comment`"));
        assert_eq!(
            err.to_string(),
            "building entity `comment`: invalid options: foreign_key_type \
             Bool is not a key type"
        );
        assert!(err.is_invalid_options());
    }

    #[test]
    fn unknown_field_display() {
        let err = Error::unknown_field("post", "titel");
        assert_eq!(err.to_string(), "unknown field `titel` for entity `post`");
        assert!(err.is_validation());
    }
}
