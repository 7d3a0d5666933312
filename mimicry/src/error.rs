use std::sync::Arc;

/// The single error type for all Mimicry operations.
///
/// Every fallible Mimicry API returns `mimicry::Result<T>` (alias for
/// `Result<T, mimicry::Error>`). Errors from collaborators (invocations and
/// matchers that fail to describe themselves) and from the output
/// destination are mapped into variants of this enum so callers only need
/// to handle one error type.
///
/// Verification failures are *not* errors of this crate. They are the
/// snapshots ([`SequenceVerification`](crate::SequenceVerification),
/// [`NoMoreInvocations`](crate::NoMoreInvocations),
/// [`UnexpectedCall`](crate::UnexpectedCall)) that Mimicry renders.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(usize),

    #[error("Expected count must be at least 1, got {0}")]
    InvalidExpectedCount(usize),

    #[error("Expected pattern must contain at least one sequence")]
    EmptyPattern,

    #[error("Cannot format: {0}")]
    Unformattable(String),

    #[error("External error: {0}")]
    External(#[source] Arc<dyn std::error::Error + Send + Sync>),

    #[error("IO error: {0}")]
    IoError(#[source] Arc<std::io::Error>),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[source] Arc<serde_json::Error>),
}

impl Error {
    /// Wrap an error raised by a collaborator (an [`Invocation`](crate::Invocation)
    /// or [`Matcher`](crate::Matcher) implementation).
    pub fn external(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::External(Arc::new(e))
    }

    /// Shorthand for [`Error::Unformattable`].
    pub fn unformattable(reason: impl Into<String>) -> Self {
        Error::Unformattable(reason.into())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRepeatCount(a), Self::InvalidRepeatCount(b)) => a == b,
            (Self::InvalidExpectedCount(a), Self::InvalidExpectedCount(b)) => a == b,
            (Self::EmptyPattern, Self::EmptyPattern) => true,
            (Self::Unformattable(a), Self::Unformattable(b)) => a == b,
            (Self::External(a), Self::External(b)) => Arc::ptr_eq(a, b),
            (Self::IoError(a), Self::IoError(b)) => Arc::ptr_eq(a, b),
            #[cfg(feature = "serde")]
            (Self::Json(a), Self::Json(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(Arc::new(e))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(Arc::new(e))
    }
}
