use std::{borrow::Cow, fmt, hash};

/// Source position of the verification that failed.
///
/// Rendered as `file:line` at the start of every report, so editors and
/// CI logs can link straight to the assertion.
///
/// # Example
///
/// ```rust
/// use mimicry::Location;
///
/// let here = Location::new("tests/cart.rs", 42);
/// assert_eq!(here.to_string(), "tests/cart.rs:42");
///
/// // Or capture the caller through `#[track_caller]`
/// let caller = Location::caller();
/// assert!(caller.line() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    file: Cow<'static, str>,
    line: u32,
}

impl Location {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// The location of the code that called the current `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        std::panic::Location::caller().into()
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl From<&'static std::panic::Location<'static>> for Location {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}
