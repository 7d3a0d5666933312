use crate::Result;

/// One atomic expected-call pattern.
///
/// Matchers are built by the expectation layer of a mocking framework and
/// decide elsewhere whether an invocation matches. Mimicry only consumes
/// their description, which becomes the leaf notation of a
/// [`Sequence`](crate::Sequence).
///
/// # Example
///
/// ```rust
/// use mimicry::{Matcher, Result};
///
/// struct AnyArgs(&'static str);
///
/// impl Matcher for AnyArgs {
///     fn format(&self) -> Result<String> {
///         Ok(format!("{}(_)", self.0))
///     }
/// }
///
/// assert_eq!(AnyArgs("load").format().unwrap(), "load(_)");
/// ```
pub trait Matcher: Send + Sync {
    /// Returns a human-readable description of the expected call.
    fn format(&self) -> Result<String>;
}

impl Matcher for &str {
    fn format(&self) -> Result<String> {
        Ok((*self).to_string())
    }
}

impl Matcher for String {
    fn format(&self) -> Result<String> {
        Ok(self.clone())
    }
}
