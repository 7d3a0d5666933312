use crate::Result;

/// One recorded call on a mock object.
///
/// Invocations are produced by the interception layer of a mocking
/// framework. Mimicry never inspects them beyond asking for a
/// human-readable description, which it embeds in failure reports.
///
/// Returning an error from [`format`](Self::format) aborts the report that
/// is being built; Mimicry never emits a partial report.
///
/// # Example
///
/// ```rust
/// use mimicry::{Invocation, Result};
///
/// struct Call {
///     method: &'static str,
///     args: Vec<i32>,
/// }
///
/// impl Invocation for Call {
///     fn format(&self) -> Result<String> {
///         let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
///         Ok(format!("{}({})", self.method, args.join(", ")))
///     }
/// }
///
/// let call = Call { method: "save", args: vec![1, 2] };
/// assert_eq!(call.format().unwrap(), "save(1, 2)");
/// ```
pub trait Invocation: Send + Sync {
    /// Returns a human-readable description of the call.
    fn format(&self) -> Result<String>;
}

// A description can stand in for the call it describes
impl Invocation for &str {
    fn format(&self) -> Result<String> {
        Ok((*self).to_string())
    }
}

impl Invocation for String {
    fn format(&self) -> Result<String> {
        Ok(self.clone())
    }
}
