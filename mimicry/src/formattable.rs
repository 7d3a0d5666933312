use crate::Result;

/// Anything Mimicry can render into diagnostic text.
///
/// Implemented by [`Sequence`](crate::Sequence), the three failure snapshots
/// and [`VerificationEvent`](crate::VerificationEvent). Failure snapshots
/// render with the default [`ReportConfig`](crate::ReportConfig); use a
/// [`Reporter`](crate::reporting::Reporter) for a custom configuration.
pub trait Formattable {
    /// Renders the value, propagating any collaborator failure.
    fn format(&self) -> Result<String>;
}

/// Render any [`Formattable`] value.
///
/// Useful for embedding reports in another reporting surface without
/// routing them through an [`EventHandler`](crate::EventHandler).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mimicry::{Invocation, Location, NoMoreInvocations, report};
///
/// let failure = NoMoreInvocations::new(
///     Location::new("cart_test.rs", 12),
///     vec![Arc::new("checkout()") as Arc<dyn Invocation>],
/// );
/// let text = report(&failure)?;
/// assert!(text.ends_with("\ncheckout()"));
/// # Ok::<(), mimicry::Error>(())
/// ```
pub fn report<F: Formattable + ?Sized>(value: &F) -> Result<String> {
    value.format()
}
