use std::{fmt, sync::Arc};

use crate::{Formattable, Invocation, Result, reporting::Reporter};

/// A call that no expectation allowed.
///
/// Lighter than the verification failures: one invocation, no pattern and
/// no source location. Rendered as a single line:
///
/// ```text
/// Unexpected Method Call: charge(100)
/// ```
#[derive(Clone)]
pub struct UnexpectedCall {
    invocation: Arc<dyn Invocation>,
}

impl UnexpectedCall {
    pub fn new(invocation: Arc<dyn Invocation>) -> Self {
        Self { invocation }
    }

    /// The offending call.
    pub fn invocation(&self) -> &Arc<dyn Invocation> {
        &self.invocation
    }

    #[cfg(feature = "serde")]
    pub(crate) fn export(&self, reporter: &Reporter) -> Result<crate::reporting::ReportExport<'_>> {
        Ok(crate::reporting::ReportExport {
            kind: "unexpected_call",
            location: None,
            report: reporter.unexpected_call(self)?,
            invocations: vec![self.invocation.format()?],
        })
    }

    /// Export the failure as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Propagates collaborator formatting errors and serialization errors.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.export(&Reporter::default())?)?)
    }
}

impl Formattable for UnexpectedCall {
    fn format(&self) -> Result<String> {
        Reporter::default().unexpected_call(self)
    }
}

impl fmt::Debug for UnexpectedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnexpectedCall").finish_non_exhaustive()
    }
}
