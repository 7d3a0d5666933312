use std::{fmt, sync::Arc};

use crate::{Formattable, Invocation, Location, Result, reporting::Reporter};

/// Snapshot of a failed "no more invocations" verification.
///
/// Carries the invocations that were recorded but never matched by any
/// verification, in recording order.
#[derive(Clone)]
pub struct NoMoreInvocations {
    location: Location,
    unverified_invocations: Vec<Arc<dyn Invocation>>,
}

impl NoMoreInvocations {
    pub fn new(location: Location, unverified_invocations: Vec<Arc<dyn Invocation>>) -> Self {
        Self {
            location,
            unverified_invocations,
        }
    }

    /// Where the verification was requested.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Recorded calls that no verification accounted for.
    pub fn unverified_invocations(&self) -> &[Arc<dyn Invocation>] {
        &self.unverified_invocations
    }

    #[cfg(feature = "serde")]
    pub(crate) fn export(&self, reporter: &Reporter) -> Result<crate::reporting::ReportExport<'_>> {
        Ok(crate::reporting::ReportExport {
            kind: "no_more_invocations",
            location: Some(&self.location),
            report: reporter.no_more_invocations(self)?,
            invocations: self
                .unverified_invocations
                .iter()
                .map(|i| i.format())
                .collect::<Result<_>>()?,
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

impl Formattable for NoMoreInvocations {
    fn format(&self) -> Result<String> {
        Reporter::default().no_more_invocations(self)
    }
}

impl fmt::Debug for NoMoreInvocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoMoreInvocations")
            .field("location", &self.location)
            .field("unverified", &self.unverified_invocations.len())
            .finish()
    }
}
