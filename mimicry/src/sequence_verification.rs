use std::{fmt, sync::Arc};

use crate::{
    Error, Formattable, Invocation, Location, Result, Sequence, VerificationType,
    reporting::Reporter,
};

/// Snapshot of a failed sequence verification.
///
/// Captured by the verification layer at the moment a pattern was found
/// missing (or appearing the wrong number of times). The snapshot is
/// immutable and can be rendered any number of times with identical output.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mimicry::{Formattable, Invocation, Location, Sequence, SequenceVerification, VerificationType};
///
/// let failure = SequenceVerification::new(
///     Location::new("cart_test.rs", 30),
///     VerificationType::Exact,
///     1,
///     vec![Sequence::atomic("checkout()")],
///     Vec::<Arc<dyn Invocation>>::new(),
/// )?;
///
/// assert_eq!(
///     failure.format()?,
///     "cart_test.rs:30: VerificationException\n\
///      Expected exactly one appearance of method: checkout()\n\
///      Actual sequence: empty"
/// );
/// # Ok::<(), mimicry::Error>(())
/// ```
#[derive(Clone)]
pub struct SequenceVerification {
    location: Location,
    verification_type: VerificationType,
    expected_count: usize,
    expected_pattern: Vec<Sequence>,
    actual_sequence: Vec<Arc<dyn Invocation>>,
}

impl SequenceVerification {
    /// Capture a failed verification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExpectedCount`] if `expected_count` is zero and
    /// [`Error::EmptyPattern`] if `expected_pattern` is empty.
    pub fn new(
        location: Location,
        verification_type: VerificationType,
        expected_count: usize,
        expected_pattern: Vec<Sequence>,
        actual_sequence: Vec<Arc<dyn Invocation>>,
    ) -> Result<Self> {
        if expected_count == 0 {
            return Err(Error::InvalidExpectedCount(expected_count));
        }
        if expected_pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self {
            location,
            verification_type,
            expected_count,
            expected_pattern,
            actual_sequence,
        })
    }

    /// Where the verification was requested.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn verification_type(&self) -> VerificationType {
        self.verification_type
    }

    pub fn expected_count(&self) -> usize {
        self.expected_count
    }

    /// The sequences that make up the expectation, in order.
    pub fn expected_pattern(&self) -> &[Sequence] {
        &self.expected_pattern
    }

    /// The calls that were actually recorded, in order.
    pub fn actual_sequence(&self) -> &[Arc<dyn Invocation>] {
        &self.actual_sequence
    }

    #[cfg(feature = "serde")]
    pub(crate) fn export(&self, reporter: &Reporter) -> Result<crate::reporting::ReportExport<'_>> {
        Ok(crate::reporting::ReportExport {
            kind: "sequence_verification",
            location: Some(&self.location),
            report: reporter.sequence_verification(self)?,
            invocations: self
                .actual_sequence
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

impl Formattable for SequenceVerification {
    fn format(&self) -> Result<String> {
        Reporter::default().sequence_verification(self)
    }
}

impl fmt::Debug for SequenceVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceVerification")
            .field("location", &self.location)
            .field("verification_type", &self.verification_type)
            .field("expected_count", &self.expected_count)
            .field("expected_pattern", &self.expected_pattern)
            .field("actual", &self.actual_sequence.len())
            .finish()
    }
}
