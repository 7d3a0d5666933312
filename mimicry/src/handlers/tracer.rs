use crate::{
    EventHandler, NoMoreInvocations, ReportConfig, Result, SequenceVerification, UnexpectedCall,
    reporting::Reporter,
};

/// An event handler that logs failures to the `tracing` crate.
///
/// Every failure is logged at `warn` level with the rendered report as the
/// message and the failure kind (and source location, when there is one)
/// as structured fields. Nothing is written to any stream.
///
/// # Example
///
/// ```rust
/// use mimicry::Session;
/// use mimicry::handlers::Tracer;
///
/// let mut session = Session::new();
/// session.add(Tracer::default());
/// ```
#[derive(Debug, Default)]
pub struct Tracer {
    reporter: Reporter,
}

impl Tracer {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            reporter: Reporter::new(config),
        }
    }
}

impl EventHandler for Tracer {
    fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
        let report = self.reporter.unexpected_call(failure)?;
        tracing::warn!(kind = "unexpected_call", "{report}");
        Ok(())
    }

    fn handle_sequence_verification(&mut self, failure: &SequenceVerification) -> Result {
        let report = self.reporter.sequence_verification(failure)?;
        tracing::warn!(
            kind = "sequence_verification",
            location = %failure.location(),
            verification_type = %failure.verification_type(),
            expected_count = failure.expected_count(),
            actual = failure.actual_sequence().len(),
            "{report}"
        );
        Ok(())
    }

    fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
        let report = self.reporter.no_more_invocations(failure)?;
        tracing::warn!(
            kind = "no_more_invocations",
            location = %failure.location(),
            unverified = failure.unverified_invocations().len(),
            "{report}"
        );
        Ok(())
    }
}
