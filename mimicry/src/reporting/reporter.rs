use std::fmt::Write;

use crate::{
    NoMoreInvocations, ReportConfig, Result, SequenceVerification, UnexpectedCall,
    VerificationEvent,
};

use super::{format_expected_count, format_invocation_list, format_sequence};

/// Builds complete failure reports.
///
/// Every report is a pure function of the snapshot and the
/// [`ReportConfig`]: rendering the same failure twice yields byte-identical
/// text. If a collaborator cannot describe itself, the error propagates and
/// no partial report is returned.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mimicry::{Invocation, Location, NoMoreInvocations, ReportConfig};
/// use mimicry::reporting::Reporter;
///
/// let reporter = Reporter::new(ReportConfig::default().with_max_listed_invocations(1));
/// let unverified: Vec<Arc<dyn Invocation>> = vec![Arc::new("a()"), Arc::new("b()")];
/// let failure = NoMoreInvocations::new(Location::new("t.rs", 4), unverified);
///
/// assert_eq!(
///     reporter.no_more_invocations(&failure)?,
///     "t.rs:4: Expected no more invocations!! But the following unverified \
///      invocations were found: \na()\n..."
/// );
/// # Ok::<(), mimicry::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Renders whichever failure the event carries.
    pub fn render(&self, event: &VerificationEvent) -> Result<String> {
        match event {
            VerificationEvent::UnexpectedCall(e) => self.unexpected_call(e),
            VerificationEvent::SequenceVerification(e) => self.sequence_verification(e),
            VerificationEvent::NoMoreInvocations(e) => self.no_more_invocations(e),
        }
    }

    /// `Unexpected Method Call: <invocation>` on a single line.
    pub fn unexpected_call(&self, failure: &UnexpectedCall) -> Result<String> {
        Ok(format!(
            "Unexpected Method Call: {}",
            failure.invocation().format()?
        ))
    }

    /// Report for a failed sequence verification.
    ///
    /// ```text
    /// cart_test.rs:30: VerificationException
    /// Expected exactly 2 appearances of pattern:
    /// open() + read() * 3 ... close()
    /// Actual sequence:
    /// open()
    /// read()
    /// ```
    ///
    /// A single expected call reads `of method: <call>` on the same line, and
    /// a single actual call follows `Actual sequence: ` without a line break.
    pub fn sequence_verification(&self, failure: &SequenceVerification) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{}: VerificationException", failure.location());

        out.push_str("Expected ");
        out.push_str(&format_expected_count(
            failure.verification_type(),
            failure.expected_count(),
        ));

        let pattern = failure.expected_pattern();
        if pattern.len() == 1 && pattern[0].matcher_count() == 1 {
            out.push_str(" of method: ");
        } else {
            out.push_str(" of pattern:\n");
        }

        let notations = pattern
            .iter()
            .map(format_sequence)
            .collect::<Result<Vec<_>>>()?;
        out.push_str(&notations.join(" ... "));

        out.push_str("\nActual sequence: ");
        let actual = failure.actual_sequence();
        match actual.len() {
            0 => out.push_str("empty"),
            1 => {}
            _ => out.push('\n'),
        }
        out.push_str(&format_invocation_list(
            actual,
            self.config.max_listed_invocations(),
        )?);

        Ok(out)
    }

    /// Report for a failed "no more invocations" verification.
    pub fn no_more_invocations(&self, failure: &NoMoreInvocations) -> Result<String> {
        let mut out = String::new();
        let _ = write!(out, "{}: ", failure.location());
        out.push_str(
            "Expected no more invocations!! But the following unverified invocations were found: \n",
        );
        out.push_str(&format_invocation_list(
            failure.unverified_invocations(),
            self.config.max_listed_invocations(),
        )?);
        Ok(out)
    }
}
