use std::{
    fmt,
    io::{self, Write},
};

use crate::{
    EventHandler, NoMoreInvocations, ReportConfig, Result, SequenceVerification, UnexpectedCall,
    reporting::Reporter,
};

/// Writes every failure report to an output destination.
///
/// Each report is rendered in full, then written followed by a line break
/// and flushed at once: no buffering across events, no retry, no
/// suppression. If rendering fails, nothing is written.
///
/// The destination is injected. [`DefaultEventHandler::stdout`] (also the
/// [`Default`]) binds the process's standard output; any [`io::Write`] works,
/// including `&mut W` for a destination owned elsewhere.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mimicry::{EventHandler, UnexpectedCall};
/// use mimicry::handlers::DefaultEventHandler;
///
/// let mut handler = DefaultEventHandler::new(Vec::<u8>::new());
/// handler.handle_unexpected_call(&UnexpectedCall::new(Arc::new("charge(100)")))?;
///
/// let written = String::from_utf8(handler.into_inner()).unwrap();
/// assert_eq!(written, "Unexpected Method Call: charge(100)\n");
/// # Ok::<(), mimicry::Error>(())
/// ```
pub struct DefaultEventHandler<W = io::Stdout> {
    out: W,
    reporter: Reporter,
}

impl DefaultEventHandler<io::Stdout> {
    /// A handler writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for DefaultEventHandler<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> DefaultEventHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            reporter: Reporter::default(),
        }
    }

    /// Render reports with the given configuration.
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.reporter = Reporter::new(config);
        self
    }

    /// Returns a reference to the output destination.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the handler, returning the output destination.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, kind: &'static str, report: &str) -> Result {
        writeln!(self.out, "{report}")?;
        self.out.flush()?;
        tracing::debug!(kind, bytes = report.len() + 1, "report written");
        Ok(())
    }
}

impl<W: Write + Send> EventHandler for DefaultEventHandler<W> {
    fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
        let report = self.reporter.unexpected_call(failure)?;
        self.emit("unexpected_call", &report)
    }

    fn handle_sequence_verification(&mut self, failure: &SequenceVerification) -> Result {
        let report = self.reporter.sequence_verification(failure)?;
        self.emit("sequence_verification", &report)
    }

    fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
        let report = self.reporter.no_more_invocations(failure)?;
        self.emit("no_more_invocations", &report)
    }
}

impl<W> fmt::Debug for DefaultEventHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultEventHandler")
            .field("reporter", &self.reporter)
            .finish_non_exhaustive()
    }
}
