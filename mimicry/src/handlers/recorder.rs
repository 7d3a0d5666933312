use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{
    EventHandler, NoMoreInvocations, ReportConfig, Result, SequenceVerification, UnexpectedCall,
    VerificationEvent, reporting::Reporter,
};

/// An event handler that records failures to a file in JSON Lines format.
///
/// Each failure is written as a JSON object on its own line with the
/// fields `kind`, `location`, `report` and `invocations`. Lines are flushed
/// immediately for reliability (not optimized for high-throughput).
///
/// # Example
///
/// ```ignore
/// let recorder = Recorder::new("failures.jsonl")?;
/// session.add(recorder);
/// ```
#[derive(Debug)]
pub struct Recorder {
    writer: BufWriter<File>,
    reporter: Reporter,
}

impl Recorder {
    /// Create a new recorder that writes to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`](crate::Error::IoError) if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            reporter: Reporter::default(),
        })
    }

    /// Render the `report` field with the given configuration.
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.reporter = Reporter::new(config);
        self
    }

    fn record(&mut self, event: &VerificationEvent) -> Result {
        let export = event.export(&self.reporter)?;
        serde_json::to_writer(&mut self.writer, &export)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl EventHandler for Recorder {
    fn handle_unexpected_call(&mut self, failure: &UnexpectedCall) -> Result {
        self.record(&VerificationEvent::UnexpectedCall(failure.clone()))
    }

    fn handle_sequence_verification(&mut self, failure: &SequenceVerification) -> Result {
        self.record(&VerificationEvent::SequenceVerification(failure.clone()))
    }

    fn handle_no_more_invocations(&mut self, failure: &NoMoreInvocations) -> Result {
        self.record(&VerificationEvent::NoMoreInvocations(failure.clone()))
    }

    fn handle(&mut self, event: &VerificationEvent) -> Result {
        self.record(event)
    }
}
