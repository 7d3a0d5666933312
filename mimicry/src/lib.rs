#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Mimicry
//!
//! Call-sequence verification reports for mock objects.
//!
//! Mimicry is the reporting core of a mocking framework. The framework
//! intercepts calls and decides whether an expectation was met; when it was
//! not, it hands Mimicry a snapshot of the failure. Mimicry renders that
//! snapshot into a precise, bounded, human-readable report and delivers it
//! to the registered event handlers.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use mimicry::*;
//!
//! // Expected: open(), then read() twice
//! let pattern = Sequence::atomic("open()").then(&Sequence::atomic("read()").repeat(2)?);
//!
//! // Recorded: open(), close()
//! let actual: Vec<Arc<dyn Invocation>> = vec![Arc::new("open()"), Arc::new("close()")];
//!
//! let failure = SequenceVerification::new(
//!     Location::new("file_test.rs", 12),
//!     VerificationType::Exact,
//!     1,
//!     vec![pattern],
//!     actual,
//! )?;
//!
//! assert_eq!(
//!     report(&failure)?,
//!     "file_test.rs:12: VerificationException\n\
//!      Expected exactly one appearance of pattern:\n\
//!      open() + read() * 2\n\
//!      Actual sequence: \n\
//!      open()\n\
//!      close()"
//! );
//!
//! // Or deliver it to every handler of the session (stdout by default)
//! let mut session = Session::default();
//! session.handle(&failure.into())?;
//! # Ok::<(), mimicry::Error>(())
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Invocation`] | A recorded call (implemented by the host framework) |
//! | [`Matcher`] | One expected call (implemented by the host framework) |
//! | [`Sequence`] | Composable pattern of expected calls |
//! | [`SequenceVerification`] | Snapshot of a failed sequence verification |
//! | [`NoMoreInvocations`] | Snapshot of unverified calls left over |
//! | [`UnexpectedCall`] | A call no expectation allowed |
//! | [`EventHandler`] | Receives failures (see [`handlers`] for ready-made ones) |
//! | [`Session`] | Fans failures out to registered handlers |
//! | [`ReportConfig`] | Rendering options |
//!
//! ## Sequences
//!
//! A sequence is a single matcher, a sequence repeated `n >= 1` times, or
//! two sequences one after the other. Sequences are immutable values, so a
//! base pattern can be shared between expectations:
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use mimicry::Sequence;
//!
//! let handshake = Sequence::atomic("syn()") + Sequence::atomic("ack()");
//! let retried = &handshake * NonZeroUsize::new(3).unwrap();
//!
//! assert_eq!(handshake.matcher_count(), 2);
//! assert_eq!(retried.matcher_count(), 6);
//! assert!(Sequence::atomic("syn()").repeat(0).is_err());
//! ```
//!
//! ## Report Layout
//!
//! Invocation lists are capped at [`ReportConfig::max_listed_invocations`]
//! entries (5 by default) followed by a `...` line, so reports stay
//! scannable however long the recorded history is.
//!
//! ## Features
//!
//! - **`serde`** - `Serialize`/`Deserialize` for value types and `to_json()` on failures
//! - **`recorder`** - Built-in `Recorder` handler writing failures to JSON Lines files (enables `serde`)

mod error;
mod event_handler;
mod formattable;
mod invocation;
mod location;
#[cfg(test)]
mod log_capture;
mod matcher;
mod no_more_invocations;
mod report_config;
mod sequence;
mod sequence_verification;
mod session;
mod unexpected_call;
mod verification_event;
mod verification_type;

pub mod handlers;
pub mod reporting;

pub use error::Error;
pub use event_handler::EventHandler;
pub use formattable::{Formattable, report};
pub use invocation::Invocation;
pub use location::Location;
pub use matcher::Matcher;
pub use no_more_invocations::NoMoreInvocations;
pub use report_config::ReportConfig;
pub use sequence::Sequence;
pub use sequence_verification::SequenceVerification;
pub use session::{HandlerId, Session};
pub use unexpected_call::UnexpectedCall;
pub use verification_event::VerificationEvent;
pub use verification_type::VerificationType;

/// Convenience alias for `Result<T, mimicry::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
