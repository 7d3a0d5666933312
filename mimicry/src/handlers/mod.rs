//! Ready-to-use event handler implementations.
//!
//! This module contains concrete [`EventHandler`](crate::EventHandler)
//! implementations for common destinations.
//!
//! # Available Handlers
//!
//! - [`DefaultEventHandler`] - Writes each report to a stream (stdout by default)
//! - [`Tracer`] - Logs each failure via `tracing` crate
//! - [`Recorder`] - Records failures to a JSON Lines file (requires `recorder` feature)
//!
//! # Example
//!
//! ```rust
//! use mimicry::Session;
//! use mimicry::handlers::{DefaultEventHandler, Tracer};
//!
//! let mut session = Session::new();
//! session.add(DefaultEventHandler::stdout());
//! session.add(Tracer::default());
//! ```

mod default_event_handler;
pub use default_event_handler::DefaultEventHandler;

mod tracer;
pub use tracer::Tracer;

#[cfg(feature = "recorder")]
mod recorder;

#[cfg(feature = "recorder")]
#[cfg_attr(docsrs, doc(cfg(feature = "recorder")))]
pub use recorder::Recorder;
