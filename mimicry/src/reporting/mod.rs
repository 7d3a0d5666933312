//! Rendering of sequences and verification failures into diagnostic text.
//!
//! The building blocks are exposed individually so a hosting framework can
//! reuse them in its own messages:
//!
//! - [`format_sequence`] - compact notation for a [`Sequence`](crate::Sequence)
//! - [`format_expected_count`] - `"exactly 3 appearances"` and friends
//! - [`format_invocation_list`] - bounded, one-call-per-line listing
//! - [`Reporter`] - complete reports for each failure kind
//!
//! # Example
//!
//! ```rust
//! use mimicry::{Sequence, VerificationType};
//! use mimicry::reporting::{format_expected_count, format_sequence};
//!
//! let login = Sequence::atomic("login()");
//! let pattern = &login + &Sequence::atomic("fetch()").repeat(2)?;
//!
//! assert_eq!(format_sequence(&pattern)?, "login() + fetch() * 2");
//! assert_eq!(
//!     format_expected_count(VerificationType::AtLeast, 1),
//!     "at least one appearance"
//! );
//! # Ok::<(), mimicry::Error>(())
//! ```

mod expected_count;
#[cfg(feature = "serde")]
mod export;
mod invocation_list;
mod reporter;
mod sequence_format;

pub use expected_count::format_expected_count;
#[cfg(feature = "serde")]
pub(crate) use export::ReportExport;
pub use invocation_list::format_invocation_list;
pub use reporter::Reporter;
pub use sequence_format::format_sequence;
