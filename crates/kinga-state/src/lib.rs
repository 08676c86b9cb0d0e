//! kinga-state
//!
//! Document State Engine: one editing session per clinical document.
//! Sub-forms send path-scoped partial updates; the session merges them into
//! its document, keeps the derived completion status current and gates the
//! final submission.

pub mod error;
pub mod events;
pub mod merge;
pub mod session;

pub use error::StateError;
pub use session::EditSession;
