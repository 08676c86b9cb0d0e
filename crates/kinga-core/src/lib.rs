//! kinga-core
//!
//! Pure domain types for the clinical paperwork: the Kenya Police P3 medical
//! examination report (official and simplified layouts) and the MOH 363
//! post-rape care record. No I/O; this is the shared vocabulary of the
//! form engine and the treatment window calculator.

pub mod document;
pub mod error;
pub mod models;
pub mod path;

pub use document::FormDocument;
pub use error::CoreError;
pub use models::status::{CompletionStatus, FormKind};
pub use path::{FieldPath, Segment};
