use kinga_core::FormKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),
}

/// Submission blocked: the labels of every checklist item that failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{form} is missing required fields: {}", .missing.join(", "))]
pub struct ValidationFailure {
    pub form: FormKind,
    pub missing: Vec<String>,
}
