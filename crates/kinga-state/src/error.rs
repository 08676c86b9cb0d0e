use kinga_core::{CompletionStatus, CoreError};
use kinga_forms::error::ValidationFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("'{path}' is not inside an editable part of the form")]
    NotEditable { path: String },

    #[error("no field at '{path}'")]
    PathNotFound { path: String },

    #[error("'{path}' is not an object")]
    NotAnObject { path: String },

    #[error("'{path}' is not a list")]
    NotAList { path: String },

    #[error("update for '{path}' must be an object of fields")]
    InvalidPartial { path: String },

    #[error("unknown field '{key}' at '{path}'")]
    UnknownField { path: String, key: String },

    #[error("record {index} not found in '{path}' ({len} records)")]
    RecordNotFound {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("update does not match the form at '{path}': {message}")]
    Schema { path: String, message: String },

    #[error("document has been submitted and can no longer be edited")]
    Locked,

    #[error("document is {status}; it must be completed before submission")]
    NotReady { status: CompletionStatus },

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}
