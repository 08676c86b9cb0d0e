use kinga_core::CompletionStatus;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Kind of change applied to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    Patch,
    AppendRecord,
    UpdateRecord,
    RemoveRecord,
    RenumberRecords,
    Submit,
}

impl EditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditAction::Patch => "patch",
            EditAction::AppendRecord => "append_record",
            EditAction::UpdateRecord => "update_record",
            EditAction::RemoveRecord => "remove_record",
            EditAction::RenumberRecords => "renumber_records",
            EditAction::Submit => "submit",
        }
    }
}

/// A structured record of one accepted edit.
///
/// Emitted via `tracing`; field values are never logged, only the paths and
/// keys that changed.
#[derive(Debug, Clone, Serialize)]
pub struct EditEvent {
    pub document_id: Uuid,
    pub action: EditAction,
    pub path: String,
    pub keys: Vec<String>,
    pub status: CompletionStatus,
}

impl EditEvent {
    pub fn new(
        document_id: Uuid,
        action: EditAction,
        path: impl Into<String>,
        status: CompletionStatus,
    ) -> Self {
        Self {
            document_id,
            action,
            path: path.into(),
            keys: Vec::new(),
            status,
        }
    }

    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        debug!(
            edit.document_id = %self.document_id,
            edit.action = self.action.as_str(),
            edit.path = %self.path,
            edit.keys = ?self.keys,
            edit.status = %self.status,
            "document edited"
        );
    }
}
