use jiff::Timestamp;
use kinga_core::{CompletionStatus, FieldPath, FormDocument};
use kinga_forms::{FormDefinition, PartProgress, definition};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::StateError;
use crate::events::{EditAction, EditEvent};
use crate::merge;

/// An editing session owning exactly one document.
///
/// Every mutation is synchronous: it is applied to a serialized copy, checked
/// against the document's schema, and only then committed, so a rejected
/// edit leaves the document untouched. The completion status is re-derived
/// after each committed edit, and the furthest status reached is stored in
/// the document alongside it.
pub struct EditSession<D: FormDocument> {
    document: D,
    form: Box<dyn FormDefinition>,
}

impl<D: FormDocument> EditSession<D> {
    /// Start a session on a blank document with a fresh ID.
    pub fn new() -> Self {
        Self::resume(D::blank(Uuid::new_v4()))
    }

    /// Continue editing an existing document, e.g. a saved draft.
    ///
    /// The stored status is re-derived from the fields unless the document
    /// was submitted. The stored high mark is kept; a stored `status` is
    /// never trusted as one.
    pub fn resume(document: D) -> Self {
        let mut session = Self {
            form: definition(D::KIND),
            document,
        };
        match serde_json::to_value(&session.document) {
            Ok(value) => session.refresh_status(&value),
            Err(e) => warn!(error = %e, "could not serialize resumed document"),
        }
        session
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }

    /// The current document as JSON, for save-draft and submit collaborators.
    pub fn snapshot(&self) -> Result<Value, StateError> {
        Ok(serde_json::to_value(&self.document)?)
    }

    pub fn form(&self) -> &dyn FormDefinition {
        self.form.as_ref()
    }

    /// Status derived from the fields currently filled in.
    pub fn status(&self) -> CompletionStatus {
        self.document.status()
    }

    /// Highest status the document has reached. Unlike [`Self::status`],
    /// this never drops when a required field is cleared, and it survives a
    /// save and resume.
    pub fn highest_status(&self) -> CompletionStatus {
        self.document.highest_status()
    }

    pub fn is_submitted(&self) -> bool {
        self.document.status() == CompletionStatus::Submitted
    }

    /// Whether the navigation may open `part`. Uses the highest status
    /// reached so a part, once opened, stays reachable.
    pub fn is_unlocked(&self, part: &str) -> bool {
        self.form.is_part_unlocked(part, self.highest_status())
    }

    pub fn progress(&self) -> Result<Vec<PartProgress>, StateError> {
        Ok(self.form.part_progress(&self.snapshot()?))
    }

    /// Shallow-merge `partial` into the object at `path`.
    ///
    /// `path` may point at any depth inside a Part; keys absent from
    /// `partial` keep their values and nothing outside the node changes.
    pub fn patch(&mut self, path: &str, partial: Value) -> Result<&D, StateError> {
        let path = FieldPath::parse(path)?;
        self.patch_at(&path, partial)
    }

    pub fn patch_at(&mut self, path: &FieldPath, partial: Value) -> Result<&D, StateError> {
        self.mutate(EditAction::Patch, path, |root| merge::merge_at(root, path, partial))?;
        Ok(&self.document)
    }

    /// [`Self::patch`] with any serializable partial, such as a struct whose
    /// unset fields are skipped.
    pub fn patch_typed<P: Serialize>(&mut self, path: &str, partial: &P) -> Result<&D, StateError> {
        let partial = serde_json::to_value(partial)?;
        self.patch(path, partial)
    }

    /// Append `record` to the list at `list_path`. Returns its index.
    ///
    /// The record carries its own caller-assigned `id` and `serialNumber`;
    /// see [`Self::next_record_id`].
    pub fn append_record<R: Serialize>(
        &mut self,
        list_path: &str,
        record: &R,
    ) -> Result<usize, StateError> {
        let path = FieldPath::parse(list_path)?;
        let record = serde_json::to_value(record)?;
        let mut index = 0;
        self.mutate(EditAction::AppendRecord, &path, |root| {
            let list = merge::list_at(root, &path)?;
            list.push(record);
            index = list.len() - 1;
            Ok(vec![index.to_string()])
        })?;
        Ok(index)
    }

    /// Shallow-merge `partial` into the record at `index`.
    pub fn update_record(
        &mut self,
        list_path: &str,
        index: usize,
        partial: Value,
    ) -> Result<&D, StateError> {
        let path = FieldPath::parse(list_path)?;
        let item = path.index(index);
        self.mutate(EditAction::UpdateRecord, &item, |root| {
            let len = merge::list_at(root, &path)?.len();
            if index >= len {
                return Err(StateError::RecordNotFound {
                    path: path.to_string(),
                    index,
                    len,
                });
            }
            merge::merge_at(root, &item, partial)
        })?;
        Ok(&self.document)
    }

    /// Remove the record at `index` and return it. Remaining records keep
    /// their order, IDs and serial numbers.
    pub fn remove_record(&mut self, list_path: &str, index: usize) -> Result<Value, StateError> {
        let path = FieldPath::parse(list_path)?;
        let mut removed = Value::Null;
        self.mutate(EditAction::RemoveRecord, &path, |root| {
            let list = merge::list_at(root, &path)?;
            if index >= list.len() {
                return Err(StateError::RecordNotFound {
                    path: path.to_string(),
                    index,
                    len: list.len(),
                });
            }
            removed = list.remove(index);
            Ok(vec![index.to_string()])
        })?;
        Ok(removed)
    }

    /// Rewrite the display `serialNumber` of every record in the list as
    /// 1, 2, 3... in list order. IDs are not touched.
    pub fn renumber_records(&mut self, list_path: &str) -> Result<(), StateError> {
        let path = FieldPath::parse(list_path)?;
        self.mutate(EditAction::RenumberRecords, &path, |root| {
            let list = merge::list_at(root, &path)?;
            let mut written = Vec::with_capacity(list.len());
            for (i, record) in list.iter_mut().enumerate() {
                let Some(serial) = record.get_mut("serialNumber") else {
                    return Err(StateError::Schema {
                        path: path.index(i).to_string(),
                        message: "record has no serialNumber".to_string(),
                    });
                };
                *serial = Value::from(i + 1);
                written.push(i.to_string());
            }
            Ok(written)
        })
        .map(|_| ())
    }

    /// A timestamp-derived record ID (Unix milliseconds), suffixed when a
    /// record in the list already uses it.
    pub fn next_record_id(&self, list_path: &str, now: Timestamp) -> Result<String, StateError> {
        let path = FieldPath::parse(list_path)?;
        let root = self.snapshot()?;
        let list = path
            .resolve(&root)
            .ok_or_else(|| StateError::PathNotFound {
                path: path.to_string(),
            })?
            .as_array()
            .ok_or_else(|| StateError::NotAList {
                path: path.to_string(),
            })?;

        let taken = |id: &str| {
            list.iter()
                .any(|record| record.get("id").and_then(Value::as_str) == Some(id))
        };

        let base = now.as_millisecond().to_string();
        if !taken(&base) {
            return Ok(base);
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken(&candidate) {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    /// The terminal, user-triggered transition to `submitted`.
    ///
    /// Runs the form's submission checklist first, then requires the
    /// document to be `completed`. After this the session refuses edits.
    pub fn submit(&mut self) -> Result<(), StateError> {
        if self.is_submitted() {
            return Err(StateError::Locked);
        }

        let value = self.snapshot()?;
        if let Err(failure) = self.form.validate_submission(&value) {
            warn!(
                document_id = %self.document.id(),
                missing = ?failure.missing,
                "submission blocked"
            );
            return Err(failure.into());
        }

        let status = self.document.status();
        if status != CompletionStatus::Completed {
            return Err(StateError::NotReady { status });
        }

        self.document.set_status(CompletionStatus::Submitted);
        self.document.set_highest_status(CompletionStatus::Submitted);
        info!(document_id = %self.document.id(), form = self.form.id(), "document submitted");
        EditEvent::new(
            self.document.id(),
            EditAction::Submit,
            "status",
            CompletionStatus::Submitted,
        )
        .emit();
        Ok(())
    }

    /// Apply `edit` to a serialized copy, validate it against `D` and commit.
    fn mutate<F>(
        &mut self,
        action: EditAction,
        path: &FieldPath,
        edit: F,
    ) -> Result<Vec<String>, StateError>
    where
        F: FnOnce(&mut Value) -> Result<Vec<String>, StateError>,
    {
        if self.is_submitted() {
            return Err(StateError::Locked);
        }
        if !path
            .first_key()
            .is_some_and(|part| D::PARTS.iter().any(|p| *p == part))
        {
            return Err(StateError::NotEditable {
                path: path.to_string(),
            });
        }

        let mut candidate = serde_json::to_value(&self.document)?;
        let keys = edit(&mut candidate)?;

        let updated: D = serde_json::from_value(candidate.clone()).map_err(|e| StateError::Schema {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let canonical = serde_json::to_value(&updated)?;
        if let Some(unknown) = merge::unknown_keys(&candidate, &canonical).into_iter().next() {
            return Err(StateError::Schema {
                path: path.to_string(),
                message: format!("unknown field '{unknown}'"),
            });
        }

        self.document = updated;
        self.refresh_status(&canonical);

        EditEvent::new(self.document.id(), action, path.to_string(), self.document.status())
            .with_keys(keys.clone())
            .emit();
        Ok(keys)
    }

    fn refresh_status(&mut self, value: &Value) {
        let previous = self.document.status();
        if previous == CompletionStatus::Submitted {
            self.document.set_highest_status(CompletionStatus::Submitted);
            return;
        }

        let derived = self.form.completion_status(value);
        if derived != previous {
            if derived < previous {
                warn!(
                    document_id = %self.document.id(),
                    from = %previous,
                    to = %derived,
                    "completion status regressed"
                );
            } else {
                info!(
                    document_id = %self.document.id(),
                    from = %previous,
                    to = %derived,
                    "completion status advanced"
                );
            }
        }
        self.document.set_status(derived);
        let highest = self.document.highest_status().max(derived);
        self.document.set_highest_status(highest);
    }
}

impl<D: FormDocument> Default for EditSession<D> {
    fn default() -> Self {
        Self::new()
    }
}
