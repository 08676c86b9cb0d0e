use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::models::status::{CompletionStatus, FormKind};

/// A root clinical record of one form variant.
///
/// The set of Parts is fixed by the variant: editing only ever changes leaf
/// values inside them, never the shape of the tree.
pub trait FormDocument: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Which form variant this document type holds.
    const KIND: FormKind;

    /// Serialized keys of the top-level Parts, in form order.
    const PARTS: &'static [&'static str];

    /// A document with every field unset.
    fn blank(id: Uuid) -> Self;

    fn id(&self) -> Uuid;

    fn status(&self) -> CompletionStatus;

    fn set_status(&mut self, status: CompletionStatus);

    /// Furthest status the document has reached across every session.
    fn highest_status(&self) -> CompletionStatus;

    fn set_highest_status(&mut self, status: CompletionStatus);
}
