//! kinga-forms
//!
//! Declarative form definitions. Pure data: for each form variant, the Parts
//! it is made of, the required fields behind every completion level, and the
//! checklist that gates submission.

pub mod error;
pub mod forms;
pub mod requirement;

use kinga_core::{CompletionStatus, FormKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use error::{FormError, ValidationFailure};
use requirement::{FieldCheck, Requirement};

/// A top-level Part of a form and the status that opens it for editing.
#[derive(Debug, Clone, Copy)]
pub struct PartDef {
    pub key: &'static str,
    pub title: &'static str,
    pub unlocked_at: CompletionStatus,
}

/// Fields that must all be satisfied for a document to reach `level`.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    pub level: CompletionStatus,
    /// Part whose progress these fields count towards.
    pub part: &'static str,
    pub require: &'static [Requirement],
}

/// Fill-in progress of one Part, for section navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartProgress {
    pub part: String,
    pub title: String,
    pub satisfied: usize,
    pub required: usize,
    pub missing: Vec<String>,
}

impl PartProgress {
    pub fn is_complete(&self) -> bool {
        self.satisfied == self.required
    }
}

/// Trait implemented by each form variant.
pub trait FormDefinition: Send + Sync {
    /// Stable identifier, matching [`FormKind::as_str`].
    fn id(&self) -> &str {
        self.kind().as_str()
    }

    /// Human-readable name (e.g., "P3 Medical Examination Report").
    fn name(&self) -> &str;

    fn kind(&self) -> FormKind;

    fn parts(&self) -> &[PartDef];

    /// Rules for the automatically derived levels, in workflow order.
    fn status_rules(&self) -> &[StatusRule];

    /// Fields checked once, right before the terminal submit transition.
    fn submission_checklist(&self) -> &[Requirement];

    fn part(&self, key: &str) -> Option<&PartDef> {
        self.parts().iter().find(|p| p.key == key)
    }

    /// Highest level whose rule, and every earlier rule, is satisfied.
    ///
    /// Never returns [`CompletionStatus::Submitted`]; that transition is an
    /// explicit action. Missing or mistyped fields count as unsatisfied.
    fn completion_status(&self, document: &Value) -> CompletionStatus {
        let mut reached = CompletionStatus::Draft;
        for rule in self.status_rules() {
            if !rule.require.iter().all(|r| r.is_satisfied(document)) {
                break;
            }
            reached = rule.level;
        }
        reached
    }

    /// Unsatisfied fields standing between the document and `level`,
    /// including those of every earlier level.
    fn missing_for(&self, level: CompletionStatus, document: &Value) -> Vec<FieldCheck> {
        self.status_rules()
            .iter()
            .filter(|rule| rule.level <= level)
            .flat_map(|rule| rule.require.iter())
            .flat_map(|r| r.check(document))
            .filter(|check| !check.satisfied)
            .collect()
    }

    fn part_progress(&self, document: &Value) -> Vec<PartProgress> {
        self.parts()
            .iter()
            .map(|part| {
                let checks: Vec<FieldCheck> = self
                    .status_rules()
                    .iter()
                    .filter(|rule| rule.part == part.key)
                    .flat_map(|rule| rule.require.iter())
                    .flat_map(|r| r.check(document))
                    .collect();
                PartProgress {
                    part: part.key.to_string(),
                    title: part.title.to_string(),
                    satisfied: checks.iter().filter(|c| c.satisfied).count(),
                    required: checks.len(),
                    missing: checks
                        .into_iter()
                        .filter(|c| !c.satisfied)
                        .map(|c| c.label)
                        .collect(),
                }
            })
            .collect()
    }

    /// Whether `part` may be opened once the document has reached `reached`.
    /// Unknown parts are never unlocked.
    fn is_part_unlocked(&self, part: &str, reached: CompletionStatus) -> bool {
        self.part(part).is_some_and(|p| reached >= p.unlocked_at)
    }

    /// Run the submission checklist, listing the labels of every failed item
    /// in checklist order.
    fn validate_submission(&self, document: &Value) -> Result<(), ValidationFailure> {
        let missing: Vec<String> = self
            .submission_checklist()
            .iter()
            .flat_map(|r| r.check(document))
            .filter(|check| !check.satisfied)
            .map(|check| check.label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                form: self.kind(),
                missing,
            })
        }
    }
}

/// Return all registered form definitions.
pub fn all_forms() -> Vec<Box<dyn FormDefinition>> {
    vec![
        Box::new(forms::p3_official::P3Official),
        Box::new(forms::p3_simplified::P3Simplified),
        Box::new(forms::moh363::Moh363),
    ]
}

/// The definition for a form variant.
pub fn definition(kind: FormKind) -> Box<dyn FormDefinition> {
    match kind {
        FormKind::P3Official => Box::new(forms::p3_official::P3Official),
        FormKind::P3Simplified => Box::new(forms::p3_simplified::P3Simplified),
        FormKind::Moh363 => Box::new(forms::moh363::Moh363),
    }
}

/// Look up a form definition by ID.
pub fn get_form(id: &str) -> Result<Box<dyn FormDefinition>, FormError> {
    all_forms()
        .into_iter()
        .find(|f| f.id() == id)
        .ok_or_else(|| FormError::UnknownForm(id.to_string()))
}
