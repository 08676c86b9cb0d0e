use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Workflow stage of a document, derived from which required fields are filled.
///
/// Variants are declared in workflow order, so `Ord` follows the
/// `draft → partOneComplete → partTwoComplete → completed → submitted` chain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CompletionStatus {
    #[default]
    Draft,
    PartOneComplete,
    PartTwoComplete,
    Completed,
    Submitted,
}

impl CompletionStatus {
    /// Levels reached automatically by filling in fields, in order.
    pub const DERIVED_LEVELS: [CompletionStatus; 3] = [
        CompletionStatus::PartOneComplete,
        CompletionStatus::PartTwoComplete,
        CompletionStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Draft => "draft",
            CompletionStatus::PartOneComplete => "partOneComplete",
            CompletionStatus::PartTwoComplete => "partTwoComplete",
            CompletionStatus::Completed => "completed",
            CompletionStatus::Submitted => "submitted",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FormKind {
    /// Kenya Police P3 medical examination report, full official layout.
    P3Official,
    /// Shortened P3 layout used by outreach clinics.
    P3Simplified,
    /// MOH 363 post-rape care form.
    Moh363,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::P3Official => "p3Official",
            FormKind::P3Simplified => "p3Simplified",
            FormKind::Moh363 => "moh363",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p3Official" => Ok(FormKind::P3Official),
            "p3Simplified" => Ok(FormKind::P3Simplified),
            "moh363" => Ok(FormKind::Moh363),
            other => Err(CoreError::UnknownForm(other.to_string())),
        }
    }
}
