//! Shortened P3 layout: the same two Parts with the free-text examination
//! collapsed into a single findings section.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::common::{Consent, PatientDetails, PoliceDetails, PractitionerDetails};
use super::p3::Conclusion;
use super::records::InjuryItem;
use super::status::{CompletionStatus, FormKind};
use crate::document::FormDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3SimplifiedDocument {
    pub id: Uuid,
    pub status: CompletionStatus,
    /// Furthest status ever reached. Drives part navigation and is kept
    /// when `status` drops after a required field is cleared.
    #[serde(default)]
    pub highest_status: CompletionStatus,
    pub part_one: P3SimplifiedPartOne,
    pub part_two: P3SimplifiedPartTwo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3SimplifiedPartOne {
    pub police_details: PoliceDetails,
    pub patient_details: PatientDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3SimplifiedPartTwo {
    pub practitioner_details: PractitionerDetails,
    pub consent: Consent,
    pub findings: SimplifiedFindings,
    pub injuries: Vec<InjuryItem>,
    pub conclusion: Conclusion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimplifiedFindings {
    pub history: String,
    pub general_condition: String,
    pub genital_findings: String,
    pub summary: String,
}

impl FormDocument for P3SimplifiedDocument {
    const KIND: FormKind = FormKind::P3Simplified;
    const PARTS: &'static [&'static str] = &["partOne", "partTwo"];

    fn blank(id: Uuid) -> Self {
        Self {
            id,
            status: CompletionStatus::Draft,
            highest_status: CompletionStatus::Draft,
            part_one: P3SimplifiedPartOne::default(),
            part_two: P3SimplifiedPartTwo::default(),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> CompletionStatus {
        self.status
    }

    fn set_status(&mut self, status: CompletionStatus) {
        self.status = status;
    }

    fn highest_status(&self) -> CompletionStatus {
        self.highest_status
    }

    fn set_highest_status(&mut self, status: CompletionStatus) {
        self.highest_status = status;
    }
}
