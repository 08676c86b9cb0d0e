//! Kenya Police P3 medical examination report, official layout.
//!
//! Part One is completed by the police; Part Two by the examining
//! practitioner.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::common::{
    Consent, GenitalExamination, PatientDetails, PoliceDetails, PractitionerDetails, Signatory,
};
use super::records::{ChainOfCustody, EvidenceItem, InjuryItem};
use super::status::{CompletionStatus, FormKind};
use crate::document::FormDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3Document {
    pub id: Uuid,
    pub status: CompletionStatus,
    /// Furthest status ever reached. Drives part navigation and is kept
    /// when `status` drops after a required field is cleared.
    #[serde(default)]
    pub highest_status: CompletionStatus,
    pub part_one: P3PartOne,
    pub part_two: P3PartTwo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3PartOne {
    pub police_details: PoliceDetails,
    pub patient_details: PatientDetails,
    pub requesting_officer: Signatory,
    pub escorting_officer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct P3PartTwo {
    pub practitioner_details: PractitionerDetails,
    pub consent: Consent,
    pub medical_history: MedicalHistory,
    pub general_examination: GeneralExamination,
    pub regional_examination: RegionalExamination,
    pub injuries: Vec<InjuryItem>,
    pub genital_examination: GenitalExamination,
    pub evidence: Vec<EvidenceItem>,
    pub chain_of_custody: ChainOfCustody,
    pub conclusion: Conclusion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MedicalHistory {
    pub presenting_complaint: String,
    pub past_medical_history: String,
    pub current_medication: String,
    pub allergies: String,
    pub treatment_received: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneralExamination {
    pub general_condition: String,
    pub clothing_condition: String,
    pub mental_state: String,
    pub signs_of_intoxication: Option<bool>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegionalExamination {
    pub head_and_neck: String,
    pub thorax: String,
    pub abdomen: String,
    pub upper_limbs: String,
    pub lower_limbs: String,
}

/// Legal classification of the injuries under the Penal Code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DegreeOfInjury {
    Harm,
    GrievousHarm,
    Maim,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Conclusion {
    pub degree_of_injury: Option<DegreeOfInjury>,
    pub probable_weapon: String,
    pub opinion: String,
    pub examiner_signature: Signatory,
}

impl FormDocument for P3Document {
    const KIND: FormKind = FormKind::P3Official;
    const PARTS: &'static [&'static str] = &["partOne", "partTwo"];

    fn blank(id: Uuid) -> Self {
        Self {
            id,
            status: CompletionStatus::Draft,
            highest_status: CompletionStatus::Draft,
            part_one: P3PartOne::default(),
            part_two: P3PartTwo::default(),
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
