//! MOH 363 post-rape care (PRC) form.
//!
//! Part A is the medical record, including the incident time and the
//! PEP / emergency contraception flags read by the treatment window
//! calculator. Part B is the psychological assessment.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::common::{Consent, GenitalExamination, PatientDetails, PractitionerDetails};
use super::records::{ChainOfCustody, EvidenceItem, InjuryItem};
use super::status::{CompletionStatus, FormKind};
use crate::document::FormDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Moh363Document {
    pub id: Uuid,
    pub status: CompletionStatus,
    /// Furthest status ever reached. Drives part navigation and is kept
    /// when `status` drops after a required field is cleared.
    #[serde(default)]
    pub highest_status: CompletionStatus,
    pub part_a: PrcPartA,
    pub part_b: PrcPartB,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrcPartA {
    pub facility: FacilityDetails,
    pub patient_details: PatientDetails,
    pub incident: IncidentDetails,
    pub consent: Consent,
    pub medical_history: PrcMedicalHistory,
    pub examination: PrcExamination,
    pub injuries: Vec<InjuryItem>,
    pub specimens: Vec<EvidenceItem>,
    pub chain_of_custody: ChainOfCustody,
    pub treatment: Treatment,
    pub examiner: PractitionerDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FacilityDetails {
    pub facility_name: String,
    /// Kenya Master Facility List code.
    pub mfl_code: String,
    pub county: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum AssaultType {
    Vaginal,
    Anal,
    Oral,
    Multiple,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncidentDetails {
    /// `YYYY-MM-DD` as entered.
    pub incident_date: String,
    /// `HH:mm` as entered; blank means the time is unknown.
    pub incident_time: String,
    pub location: String,
    pub assault_type: Option<AssaultType>,
    pub perpetrator_count: Option<u32>,
    pub perpetrator_known: Option<bool>,
    pub condom_used: Option<bool>,
    pub reported_to_police: Option<bool>,
    pub ob_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrcMedicalHistory {
    pub last_menstrual_period: String,
    pub contraception_in_use: String,
    pub pregnancy_status: String,
    pub known_hiv_status: String,
    pub bathed_since_incident: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrcExamination {
    pub general_condition: String,
    pub genital_examination: GenitalExamination,
    pub other_findings: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Treatment {
    pub pep_administered: Option<bool>,
    pub ec_administered: Option<bool>,
    pub sti_prophylaxis: Option<bool>,
    pub tetanus_toxoid: Option<bool>,
    pub hepatitis_b_vaccine: Option<bool>,
    pub referrals: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrcPartB {
    pub psychological_assessment: PsychologicalAssessment,
    pub counselling: Counselling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PsychologicalAssessment {
    pub general_appearance: String,
    pub mood: String,
    pub affect: String,
    pub speech: String,
    pub thought_content: String,
    pub perception: String,
    pub cognitive_function: String,
    pub suicidal_ideation: Option<bool>,
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Counselling {
    pub counsellor_name: String,
    pub session_date: String,
    pub referral: String,
    pub follow_up_date: String,
}

impl FormDocument for Moh363Document {
    const KIND: FormKind = FormKind::Moh363;
    const PARTS: &'static [&'static str] = &["partA", "partB"];

    fn blank(id: Uuid) -> Self {
        Self {
            id,
            status: CompletionStatus::Draft,
            highest_status: CompletionStatus::Draft,
            part_a: PrcPartA::default(),
            part_b: PrcPartB::default(),
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
