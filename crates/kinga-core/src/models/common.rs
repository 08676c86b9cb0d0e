//! Sections shared by more than one form variant.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// The person the form is about (complainant / survivor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientDetails {
    pub full_name: String,
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub id_number: String,
    pub residence: String,
    pub phone_number: String,
}

/// Police reference block filled in by the requesting station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PoliceDetails {
    pub ob_number: String,
    pub police_station: String,
    pub offence_nature: String,
    /// `YYYY-MM-DD` as entered.
    pub offence_date: String,
    /// `HH:mm` as entered.
    pub offence_time: String,
    pub date_reported: String,
    pub brief_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PractitionerDetails {
    pub full_name: String,
    pub qualifications: String,
    pub registration_number: String,
    pub facility_name: String,
    pub examination_date: String,
    pub examination_time: String,
}

/// A named person signing off on a step (officer, examiner, custodian).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Signatory {
    pub name: String,
    pub designation: String,
    pub signature_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Consent {
    pub consent_given: Option<bool>,
    /// Who gave consent when the patient cannot (minor, incapacitated).
    pub consented_by: String,
    pub relationship_to_patient: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FemaleGenitalExamination {
    pub labia: String,
    pub hymen: String,
    pub vagina: String,
    pub cervix: String,
    pub perineum: String,
    pub anus: String,
    pub discharge_present: Option<bool>,
    pub findings: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MaleGenitalExamination {
    pub penis: String,
    pub scrotum: String,
    pub perineum: String,
    pub anus: String,
    pub discharge_present: Option<bool>,
    pub findings: String,
}

/// Both layouts are always present; which one is required depends on
/// `patientDetails.sex`, which this section never writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GenitalExamination {
    pub female: FemaleGenitalExamination,
    pub male: MaleGenitalExamination,
}
