use kinga_core::{CompletionStatus, FormKind};

use crate::requirement::Requirement;
use crate::{FormDefinition, PartDef, StatusRule};

/// Simplified P3 layout. Same Parts as the official form with a single
/// free-text findings section in place of the structured examination.
pub struct P3Simplified;

static PARTS: [PartDef; 2] = [
    PartDef {
        key: "partOne",
        title: "Part One: Police",
        unlocked_at: CompletionStatus::Draft,
    },
    PartDef {
        key: "partTwo",
        title: "Part Two: Findings",
        unlocked_at: CompletionStatus::PartOneComplete,
    },
];

static PART_ONE: [Requirement; 6] = [
    Requirement::filled("partOne.policeDetails.obNumber", "OB number"),
    Requirement::filled("partOne.policeDetails.policeStation", "Police station"),
    Requirement::filled("partOne.policeDetails.offenceNature", "Nature of offence"),
    Requirement::filled("partOne.patientDetails.fullName", "Patient name"),
    Requirement::filled("partOne.patientDetails.age", "Patient age"),
    Requirement::filled("partOne.patientDetails.sex", "Patient sex"),
];

static PART_TWO: [Requirement; 6] = [
    Requirement::filled("partTwo.practitionerDetails.fullName", "Examiner name"),
    Requirement::filled(
        "partTwo.practitionerDetails.registrationNumber",
        "Examiner registration number",
    ),
    Requirement::filled("partTwo.consent.consentGiven", "Consent recorded"),
    Requirement::filled("partTwo.findings.history", "History"),
    Requirement::filled("partTwo.findings.generalCondition", "General condition"),
    Requirement::filled("partTwo.findings.genitalFindings", "Genital findings"),
];

static SIGN_OFF: [Requirement; 3] = [
    Requirement::filled("partTwo.conclusion.degreeOfInjury", "Degree of injury"),
    Requirement::filled("partTwo.conclusion.opinion", "Medical opinion"),
    Requirement::filled("partTwo.conclusion.examinerSignature.name", "Examiner signature"),
];

static STATUS_RULES: [StatusRule; 3] = [
    StatusRule {
        level: CompletionStatus::PartOneComplete,
        part: "partOne",
        require: &PART_ONE,
    },
    StatusRule {
        level: CompletionStatus::PartTwoComplete,
        part: "partTwo",
        require: &PART_TWO,
    },
    StatusRule {
        level: CompletionStatus::Completed,
        part: "partTwo",
        require: &SIGN_OFF,
    },
];

static CHECKLIST: [Requirement; 4] = [
    Requirement::filled("partOne.patientDetails.fullName", "Patient name"),
    Requirement::filled("partOne.policeDetails.offenceNature", "Nature of offence"),
    Requirement::affirmed("partTwo.consent.consentGiven", "Consent given"),
    Requirement::filled("partTwo.practitionerDetails.fullName", "Examiner name"),
];

impl FormDefinition for P3Simplified {
    fn name(&self) -> &str {
        "P3 Medical Examination Report (Simplified)"
    }

    fn kind(&self) -> FormKind {
        FormKind::P3Simplified
    }

    fn parts(&self) -> &[PartDef] {
        &PARTS
    }

    fn status_rules(&self) -> &[StatusRule] {
        &STATUS_RULES
    }

    fn submission_checklist(&self) -> &[Requirement] {
        &CHECKLIST
    }
}
