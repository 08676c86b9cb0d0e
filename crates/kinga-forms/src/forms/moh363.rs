use kinga_core::{CompletionStatus, FormKind};

use crate::requirement::Requirement;
use crate::{FormDefinition, PartDef, StatusRule};

/// MOH 363: post-rape care form. Part A is the medical record, Part B the
/// psychological assessment and counselling plan.
pub struct Moh363;

const SEX: &str = "partA.patientDetails.sex";

static PARTS: [PartDef; 2] = [
    PartDef {
        key: "partA",
        title: "Part A: Medical",
        unlocked_at: CompletionStatus::Draft,
    },
    PartDef {
        key: "partB",
        title: "Part B: Psychological Assessment",
        unlocked_at: CompletionStatus::PartOneComplete,
    },
];

static PART_A: [Requirement; 14] = [
    Requirement::filled("partA.facility.facilityName", "Facility"),
    Requirement::filled("partA.patientDetails.fullName", "Patient name"),
    Requirement::filled("partA.patientDetails.age", "Patient age"),
    Requirement::filled(SEX, "Patient sex"),
    Requirement::filled("partA.incident.incidentDate", "Date of incident"),
    Requirement::filled("partA.incident.location", "Place of incident"),
    Requirement::filled("partA.incident.assaultType", "Type of assault"),
    Requirement::filled("partA.consent.consentGiven", "Consent recorded"),
    Requirement::filled("partA.examination.generalCondition", "General condition"),
    Requirement::filled("partA.treatment.pepAdministered", "PEP given"),
    Requirement::filled("partA.examiner.fullName", "Examiner name"),
    Requirement::When {
        discriminator: SEX,
        equals: "female",
        at: "partA",
        require: &[
            Requirement::filled("treatment.ecAdministered", "Emergency contraception given"),
            Requirement::filled("medicalHistory.pregnancyStatus", "Pregnancy status"),
            Requirement::filled("examination.genitalExamination.female.findings", "Genital findings"),
        ],
    },
    Requirement::When {
        discriminator: SEX,
        equals: "male",
        at: "partA.examination.genitalExamination.male",
        require: &[Requirement::filled("findings", "Genital findings")],
    },
    Requirement::filled("partA.examiner.examinationDate", "Examination date"),
];

static PART_B: [Requirement; 6] = [
    Requirement::filled(
        "partB.psychologicalAssessment.generalAppearance",
        "General appearance",
    ),
    Requirement::filled("partB.psychologicalAssessment.mood", "Mood"),
    Requirement::filled("partB.psychologicalAssessment.affect", "Affect"),
    Requirement::filled("partB.psychologicalAssessment.thoughtContent", "Thought content"),
    Requirement::filled("partB.psychologicalAssessment.suicidalIdeation", "Suicidal ideation"),
    Requirement::filled("partB.psychologicalAssessment.riskLevel", "Risk level"),
];

static SIGN_OFF: [Requirement; 1] = [Requirement::Nested {
    at: "partB.counselling",
    require: &[
        Requirement::filled("counsellorName", "Counsellor name"),
        Requirement::filled("sessionDate", "Counselling date"),
    ],
}];

static STATUS_RULES: [StatusRule; 3] = [
    StatusRule {
        level: CompletionStatus::PartOneComplete,
        part: "partA",
        require: &PART_A,
    },
    StatusRule {
        level: CompletionStatus::PartTwoComplete,
        part: "partB",
        require: &PART_B,
    },
    StatusRule {
        level: CompletionStatus::Completed,
        part: "partB",
        require: &SIGN_OFF,
    },
];

static CHECKLIST: [Requirement; 5] = [
    Requirement::filled("partA.patientDetails.fullName", "Patient name"),
    Requirement::filled("partA.incident.incidentDate", "Date of incident"),
    Requirement::affirmed("partA.consent.consentGiven", "Consent given"),
    Requirement::filled("partA.examiner.fullName", "Examiner name"),
    Requirement::filled("partB.counselling.counsellorName", "Counsellor name"),
];

impl FormDefinition for Moh363 {
    fn name(&self) -> &str {
        "MOH 363 Post-Rape Care Form"
    }

    fn kind(&self) -> FormKind {
        FormKind::Moh363
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
