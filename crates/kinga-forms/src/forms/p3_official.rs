use kinga_core::{CompletionStatus, FormKind};

use crate::requirement::Requirement;
use crate::{FormDefinition, PartDef, StatusRule};

/// P3: Kenya Police medical examination report, official layout.
/// Part One is the police request, Part Two the practitioner's findings.
pub struct P3Official;

const SEX: &str = "partOne.patientDetails.sex";

static PARTS: [PartDef; 2] = [
    PartDef {
        key: "partOne",
        title: "Part One: Police",
        unlocked_at: CompletionStatus::Draft,
    },
    PartDef {
        key: "partTwo",
        title: "Part Two: Medical Examination",
        unlocked_at: CompletionStatus::PartOneComplete,
    },
];

static PART_ONE: [Requirement; 8] = [
    Requirement::filled("partOne.policeDetails.obNumber", "OB number"),
    Requirement::filled("partOne.policeDetails.policeStation", "Police station"),
    Requirement::filled("partOne.policeDetails.offenceNature", "Nature of offence"),
    Requirement::filled("partOne.policeDetails.offenceDate", "Date of offence"),
    Requirement::filled("partOne.patientDetails.fullName", "Patient name"),
    Requirement::filled("partOne.patientDetails.age", "Patient age"),
    Requirement::filled(SEX, "Patient sex"),
    Requirement::Nested {
        at: "partOne.requestingOfficer",
        require: &[
            Requirement::filled("name", "Requesting officer name"),
            Requirement::filled("designation", "Requesting officer rank"),
        ],
    },
];

static PART_TWO: [Requirement; 11] = [
    Requirement::filled("partTwo.practitionerDetails.fullName", "Examiner name"),
    Requirement::filled(
        "partTwo.practitionerDetails.registrationNumber",
        "Examiner registration number",
    ),
    Requirement::filled("partTwo.practitionerDetails.facilityName", "Facility"),
    Requirement::filled("partTwo.practitionerDetails.examinationDate", "Examination date"),
    Requirement::filled("partTwo.consent.consentGiven", "Consent recorded"),
    Requirement::filled("partTwo.medicalHistory.presentingComplaint", "Presenting complaint"),
    Requirement::filled("partTwo.generalExamination.generalCondition", "General condition"),
    Requirement::filled("partTwo.generalExamination.mentalState", "Mental state"),
    Requirement::filled("partTwo.regionalExamination.headAndNeck", "Head and neck"),
    Requirement::When {
        discriminator: SEX,
        equals: "female",
        at: "partTwo.genitalExamination.female",
        require: &[
            Requirement::filled("hymen", "Hymen"),
            Requirement::filled("perineum", "Perineum"),
            Requirement::filled("findings", "Genital findings"),
        ],
    },
    Requirement::When {
        discriminator: SEX,
        equals: "male",
        at: "partTwo.genitalExamination.male",
        require: &[
            Requirement::filled("penis", "Penis"),
            Requirement::filled("perineum", "Perineum"),
            Requirement::filled("findings", "Genital findings"),
        ],
    },
];

static SIGN_OFF: [Requirement; 3] = [
    Requirement::filled("partTwo.conclusion.degreeOfInjury", "Degree of injury"),
    Requirement::filled("partTwo.conclusion.opinion", "Medical opinion"),
    Requirement::Nested {
        at: "partTwo.conclusion.examinerSignature",
        require: &[
            Requirement::filled("name", "Examiner signature"),
            Requirement::filled("signatureDate", "Date signed"),
        ],
    },
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

static CHECKLIST: [Requirement; 5] = [
    Requirement::filled("partOne.patientDetails.fullName", "Patient name"),
    Requirement::filled("partOne.policeDetails.obNumber", "OB number"),
    Requirement::filled("partOne.policeDetails.offenceNature", "Nature of offence"),
    Requirement::affirmed("partTwo.consent.consentGiven", "Consent given"),
    Requirement::filled("partTwo.practitionerDetails.fullName", "Examiner name"),
];

impl FormDefinition for P3Official {
    fn name(&self) -> &str {
        "P3 Medical Examination Report"
    }

    fn kind(&self) -> FormKind {
        FormKind::P3Official
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
