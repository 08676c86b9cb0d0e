use kinga_core::models::moh363::Moh363Document;
use kinga_core::models::p3_simplified::P3SimplifiedDocument;
use kinga_core::{CompletionStatus, FormDocument};
use kinga_state::{EditSession, StateError};
use serde_json::json;

fn fill_part_one(s: &mut EditSession<P3SimplifiedDocument>) {
    s.patch(
        "partOne.policeDetails",
        json!({
            "obNumber": "OB/45/03/2024",
            "policeStation": "Kisumu Central",
            "offenceNature": "Defilement"
        }),
    )
    .unwrap();
    s.patch(
        "partOne.patientDetails",
        json!({ "fullName": "Atieno O.", "age": 15, "sex": "female" }),
    )
    .unwrap();
}

fn fill_part_two(s: &mut EditSession<P3SimplifiedDocument>) {
    s.patch(
        "partTwo.practitionerDetails",
        json!({ "fullName": "Dr. Were", "registrationNumber": "B778" }),
    )
    .unwrap();
    s.patch("partTwo.consent", json!({ "consentGiven": true, "consentedBy": "Mother" }))
        .unwrap();
    s.patch(
        "partTwo.findings",
        json!({
            "history": "Assaulted on way from school",
            "generalCondition": "Distressed",
            "genitalFindings": "Fresh hymenal tear"
        }),
    )
    .unwrap();
}

fn sign_off(s: &mut EditSession<P3SimplifiedDocument>) {
    s.patch(
        "partTwo.conclusion",
        json!({ "degreeOfInjury": "grievousHarm", "opinion": "Consistent with penetration" }),
    )
    .unwrap();
    s.patch("partTwo.conclusion.examinerSignature", json!({ "name": "Dr. Were" }))
        .unwrap();
}

#[test]
fn status_advances_automatically_with_each_patch() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    assert_eq!(s.status(), CompletionStatus::Draft);

    fill_part_one(&mut s);
    assert_eq!(s.status(), CompletionStatus::PartOneComplete);
    assert_eq!(s.document().status(), CompletionStatus::PartOneComplete);

    fill_part_two(&mut s);
    assert_eq!(s.status(), CompletionStatus::PartTwoComplete);

    sign_off(&mut s);
    assert_eq!(s.status(), CompletionStatus::Completed);
    assert_eq!(s.snapshot().unwrap()["status"], "completed");
}

#[test]
fn clearing_a_field_lowers_status_but_not_the_pinned_high_mark() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);
    assert!(s.is_unlocked("partTwo"));

    s.patch("partOne.patientDetails", json!({ "fullName": "  " }))
        .unwrap();
    assert_eq!(s.status(), CompletionStatus::Draft);
    assert_eq!(s.highest_status(), CompletionStatus::PartOneComplete);
    assert!(s.is_unlocked("partTwo"));
}

#[test]
fn part_two_is_locked_for_navigation_until_part_one_is_done() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    assert!(s.is_unlocked("partOne"));
    assert!(!s.is_unlocked("partTwo"));

    // Navigation gating does not restrict the engine itself.
    s.patch("partTwo.findings", json!({ "history": "Early notes" }))
        .unwrap();
    assert!(!s.is_unlocked("partTwo"));
}

#[test]
fn submit_lists_missing_checklist_fields() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);

    let failure = match s.submit() {
        Err(StateError::Validation(failure)) => failure,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert_eq!(failure.missing, ["Consent given", "Examiner name"]);
    assert_eq!(s.status(), CompletionStatus::PartOneComplete);
}

#[test]
fn submit_requires_completed_status() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);
    fill_part_two(&mut s);

    assert!(matches!(
        s.submit(),
        Err(StateError::NotReady {
            status: CompletionStatus::PartTwoComplete
        })
    ));
}

#[test]
fn submission_is_terminal() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);
    fill_part_two(&mut s);
    sign_off(&mut s);

    s.submit().unwrap();
    assert!(s.is_submitted());
    assert_eq!(s.highest_status(), CompletionStatus::Submitted);

    assert!(matches!(
        s.patch("partTwo.findings", json!({ "summary": "late edit" })),
        Err(StateError::Locked)
    ));
    assert!(matches!(
        s.remove_record("partTwo.injuries", 0),
        Err(StateError::Locked)
    ));
    assert!(matches!(s.submit(), Err(StateError::Locked)));
    assert_eq!(s.status(), CompletionStatus::Submitted);
}

#[test]
fn resume_rederives_a_stale_status() {
    let mut doc = Moh363Document::blank(uuid::Uuid::nil());
    doc.status = CompletionStatus::Completed;

    let s = EditSession::resume(doc);
    assert_eq!(s.status(), CompletionStatus::Draft);
    assert_eq!(s.highest_status(), CompletionStatus::Draft);
    assert!(!s.is_unlocked("partB"));
}

#[test]
fn high_mark_survives_save_and_resume() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);
    s.patch("partOne.policeDetails", json!({ "obNumber": "" }))
        .unwrap();
    assert_eq!(s.status(), CompletionStatus::Draft);

    let saved = s.snapshot().unwrap();
    assert_eq!(saved["highestStatus"], "partOneComplete");

    let doc: P3SimplifiedDocument = serde_json::from_value(saved).unwrap();
    let resumed = EditSession::resume(doc);
    assert_eq!(resumed.status(), CompletionStatus::Draft);
    assert_eq!(resumed.highest_status(), CompletionStatus::PartOneComplete);
    assert!(resumed.is_unlocked("partTwo"));
}

#[test]
fn resume_raises_the_high_mark_to_the_derived_status() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);
    let mut doc = s.into_document();
    doc.status = CompletionStatus::Draft;
    doc.highest_status = CompletionStatus::Draft;

    let resumed = EditSession::resume(doc);
    assert_eq!(resumed.status(), CompletionStatus::PartOneComplete);
    assert_eq!(resumed.highest_status(), CompletionStatus::PartOneComplete);
}

#[test]
fn high_mark_is_not_editable() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    assert!(matches!(
        s.patch("", json!({ "highestStatus": "completed" })),
        Err(StateError::NotEditable { .. })
    ));
    assert_eq!(s.highest_status(), CompletionStatus::Draft);
}

#[test]
fn resume_keeps_a_submitted_document_submitted() {
    let mut doc = Moh363Document::blank(uuid::Uuid::nil());
    doc.status = CompletionStatus::Submitted;

    let mut s = EditSession::resume(doc);
    assert!(s.is_submitted());
    assert!(matches!(
        s.patch("partB.counselling", json!({ "referral": "x" })),
        Err(StateError::Locked)
    ));
}

#[test]
fn progress_reports_each_part() {
    let mut s: EditSession<P3SimplifiedDocument> = EditSession::new();
    fill_part_one(&mut s);

    let progress = s.progress().unwrap();
    assert!(progress[0].is_complete());
    assert!(!progress[1].is_complete());
    assert!(progress[1].missing.contains(&"Examiner name".to_string()));
}
