use kinga_core::models::moh363::Moh363Document;
use kinga_core::models::p3::P3Document;
use kinga_core::{FormDocument, FormKind};
use kinga_forms::definition;
use uuid::Uuid;

#[test]
fn blank_p3_lists_every_checklist_label_in_order() {
    let form = definition(FormKind::P3Official);
    let doc = serde_json::to_value(P3Document::blank(Uuid::nil())).unwrap();

    let failure = form.validate_submission(&doc).unwrap_err();
    assert_eq!(failure.form, FormKind::P3Official);
    assert_eq!(
        failure.missing,
        [
            "Patient name",
            "OB number",
            "Nature of offence",
            "Consent given",
            "Examiner name"
        ]
    );
    assert!(failure.to_string().contains("Consent given"));
}

#[test]
fn consent_must_be_given_not_merely_recorded() {
    let form = definition(FormKind::Moh363);
    let mut doc = Moh363Document::blank(Uuid::nil());
    doc.part_a.patient_details.full_name = "Wambui K.".to_string();
    doc.part_a.incident.incident_date = "2024-01-01".to_string();
    doc.part_a.examiner.full_name = "Dr. Otieno".to_string();
    doc.part_b.counselling.counsellor_name = "Mary Akinyi".to_string();
    doc.part_a.consent.consent_given = Some(false);

    let failure = form
        .validate_submission(&serde_json::to_value(&doc).unwrap())
        .unwrap_err();
    assert_eq!(failure.missing, ["Consent given"]);

    doc.part_a.consent.consent_given = Some(true);
    assert!(
        form.validate_submission(&serde_json::to_value(&doc).unwrap())
            .is_ok()
    );
}
