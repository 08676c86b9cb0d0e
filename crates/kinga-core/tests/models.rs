use kinga_core::models::moh363::Moh363Document;
use kinga_core::models::p3::P3Document;
use kinga_core::models::p3_simplified::P3SimplifiedDocument;
use kinga_core::{CompletionStatus, FormDocument, FormKind};
use uuid::Uuid;

fn top_level_keys<D: FormDocument>(doc: &D) -> Vec<String> {
    let value = serde_json::to_value(doc).unwrap();
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[test]
fn blank_documents_expose_exactly_their_parts() {
    let id = Uuid::new_v4();

    let p3 = P3Document::blank(id);
    assert_eq!(top_level_keys(&p3), ["highestStatus", "id", "partOne", "partTwo", "status"]);

    let simplified = P3SimplifiedDocument::blank(id);
    assert_eq!(top_level_keys(&simplified), ["highestStatus", "id", "partOne", "partTwo", "status"]);

    let prc = Moh363Document::blank(id);
    assert_eq!(top_level_keys(&prc), ["highestStatus", "id", "partA", "partB", "status"]);
}

#[test]
fn blank_document_starts_as_draft() {
    let doc = Moh363Document::blank(Uuid::new_v4());
    assert_eq!(doc.status(), CompletionStatus::Draft);
    assert_eq!(Moh363Document::KIND, FormKind::Moh363);
}

#[test]
fn unset_leaves_serialize_as_empty_or_null() {
    let value = serde_json::to_value(P3Document::blank(Uuid::new_v4())).unwrap();
    let patient = &value["partOne"]["patientDetails"];
    assert_eq!(patient["fullName"], "");
    assert!(patient["sex"].is_null());
    assert!(patient["age"].is_null());
    assert_eq!(value["partTwo"]["injuries"], serde_json::json!([]));
    assert_eq!(value["status"], "draft");
}

#[test]
fn status_order_follows_workflow() {
    assert!(CompletionStatus::Draft < CompletionStatus::PartOneComplete);
    assert!(CompletionStatus::PartOneComplete < CompletionStatus::PartTwoComplete);
    assert!(CompletionStatus::PartTwoComplete < CompletionStatus::Completed);
    assert!(CompletionStatus::Completed < CompletionStatus::Submitted);
}

#[test]
fn form_kind_round_trips_through_its_name() {
    for kind in [FormKind::P3Official, FormKind::P3Simplified, FormKind::Moh363] {
        assert_eq!(kind.as_str().parse::<FormKind>().unwrap(), kind);
    }
    assert!("p4".parse::<FormKind>().is_err());
}

#[test]
fn drafts_saved_without_a_high_mark_load_as_draft() {
    let mut value = serde_json::to_value(P3Document::blank(Uuid::nil())).unwrap();
    value.as_object_mut().unwrap().remove("highestStatus");
    value["status"] = serde_json::json!("partOneComplete");

    let doc: P3Document = serde_json::from_value(value).unwrap();
    assert_eq!(doc.highest_status(), CompletionStatus::Draft);
    assert_eq!(doc.status(), CompletionStatus::PartOneComplete);
}
