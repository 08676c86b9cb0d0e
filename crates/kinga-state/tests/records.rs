use jiff::Timestamp;
use kinga_core::models::common::Signatory;
use kinga_core::models::moh363::Moh363Document;
use kinga_core::models::records::{CustodyEntry, EvidenceItem, InjuryItem, SpecimenType};
use kinga_state::{EditSession, StateError};
use serde_json::json;

const SPECIMENS: &str = "partA.specimens";
const CUSTODY: &str = "partA.chainOfCustody.entries";

fn specimen(id: &str, serial: u32, seal: &str) -> EvidenceItem {
    EvidenceItem {
        id: id.to_string(),
        serial_number: serial,
        specimen_type: Some(SpecimenType::HighVaginalSwab),
        seal_number: seal.to_string(),
        ..Default::default()
    }
}

fn with_three_specimens() -> EditSession<Moh363Document> {
    let mut s = EditSession::new();
    for (i, seal) in ["S-1", "S-2", "S-3"].iter().enumerate() {
        s.append_record(SPECIMENS, &specimen(&format!("id-{i}"), i as u32 + 1, seal))
            .unwrap();
    }
    s
}

#[test]
fn append_adds_exactly_one_record_at_the_end() {
    let mut s = with_three_specimens();
    let index = s
        .append_record(SPECIMENS, &specimen("id-9", 4, "S-9"))
        .unwrap();

    let specimens = &s.document().part_a.specimens;
    assert_eq!(index, 3);
    assert_eq!(specimens.len(), 4);
    assert_eq!(specimens[3], specimen("id-9", 4, "S-9"));
}

#[test]
fn remove_keeps_order_ids_and_serials() {
    let mut s = with_three_specimens();
    let removed = s.remove_record(SPECIMENS, 1).unwrap();
    assert_eq!(removed["sealNumber"], "S-2");

    let specimens = &s.document().part_a.specimens;
    assert_eq!(specimens.len(), 2);
    assert_eq!(specimens[0].id, "id-0");
    assert_eq!(specimens[1].id, "id-2");
    assert_eq!(specimens[1].serial_number, 3);
}

#[test]
fn renumber_rewrites_display_serials_only() {
    let mut s = with_three_specimens();
    s.remove_record(SPECIMENS, 0).unwrap();
    s.renumber_records(SPECIMENS).unwrap();

    let specimens = &s.document().part_a.specimens;
    assert_eq!(specimens[0].serial_number, 1);
    assert_eq!(specimens[1].serial_number, 2);
    assert_eq!(specimens[0].id, "id-1");
    assert_eq!(specimens[1].id, "id-2");
}

#[test]
fn update_merges_into_one_record() {
    let mut s = with_three_specimens();
    s.update_record(SPECIMENS, 2, json!({ "description": "Swab, dried" }))
        .unwrap();

    let specimens = &s.document().part_a.specimens;
    assert_eq!(specimens[2].description, "Swab, dried");
    assert_eq!(specimens[2].seal_number, "S-3");
    assert_eq!(specimens[1].description, "");
}

#[test]
fn out_of_range_index_is_record_not_found() {
    let mut s = with_three_specimens();
    let before = s.snapshot().unwrap();

    assert!(matches!(
        s.update_record(SPECIMENS, 3, json!({ "description": "x" })),
        Err(StateError::RecordNotFound { index: 3, len: 3, .. })
    ));
    assert!(matches!(
        s.remove_record(SPECIMENS, 7),
        Err(StateError::RecordNotFound { index: 7, len: 3, .. })
    ));
    assert_eq!(s.snapshot().unwrap(), before);
}

#[test]
fn record_operations_need_a_list() {
    let mut s = with_three_specimens();
    assert!(matches!(
        s.append_record("partA.incident", &specimen("x", 1, "S")),
        Err(StateError::NotAList { .. })
    ));
    assert!(matches!(
        s.remove_record("partA.nothing", 0),
        Err(StateError::PathNotFound { .. })
    ));
}

#[test]
fn appended_records_must_fit_the_list_schema() {
    let mut s = with_three_specimens();
    let injury = InjuryItem {
        id: "inj-1".to_string(),
        serial_number: 1,
        ..Default::default()
    };
    let err = s.append_record(SPECIMENS, &injury).unwrap_err();
    assert!(matches!(err, StateError::Schema { .. }));
    assert_eq!(s.document().part_a.specimens.len(), 3);
}

#[test]
fn nested_objects_inside_records_merge_by_path() {
    let mut s: EditSession<Moh363Document> = EditSession::new();
    let entry = CustodyEntry {
        id: "c-1".to_string(),
        serial_number: 1,
        item_description: "HVS swab".to_string(),
        collected_by: Signatory {
            name: "Dr. Otieno".to_string(),
            designation: "Medical Officer".to_string(),
            signature_date: String::new(),
        },
        ..Default::default()
    };
    s.append_record(CUSTODY, &entry).unwrap();

    s.patch(
        "partA.chainOfCustody.entries.0.collectedBy",
        json!({ "signatureDate": "2024-01-02" }),
    )
    .unwrap();
    s.update_record(CUSTODY, 0, json!({ "purpose": "Forensic analysis" }))
        .unwrap();

    let stored = &s.document().part_a.chain_of_custody.entries[0];
    assert_eq!(stored.collected_by.name, "Dr. Otieno");
    assert_eq!(stored.collected_by.signature_date, "2024-01-02");
    assert_eq!(stored.purpose, "Forensic analysis");
}

#[test]
fn record_ids_are_timestamp_derived_and_unique_in_the_list() {
    let mut s: EditSession<Moh363Document> = EditSession::new();
    let now = Timestamp::from_millisecond(1_704_067_200_000).unwrap();

    let first = s.next_record_id(SPECIMENS, now).unwrap();
    assert_eq!(first, "1704067200000");
    s.append_record(SPECIMENS, &specimen(&first, 1, "S-1")).unwrap();

    let second = s.next_record_id(SPECIMENS, now).unwrap();
    assert_eq!(second, "1704067200000-1");
    s.append_record(SPECIMENS, &specimen(&second, 2, "S-2")).unwrap();

    assert_eq!(
        s.next_record_id(SPECIMENS, now).unwrap(),
        "1704067200000-2"
    );
}

#[test]
fn renumber_numbers_every_record_in_the_list() {
    let mut s: EditSession<Moh363Document> = EditSession::new();
    for id in ["c-1", "c-2", "c-3"] {
        let entry = CustodyEntry {
            id: id.to_string(),
            ..Default::default()
        };
        s.append_record(CUSTODY, &entry).unwrap();
    }
    s.renumber_records(CUSTODY).unwrap();

    let serials: Vec<u32> = s
        .document()
        .part_a
        .chain_of_custody
        .entries
        .iter()
        .map(|e| e.serial_number)
        .collect();
    assert_eq!(serials, [1, 2, 3]);
}
