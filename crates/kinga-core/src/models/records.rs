//! Repeating sub-records: ordered, individually addressable list entries.
//!
//! `id` and `serialNumber` are assigned by the caller at append time and are
//! never rewritten on removal; only an explicit renumber touches
//! `serialNumber`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::Signatory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum InjuryType {
    Abrasion,
    Bruise,
    Laceration,
    IncisedWound,
    StabWound,
    Burn,
    Fracture,
    BiteMark,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InjuryItem {
    pub id: String,
    pub serial_number: u32,
    pub body_region: String,
    pub injury_type: Option<InjuryType>,
    pub dimensions: String,
    pub description: String,
    pub probable_cause: String,
    pub approximate_age: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SpecimenType {
    HighVaginalSwab,
    AnalSwab,
    OralSwab,
    Blood,
    Urine,
    Clothing,
    PubicHairCombing,
    NailScrapings,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvidenceItem {
    pub id: String,
    pub serial_number: u32,
    pub specimen_type: Option<SpecimenType>,
    pub description: String,
    pub collected_at: String,
    pub seal_number: String,
}

/// One hand-over of an evidence item between custodians.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustodyEntry {
    pub id: String,
    pub serial_number: u32,
    pub item_description: String,
    pub collected_by: Signatory,
    pub received_by: Signatory,
    pub transferred_at: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChainOfCustody {
    pub entries: Vec<CustodyEntry>,
    pub storage_location: String,
}
