//! Record listings and creation acknowledgements.

use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use clinic_persistence::types::{DoctorPatientLink, FieldSet};
use serde_json::{Map, Value};

/// Converts a stored record into a JSON object with its `id`.
///
/// Field values are returned as stored. The `id` key always holds the record
/// identifier, even if the stored hash carries a field of that name.
pub fn record_json(id: u64, fields: FieldSet) -> Value {
    let mut object: Map<String, Value> = fields
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect();
    object.insert("id".to_string(), Value::from(id));
    Value::Object(object)
}

/// Builds a JSON array response from `(id, fields)` pairs.
pub fn records_response(records: Vec<(u64, FieldSet)>) -> Response {
    let items: Vec<Value> = records
        .into_iter()
        .map(|(id, fields)| record_json(id, fields))
        .collect();
    Json(items).into_response()
}

/// Groups links by doctor, with ascending patient ids.
pub fn group_links(links: Vec<DoctorPatientLink>) -> BTreeMap<u64, BTreeSet<u64>> {
    let mut grouped: BTreeMap<u64, BTreeSet<u64>> = BTreeMap::new();
    for link in links {
        grouped
            .entry(link.doctor_id)
            .or_default()
            .insert(link.patient_id);
    }
    grouped
}

/// Success body for a created record: `OK: ID {id} for {label}`.
pub fn created_message(id: u64, label: &str) -> String {
    format!("OK: ID {} for {}", id, label)
}
