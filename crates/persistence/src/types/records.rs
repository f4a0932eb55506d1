//! Typed entity records.
//!
//! Each record type maps one-to-one onto the flat field set that is stored
//! under its composite key. Field names follow the stored layout exactly,
//! including the `hospital_ID` and `patient_ID` spellings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};
use crate::types::{EntityType, FieldSet};

/// A typed record that can be written to and read from the record store.
pub trait EntityRecord: Sized + Send + Sync {
    /// The entity type this record belongs to.
    const ENTITY_TYPE: EntityType;

    /// The names of the stored fields, in a stable order.
    const FIELDS: &'static [&'static str];

    /// Converts the record into its stored form.
    fn to_fields(&self) -> FieldSet;

    /// Decodes a record from its stored form.
    ///
    /// `id` is only used to describe the record in errors.
    fn from_fields(id: u64, fields: &FieldSet) -> StorageResult<Self>;
}

fn required(
    entity_type: EntityType,
    id: u64,
    fields: &FieldSet,
    name: &str,
) -> StorageResult<String> {
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| StorageError::MalformedRecord {
            entity_type,
            id,
            message: format!("missing field '{}'", name),
        })
}

fn parse_id(entity_type: EntityType, id: u64, name: &str, value: &str) -> StorageResult<u64> {
    value.parse().map_err(|_| StorageError::MalformedRecord {
        entity_type,
        id,
        message: format!("field '{}' is not an identifier: {:?}", name, value),
    })
}

fn field_set<const N: usize>(pairs: [(&str, String); N]) -> FieldSet {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// A hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    /// Hospital name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Number of beds, kept as submitted.
    pub beds_number: String,
}

impl EntityRecord for Hospital {
    const ENTITY_TYPE: EntityType = EntityType::Hospital;
    const FIELDS: &'static [&'static str] = &["name", "address", "phone", "beds_number"];

    fn to_fields(&self) -> FieldSet {
        field_set([
            ("name", self.name.clone()),
            ("address", self.address.clone()),
            ("phone", self.phone.clone()),
            ("beds_number", self.beds_number.clone()),
        ])
    }

    fn from_fields(id: u64, fields: &FieldSet) -> StorageResult<Self> {
        let t = Self::ENTITY_TYPE;
        Ok(Self {
            name: required(t, id, fields, "name")?,
            address: required(t, id, fields, "address")?,
            phone: required(t, id, fields, "phone")?,
            beds_number: required(t, id, fields, "beds_number")?,
        })
    }
}

/// A doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Family name.
    pub surname: String,
    /// Medical profession or speciality.
    pub profession: String,
    /// Hospital the doctor works at. Stored as an empty string when absent.
    #[serde(rename = "hospital_ID")]
    pub hospital_id: Option<u64>,
}

impl EntityRecord for Doctor {
    const ENTITY_TYPE: EntityType = EntityType::Doctor;
    const FIELDS: &'static [&'static str] = &["surname", "profession", "hospital_ID"];

    fn to_fields(&self) -> FieldSet {
        field_set([
            ("surname", self.surname.clone()),
            ("profession", self.profession.clone()),
            (
                "hospital_ID",
                self.hospital_id.map(|h| h.to_string()).unwrap_or_default(),
            ),
        ])
    }

    fn from_fields(id: u64, fields: &FieldSet) -> StorageResult<Self> {
        let t = Self::ENTITY_TYPE;
        let hospital = required(t, id, fields, "hospital_ID")?;
        let hospital_id = if hospital.is_empty() {
            None
        } else {
            Some(parse_id(t, id, "hospital_ID", &hospital)?)
        };

        Ok(Self {
            surname: required(t, id, fields, "surname")?,
            profession: required(t, id, fields, "profession")?,
            hospital_id,
        })
    }
}

/// Patient sex as recorded by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Male.
    M,
    /// Female.
    F,
}

impl Sex {
    /// Returns the stored single-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::M),
            "F" => Ok(Sex::F),
            other => Err(format!("invalid sex: {:?}", other)),
        }
    }
}

/// A patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Family name.
    pub surname: String,
    /// Date of birth, kept as submitted.
    pub born_date: String,
    /// Sex.
    pub sex: Sex,
    /// Medical personal number.
    pub mpn: String,
}

impl EntityRecord for Patient {
    const ENTITY_TYPE: EntityType = EntityType::Patient;
    const FIELDS: &'static [&'static str] = &["surname", "born_date", "sex", "mpn"];

    fn to_fields(&self) -> FieldSet {
        field_set([
            ("surname", self.surname.clone()),
            ("born_date", self.born_date.clone()),
            ("sex", self.sex.to_string()),
            ("mpn", self.mpn.clone()),
        ])
    }

    fn from_fields(id: u64, fields: &FieldSet) -> StorageResult<Self> {
        let t = Self::ENTITY_TYPE;
        let sex = required(t, id, fields, "sex")?
            .parse()
            .map_err(|message| StorageError::MalformedRecord {
                entity_type: t,
                id,
                message,
            })?;

        Ok(Self {
            surname: required(t, id, fields, "surname")?,
            born_date: required(t, id, fields, "born_date")?,
            sex,
            mpn: required(t, id, fields, "mpn")?,
        })
    }
}

/// A diagnosis recorded against a patient.
///
/// `patient_id` is expected to name an existing patient, but the store does
/// not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// The diagnosed patient.
    #[serde(rename = "patient_ID")]
    pub patient_id: u64,
    /// Diagnosis type.
    #[serde(rename = "type")]
    pub diagnosis_type: String,
    /// Free-form notes.
    pub information: String,
}

impl EntityRecord for Diagnosis {
    const ENTITY_TYPE: EntityType = EntityType::Diagnosis;
    const FIELDS: &'static [&'static str] = &["patient_ID", "type", "information"];

    fn to_fields(&self) -> FieldSet {
        field_set([
            ("patient_ID", self.patient_id.to_string()),
            ("type", self.diagnosis_type.clone()),
            ("information", self.information.clone()),
        ])
    }

    fn from_fields(id: u64, fields: &FieldSet) -> StorageResult<Self> {
        let t = Self::ENTITY_TYPE;
        let patient = required(t, id, fields, "patient_ID")?;

        Ok(Self {
            patient_id: parse_id(t, id, "patient_ID", &patient)?,
            diagnosis_type: required(t, id, fields, "type")?,
            information: required(t, id, fields, "information")?,
        })
    }
}
