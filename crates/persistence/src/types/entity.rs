//! Entity types and raw field sets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The raw stored form of a record: flat string fields keyed by name.
pub type FieldSet = BTreeMap<String, String>;

/// One of the four kinds of record the registry keeps.
///
/// Each entity type has its own identifier sequence and its own record
/// namespace.
///
/// # Examples
///
/// ```
/// use clinic_persistence::types::EntityType;
///
/// let t: EntityType = "doctor".parse().unwrap();
/// assert_eq!(t, EntityType::Doctor);
/// assert_eq!(t.to_string(), "doctor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A hospital.
    Hospital,
    /// A doctor, optionally attached to a hospital.
    Doctor,
    /// A patient.
    Patient,
    /// A diagnosis recorded against a patient.
    Diagnosis,
}

impl EntityType {
    /// All entity types, in a stable order.
    pub const ALL: [EntityType; 4] = [
        EntityType::Hospital,
        EntityType::Doctor,
        EntityType::Patient,
        EntityType::Diagnosis,
    ];

    /// Returns the lowercase name used in keys and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Hospital => "hospital",
            EntityType::Doctor => "doctor",
            EntityType::Patient => "patient",
            EntityType::Diagnosis => "diagnosis",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown entity type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityType(pub String);

impl fmt::Display for UnknownEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity type: {}", self.0)
    }
}

impl std::error::Error for UnknownEntityType {}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(EntityType::Hospital),
            "doctor" => Ok(EntityType::Doctor),
            "patient" => Ok(EntityType::Patient),
            "diagnosis" => Ok(EntityType::Diagnosis),
            other => Err(UnknownEntityType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_names() {
        for entity_type in EntityType::ALL {
            let parsed: EntityType = entity_type.as_str().parse().unwrap();
            assert_eq!(parsed, entity_type);
        }
    }

    #[test]
    fn test_unknown_entity_type() {
        let err = "nurse".parse::<EntityType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown entity type: nurse");
    }

    #[test]
    fn test_entity_type_serde() {
        let json = serde_json::to_string(&EntityType::Diagnosis).unwrap();
        assert_eq!(json, "\"diagnosis\"");
    }
}
