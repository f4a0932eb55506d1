//! Form field sets for each create endpoint.
//!
//! Field names match the submitted form keys, including `hospital_ID`,
//! `patient_ID` and `doctor_ID`. Absent keys deserialize to `""`.

use serde::Deserialize;

/// Form for `POST /hospital`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HospitalForm {
    /// Hospital name (required).
    pub name: String,
    /// Street address (required).
    pub address: String,
    /// Number of beds.
    pub beds_number: String,
    /// Contact phone number.
    pub phone: String,
}

/// Form for `POST /doctor`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    /// Surname (required).
    pub surname: String,
    /// Profession (required).
    pub profession: String,
    /// Optional hospital reference.
    #[serde(rename = "hospital_ID")]
    pub hospital_id: String,
}

/// Form for `POST /patient`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    /// Surname (required).
    pub surname: String,
    /// Date of birth (required).
    pub born_date: String,
    /// `M` or `F` (required).
    pub sex: String,
    /// Medical policy number (required).
    pub mpn: String,
}

/// Form for `POST /diagnosis`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiagnosisForm {
    /// Patient reference (required).
    #[serde(rename = "patient_ID")]
    pub patient_id: String,
    /// Diagnosis type (required).
    #[serde(rename = "type")]
    pub diagnosis_type: String,
    /// Free-text information.
    pub information: String,
}

/// Form for `POST /doctor-patient`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DoctorPatientForm {
    /// Doctor reference (required).
    #[serde(rename = "doctor_ID")]
    pub doctor_id: String,
    /// Patient reference (required).
    #[serde(rename = "patient_ID")]
    pub patient_id: String,
}

/// Parses an identifier submitted in a form field.
///
/// Only the canonical decimal form of a positive integer is accepted; signs,
/// leading zeros and whitespace name keys that are never written. Anything
/// else yields `None`, which callers treat as a reference to a record that
/// does not exist.
pub fn parse_id(value: &str) -> Option<u64> {
    if value.is_empty() || value.starts_with('0') || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id("01"), None);
        assert_eq!(parse_id(" 1"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
