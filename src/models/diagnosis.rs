//! Diagnosis analysis models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Input payload for the diagnosis analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct DiagnosisInput {
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub patient_gender: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i32>,
}

/// A specialty recommendation attached to a diagnosis result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct MedicalSpecialty {
    pub id: String,
    pub name: String,
    pub description: String,
    pub urgency: String,
}

/// Diagnosis result produced by the backend; opaque to this layer.
///
/// `confidence` is expected in 0.0..=1.0 but not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct DiagnosisResult {
    pub possible_conditions: Vec<String>,
    pub recommended_specialties: Vec<MedicalSpecialty>,
    pub urgency_level: String,
    pub advice: String,
    pub confidence: f64,
}
