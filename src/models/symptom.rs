//! Symptom submission models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// A single symptom report sent to the backend.
///
/// `severity` absent means "unspecified", not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct SymptomInput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
}

/// The backend's view of a processed symptom report.
///
/// Produced by the backend and returned to the caller unchanged; the
/// category and keywords are derived there, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct SymptomResponse {
    pub id: String,
    pub text: String,
    pub severity: Option<i32>,
    pub duration: String,
    pub location: String,
    pub category: String,
    pub keywords: Vec<String>,
}
