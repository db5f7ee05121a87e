//! Raw form shapes and their translation into typed backend payloads.
//!
//! Every field arrives as an optional string. Translation is
//! best-effort and never fails; an invalid numeric field is dropped
//! rather than rejected. Required-field validation lives in the
//! handlers so a missing field becomes a 400 before the backend is
//! ever involved.

use crate::models::{DiagnosisInput, GeoLocation, HospitalSearchParams, SymptomInput};
use crate::utils::form::{flag_set, parse_optional, split_list};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Raw symptom submission form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct SymptomForm {
    pub text: Option<String>,
    pub severity: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
}

impl SymptomForm {
    /// Translate into the backend payload.
    pub fn into_input(self) -> SymptomInput {
        SymptomInput {
            text: self.text.unwrap_or_default(),
            severity: parse_optional(self.severity.as_deref()),
            duration: self.duration.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        }
    }
}

/// Raw diagnosis analysis form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct DiagnosisForm {
    pub symptoms: Option<String>,
    pub patient_age: Option<String>,
    pub patient_gender: Option<String>,
    pub duration: Option<String>,
    pub severity: Option<String>,
}

impl DiagnosisForm {
    /// Translate into the backend payload. `symptoms` is a
    /// comma-delimited list.
    pub fn into_input(self) -> DiagnosisInput {
        DiagnosisInput {
            symptoms: split_list(self.symptoms.as_deref()),
            patient_age: parse_optional(self.patient_age.as_deref()),
            patient_gender: self.patient_gender.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            severity: parse_optional(self.severity.as_deref()),
        }
    }
}

/// Raw hospital search form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct HospitalSearchForm {
    pub specialties: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
    pub max_distance: Option<String>,
    pub emergency_only: Option<String>,
}

impl HospitalSearchForm {
    /// Translate into the backend search filters.
    ///
    /// A location is built only when both coordinates are present and
    /// parse; the address rides along from its own field.
    pub fn into_params(self) -> HospitalSearchParams {
        let user_location = match (
            parse_optional::<f64>(self.latitude.as_deref()),
            parse_optional::<f64>(self.longitude.as_deref()),
        ) {
            (Some(latitude), Some(longitude)) => Some(GeoLocation {
                latitude,
                longitude,
                address: self.address.unwrap_or_default(),
            }),
            _ => None,
        };

        HospitalSearchParams {
            specialties: split_list(self.specialties.as_deref()),
            user_location,
            max_distance: parse_optional(self.max_distance.as_deref()),
            emergency_only: flag_set(self.emergency_only.as_deref()),
        }
    }
}
