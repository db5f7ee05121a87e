//! Hospital search models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// A geographic point with a display address.
///
/// Used both as search input and inside hospital records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
}

/// A hospital record returned by the backend.
///
/// `distance` and `rating` stay `null` on the wire when the backend
/// has no value for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: GeoLocation,
    pub phone: String,
    pub specialties: Vec<String>,
    pub distance: Option<f64>,
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,
    pub emergency: bool,
}

/// Search filters forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct HospitalSearchParams {
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    pub emergency_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_omit_absent_location() {
        let params = HospitalSearchParams {
            specialties: vec![],
            user_location: None,
            max_distance: None,
            emergency_only: false,
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "specialties": [], "emergency_only": false })
        );
    }

    #[test]
    fn test_hospital_decodes_with_null_optionals() {
        let body = r#"{
            "id": "h-1",
            "name": "Central Hospital",
            "location": {"latitude": 35.68, "longitude": 139.76, "address": "1-1 Chiyoda"},
            "phone": "03-0000-0000",
            "specialties": ["internal medicine"],
            "distance": null,
            "rating": 4.2,
            "emergency": true
        }"#;

        let hospital: Hospital = serde_json::from_str(body).unwrap();
        assert_eq!(hospital.distance, None);
        assert_eq!(hospital.rating, Some(4.2));
        assert!(hospital.emergency);
        assert_eq!(hospital.location.address, "1-1 Chiyoda");
    }
}
