//! Symptom Checker Frontend - a thin web layer over the diagnosis API
//!
//! This service renders the user-facing pages and translates form
//! submissions into JSON calls against a separate backend API. It
//! keeps no state and performs no analysis of its own.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - request/response transfer shapes and raw form structs
//! - `handlers/` - HTTP request handlers for pages and JSON endpoints
//! - `middleware/` - cross-cutting middleware (CORS, request IDs, metrics)
//! - `services/` - the backend API client and the metrics registry
//! - `utils/` - lenient form parsing and small helpers
//! - `config/` - configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::web;
//! use symptom_checker_frontend::{create_app, AppMetrics, BackendClient};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let client = web::Data::new(BackendClient::new("http://localhost:8000").unwrap());
//!     let metrics = web::Data::new(AppMetrics::new().unwrap());
//!     let app = create_app(client, metrics);
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::AppConfig;
pub use handlers::{
    analyze_symptoms, api_proxy, create_app, create_openapi_spec, diagnosis_result, get_metrics,
    health, home, hospital_detail, hospital_search, nearby_hospitals, news_page, search_hospitals,
    symptom_categories, symptom_check, symptom_input, user_profile, user_profile_update,
    user_register, user_register_submit, version,
};
pub use middleware::{Cors, MetricsMiddleware, RequestIdMiddleware};
pub use models::{
    DiagnosisForm, DiagnosisInput, DiagnosisResult, ErrorResponse, GeoLocation, HealthResponse,
    Hospital, HospitalSearchForm, HospitalSearchParams, MedicalSpecialty, MessageResponse,
    SymptomForm, SymptomInput, SymptomResponse, VersionResponse,
};
pub use services::{AppMetrics, BackendClient, BackendClientError};
pub use utils::{escape_html, extract_route_pattern, flag_set, parse_optional, split_list};
