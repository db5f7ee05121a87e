//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Reports the frontend's own liveness only; the backend is not
/// consulted, so this stays green while the backend is down.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the frontend in JSON format.",
    tags("Health"),
    responses((status = 200, description = "Successful response", body = HealthResponse))
)]
pub async fn health() -> Result<web::Json<HealthResponse>, Error> {
    let response = HealthResponse {
        status: "healthy".to_string(),
    };

    Ok(web::Json(response))
}
