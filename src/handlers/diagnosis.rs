//! Diagnosis endpoints.

use crate::{
    handlers::pages::render_page,
    models::{DiagnosisForm, ErrorResponse},
    services::BackendClient,
};
use actix_web::{HttpRequest, HttpResponse, web};
use paperclip::actix::api_v2_operation;

/// Diagnosis result page
#[api_v2_operation(
    summary = "Diagnosis Result Page",
    description = "Renders the static diagnosis result page.",
    tags("Diagnosis"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn diagnosis_result(_req: HttpRequest) -> HttpResponse {
    let body = r#"<h1>Diagnosis Result</h1>
<p>Submit your symptoms from the symptom check page to see an analysis here.</p>
<pre id="diagnosis-result" hidden></pre>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Diagnosis", body))
}

/// Diagnosis analysis endpoint
///
/// Accepts the diagnosis form (comma-delimited symptom list plus
/// optional patient details) and forwards it to the backend analyzer.
#[api_v2_operation(
    summary = "Diagnosis Analysis Endpoint",
    description = "Parses the diagnosis form and forwards it to the backend for analysis.",
    tags("Diagnosis"),
    responses(
        (status = 200, description = "Diagnosis result"),
        (status = 400, description = "Bad Request - no symptoms supplied"),
        (status = 500, description = "Internal Server Error - backend unavailable")
    )
)]
pub async fn analyze_symptoms(req: HttpRequest, form: web::Form<DiagnosisForm>) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("backend client not configured"));
    };

    let input = form.into_inner().into_input();
    if input.symptoms.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Please enter your symptoms"));
    }

    match client.analyze_symptoms(&input).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => {
            tracing::error!(error = %err, "Diagnosis analysis failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to analyze symptoms"))
        }
    }
}
