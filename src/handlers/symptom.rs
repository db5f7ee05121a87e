//! Symptom check endpoints.

use crate::{
    handlers::pages::{error_page, render_page},
    models::{ErrorResponse, SymptomForm},
    services::BackendClient,
};
use actix_web::{HttpRequest, HttpResponse, web};
use paperclip::actix::api_v2_operation;

/// Symptom check page
///
/// Renders the symptom entry form. The category tree comes from the
/// backend at render time; if that fails the generic error page is
/// served instead.
#[api_v2_operation(
    summary = "Symptom Check Page",
    description = "Renders the symptom entry form with categories fetched from the backend.",
    tags("Symptoms"),
    responses(
        (status = 200, description = "Successful response"),
        (status = 500, description = "Categories could not be fetched")
    )
)]
pub async fn symptom_check(req: HttpRequest) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return error_page("backend client not configured");
    };

    let categories = match client.get_symptom_categories().await {
        Ok(categories) => categories,
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch symptom categories");
            return error_page("Failed to fetch symptom categories");
        }
    };

    let categories_json = serde_json::to_string(&categories)
        .unwrap_or_else(|_| "{}".to_string())
        // keep the inline <script> block intact whatever the backend sent
        .replace('<', "\\u003c");

    let body = format!(
        r#"<h1>Symptom Check</h1>
<form id="symptom-form">
    <label for="text">Symptoms</label>
    <textarea id="text" name="text" rows="4" placeholder="Describe how you feel"></textarea>
    <label for="severity">Severity (1-10)</label>
    <input id="severity" name="severity" type="number" min="1" max="10">
    <label for="duration">Duration</label>
    <input id="duration" name="duration" type="text" placeholder="e.g. 2 days">
    <label for="location">Body location</label>
    <input id="location" name="location" type="text" placeholder="e.g. lower back">
    <button type="submit">Submit</button>
</form>
<h2>Categories</h2>
<ul id="category-list"></ul>
<pre id="result" hidden></pre>
<script>
    const CATEGORIES = {categories_json};
    const list = document.getElementById('category-list');
    Object.keys(CATEGORIES).forEach(name => {{
        const item = document.createElement('li');
        item.textContent = name;
        list.appendChild(item);
    }});

    document.getElementById('symptom-form').addEventListener('submit', async (event) => {{
        event.preventDefault();
        const response = await fetch('/symptom/input', {{
            method: 'POST',
            headers: {{ 'Content-Type': 'application/x-www-form-urlencoded' }},
            body: new URLSearchParams(new FormData(event.target)),
        }});
        const result = document.getElementById('result');
        result.hidden = false;
        result.textContent = JSON.stringify(await response.json(), null, 2);
    }});
</script>"#
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Symptom Check", &body))
}

/// Symptom input endpoint
///
/// Accepts the symptom form, forwards it to the backend, and returns
/// the processed report. Symptom text is the only required field.
#[api_v2_operation(
    summary = "Symptom Input Endpoint",
    description = "Parses the symptom form and forwards it to the backend for processing.",
    tags("Symptoms"),
    responses(
        (status = 200, description = "Processed symptom report"),
        (status = 400, description = "Bad Request - symptom text missing"),
        (status = 500, description = "Internal Server Error - backend unavailable")
    )
)]
pub async fn symptom_input(req: HttpRequest, form: web::Form<SymptomForm>) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("backend client not configured"));
    };

    let input = form.into_inner().into_input();
    if input.text.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Please enter your symptoms"));
    }

    match client.submit_symptom(&input).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => {
            tracing::error!(error = %err, "Symptom submission failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to process the symptom report"))
        }
    }
}

/// Symptom categories endpoint
///
/// Passes the backend's category tree through untouched.
#[api_v2_operation(
    summary = "Symptom Categories Endpoint",
    description = "Returns the backend's symptom category tree as opaque JSON.",
    tags("Symptoms"),
    responses(
        (status = 200, description = "Category tree"),
        (status = 500, description = "Internal Server Error - backend unavailable")
    )
)]
pub async fn symptom_categories(req: HttpRequest) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("backend client not configured"));
    };

    match client.get_symptom_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch symptom categories");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch symptom categories"))
        }
    }
}
