//! Hospital search endpoints.

use crate::{
    handlers::pages::render_page,
    models::{ErrorResponse, HospitalSearchForm},
    services::BackendClient,
    utils::escape_html,
};
use actix_web::{HttpRequest, HttpResponse, web};
use paperclip::actix::api_v2_operation;

/// Hospital search page
#[api_v2_operation(
    summary = "Hospital Search Page",
    description = "Renders the hospital search form.",
    tags("Hospitals"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn hospital_search(_req: HttpRequest) -> HttpResponse {
    let body = r#"<h1>Hospital Search</h1>
<form id="hospital-form">
    <label for="specialties">Specialties (comma separated)</label>
    <input id="specialties" name="specialties" type="text" placeholder="e.g. cardiology,neurology">
    <label for="latitude">Latitude</label>
    <input id="latitude" name="latitude" type="text">
    <label for="longitude">Longitude</label>
    <input id="longitude" name="longitude" type="text">
    <label for="address">Address</label>
    <input id="address" name="address" type="text">
    <label for="max_distance">Max distance (km)</label>
    <input id="max_distance" name="max_distance" type="text">
    <label for="emergency_only">
        <input id="emergency_only" name="emergency_only" type="checkbox" value="true" style="width: auto">
        Emergency departments only
    </label>
    <button type="submit">Search</button>
</form>
<pre id="result" hidden></pre>
<script>
    document.getElementById('hospital-form').addEventListener('submit', async (event) => {
        event.preventDefault();
        const response = await fetch('/hospital/search', {
            method: 'POST',
            headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
            body: new URLSearchParams(new FormData(event.target)),
        });
        const result = document.getElementById('result');
        result.hidden = false;
        result.textContent = JSON.stringify(await response.json(), null, 2);
    });
</script>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Hospital Search", body))
}

/// Nearby hospitals page
#[api_v2_operation(
    summary = "Nearby Hospitals Page",
    description = "Renders the nearby hospitals page.",
    tags("Hospitals"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn nearby_hospitals(_req: HttpRequest) -> HttpResponse {
    let body = r#"<h1>Nearby Hospitals</h1>
<p>Allow location access to list hospitals around you.</p>
<pre id="result" hidden></pre>
<script>
    navigator.geolocation.getCurrentPosition(async (position) => {
        const response = await fetch('/hospital/search', {
            method: 'POST',
            headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
            body: new URLSearchParams({
                latitude: String(position.coords.latitude),
                longitude: String(position.coords.longitude),
            }),
        });
        const result = document.getElementById('result');
        result.hidden = false;
        result.textContent = JSON.stringify(await response.json(), null, 2);
    });
</script>"#;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Nearby Hospitals", body))
}

/// Hospital detail page
///
/// The id arrives verbatim from the path and is echoed into the page.
#[api_v2_operation(
    summary = "Hospital Detail Page",
    description = "Renders the detail page for a single hospital.",
    tags("Hospitals"),
    responses((status = 200, description = "Successful response"))
)]
pub async fn hospital_detail(path: web::Path<String>) -> HttpResponse {
    let hospital_id = escape_html(&path.into_inner());
    let body = format!(
        r#"<h1>Hospital Detail</h1>
<p>Details for hospital <strong id="hospital-id">{hospital_id}</strong>.</p>
<pre id="result" hidden></pre>"#
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page("Hospital Detail", &body))
}

/// Hospital search endpoint
///
/// Accepts the search form and forwards the filters to the backend.
/// Every filter is optional; an empty form searches everything.
#[api_v2_operation(
    summary = "Hospital Search Endpoint",
    description = "Parses the hospital search form and forwards the filters to the backend.",
    tags("Hospitals"),
    responses(
        (status = 200, description = "Matching hospitals"),
        (status = 500, description = "Internal Server Error - backend unavailable")
    )
)]
pub async fn search_hospitals(req: HttpRequest, form: web::Form<HospitalSearchForm>) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("backend client not configured"));
    };

    let params = form.into_inner().into_params();

    match client.search_hospitals(&params).await {
        Ok(hospitals) => HttpResponse::Ok().json(hospitals),
        Err(err) => {
            tracing::error!(error = %err, "Hospital search failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Hospital search failed"))
        }
    }
}
