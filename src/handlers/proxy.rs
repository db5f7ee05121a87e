//! Generic pass-through proxy for backend API paths.

use crate::{models::ErrorResponse, services::BackendClient};
use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

/// Connection and framing headers; the server computes its own, so
/// these are not mirrored from the backend response.
const SKIP_HEADERS: [&str; 6] = [
    "connection",
    "keep-alive",
    "transfer-encoding",
    "content-length",
    "upgrade",
    "proxy-connection",
];

/// Forward any request under `/api/v1` to the backend unchanged.
///
/// The wildcard suffix and query string are preserved, the body passes
/// through as raw bytes, and the backend's status, headers, and body
/// are mirrored back. Once the response starts streaming, a copy
/// failure terminates the connection rather than synthesizing an
/// error. Registered outside the OpenAPI wrapper since the forwarded
/// surface is the backend's to document.
pub async fn api_proxy(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let Some(client) = req.app_data::<web::Data<BackendClient>>() else {
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("backend client not configured"));
    };

    let Ok(method) = reqwest::Method::from_bytes(req.method().as_str().as_bytes()) else {
        return HttpResponse::InternalServerError().json(ErrorResponse::new("API request failed"));
    };

    let tail = req.match_info().query("path");
    let mut path_and_query = format!("/{tail}");
    if !req.query_string().is_empty() {
        path_and_query.push('?');
        path_and_query.push_str(req.query_string());
    }

    match client.forward(method, &path_and_query, body).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status().as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let mut builder = HttpResponse::build(status);
            for (name, value) in upstream.headers() {
                if SKIP_HEADERS.contains(&name.as_str()) {
                    continue;
                }
                // append, not insert: multi-value headers survive the copy
                builder.append_header((name.as_str(), value.as_bytes()));
            }

            builder.streaming(upstream.bytes_stream())
        }
        Err(err) => {
            tracing::error!(error = %err, "API proxy request failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new("API request failed"))
        }
    }
}
