//! End-to-end tests for the generic API proxy.
//!
//! A stub backend records what arrives and answers with a canned
//! status, headers, and body; the frontend app is driven through the
//! actix test harness and must mirror that response byte for byte.

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, test, web};
use std::sync::{Arc, Mutex};
use symptom_checker_frontend::{AppMetrics, BackendClient, create_app};

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

#[derive(Clone)]
struct CapturedRequest {
    method: String,
    path_and_query: String,
    content_type: String,
    body: Vec<u8>,
}

impl Captured {
    fn take(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Fixed response the stub backend returns for every request.
#[derive(Clone)]
struct Canned {
    status: u16,
    headers: &'static [(&'static str, &'static str)],
    body: &'static str,
}

async fn record_and_respond(
    req: HttpRequest,
    body: web::Bytes,
    captured: web::Data<Captured>,
    canned: web::Data<Canned>,
) -> HttpResponse {
    captured.requests.lock().unwrap().push(CapturedRequest {
        method: req.method().to_string(),
        path_and_query: req
            .uri()
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| req.path().to_string()),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
        body: body.to_vec(),
    });

    let mut builder = HttpResponse::build(StatusCode::from_u16(canned.status).unwrap());
    builder.content_type("application/json");
    for (name, value) in canned.headers {
        builder.append_header((*name, *value));
    }
    builder.body(canned.body)
}

fn spawn_backend(canned: Canned, captured: Captured) -> String {
    let srv = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(captured.clone()))
            .app_data(web::Data::new(canned.clone()))
            .default_service(web::route().to(record_and_respond))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = srv.addrs()[0];
    actix_web::rt::spawn(srv.run());
    format!("http://{addr}")
}

fn dead_backend_url() -> String {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn frontend(backend_url: &str) -> (web::Data<BackendClient>, web::Data<AppMetrics>) {
    (
        web::Data::new(BackendClient::new(backend_url).unwrap()),
        web::Data::new(AppMetrics::new().unwrap()),
    )
}

#[actix_web::test]
async fn test_proxy_forwards_path_query_and_mirrors_response() {
    let captured = Captured::default();
    let base = spawn_backend(
        Canned {
            status: 201,
            headers: &[("x-backend", "yes"), ("x-multi", "a"), ("x-multi", "b")],
            body: r#"{"items": [1, 2, 3]}"#,
        },
        captured.clone(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::get().uri("/api/v1/foo?x=1").to_request();
    let resp = test::call_service(&app, req).await;

    // Status and headers mirrored, multi-value preserved
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get("x-backend").and_then(|v| v.to_str().ok()),
        Some("yes")
    );
    let multi: Vec<_> = resp
        .headers()
        .get_all("x-multi")
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(multi, vec!["a", "b"]);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    // Body returned byte for byte
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], br#"{"items": [1, 2, 3]}"#);

    // The backend saw the wildcard suffix plus the query string
    let requests = captured.take();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path_and_query, "/api/v1/foo?x=1");
    assert!(requests[0].content_type.starts_with("application/json"));
}

#[actix_web::test]
async fn test_proxy_forwards_method_and_body_verbatim() {
    let captured = Captured::default();
    let base = spawn_backend(
        Canned {
            status: 200,
            headers: &[],
            body: r#"{"ok": true}"#,
        },
        captured.clone(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let payload = r#"{"name": "test", "values": [1, 2]}"#;
    let req = test::TestRequest::post()
        .uri("/api/v1/items/batch")
        .set_payload(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = captured.take();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path_and_query, "/api/v1/items/batch");
    assert_eq!(requests[0].body, payload.as_bytes());
}

#[actix_web::test]
async fn test_proxy_mirrors_backend_error_statuses() {
    // A backend 404 is the backend's answer, not a proxy failure; it
    // passes through untouched.
    let base = spawn_backend(
        Canned {
            status: 404,
            headers: &[],
            body: r#"{"detail": "no such resource"}"#,
        },
        Captured::default(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::get().uri("/api/v1/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], br#"{"detail": "no such resource"}"#);
}

#[actix_web::test]
async fn test_proxy_backend_down_is_500_json() {
    let (client, metrics) = frontend(&dead_backend_url());
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::get().uri("/api/v1/foo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("error").is_some());
    // transport details stay in the logs, not in the response
    assert!(!json["error"].as_str().unwrap().contains("tcp"));
}

#[actix_web::test]
async fn test_proxy_reaches_nested_paths() {
    let captured = Captured::default();
    let base = spawn_backend(
        Canned {
            status: 200,
            headers: &[],
            body: "{}",
        },
        captured.clone(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::delete()
        .uri("/api/v1/users/42/sessions")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = captured.take();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path_and_query, "/api/v1/users/42/sessions");
}
