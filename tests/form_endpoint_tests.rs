//! Form endpoints end to end: urlencoded form in, translated JSON out
//! to the backend, decoded result back to the caller.

use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, test, web};
use std::sync::{Arc, Mutex};
use symptom_checker_frontend::{AppMetrics, BackendClient, create_app};

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl Captured {
    fn take(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct Canned {
    body: &'static str,
}

async fn record_and_respond(
    body: web::Bytes,
    captured: web::Data<Captured>,
    canned: web::Data<Canned>,
) -> HttpResponse {
    let parsed = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    captured.bodies.lock().unwrap().push(parsed);

    HttpResponse::Ok()
        .content_type("application/json")
        .body(canned.body)
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

fn frontend(backend_url: &str) -> (web::Data<BackendClient>, web::Data<AppMetrics>) {
    (
        web::Data::new(BackendClient::new(backend_url).unwrap()),
        web::Data::new(AppMetrics::new().unwrap()),
    )
}

#[actix_web::test]
async fn test_symptom_form_reaches_backend_translated() {
    let captured = Captured::default();
    let base = spawn_backend(
        Canned {
            body: r#"{"id": "s-9", "text": "dizzy", "category": "general", "keywords": []}"#,
        },
        captured.clone(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::post()
        .uri("/symptom/input")
        .set_form([
            ("text", "dizzy"),
            ("severity", "not-a-number"),
            ("duration", "an hour"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], "s-9");

    // Unparseable severity was dropped, not forwarded and not an error
    let sent = captured.take();
    assert_eq!(
        sent[0],
        serde_json::json!({ "text": "dizzy", "duration": "an hour" })
    );
}

#[actix_web::test]
async fn test_diagnosis_form_splits_symptoms_for_backend() {
    let captured = Captured::default();
    let base = spawn_backend(
        Canned {
            body: r#"{
                "possible_conditions": [],
                "recommended_specialties": [],
                "urgency_level": "low",
                "advice": "",
                "confidence": 0.1
            }"#,
        },
        captured.clone(),
    );

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    let req = test::TestRequest::post()
        .uri("/diagnosis/analyze")
        .set_form([("symptoms", "fever,cough"), ("patient_age", "52")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = captured.take();
    assert_eq!(sent[0]["symptoms"], serde_json::json!(["fever", "cough"]));
    assert_eq!(sent[0]["patient_age"], 52);
}

#[actix_web::test]
async fn test_hospital_form_builds_location_only_when_complete() {
    let captured = Captured::default();
    let base = spawn_backend(Canned { body: "[]" }, captured.clone());

    let (client, metrics) = frontend(&base);
    let app = test::init_service(create_app(client, metrics)).await;

    // Both coordinates: location goes out with the address attached
    let req = test::TestRequest::post()
        .uri("/hospital/search")
        .set_form([
            ("specialties", "cardiology,neurology"),
            ("latitude", "35.68"),
            ("longitude", "139.76"),
            ("address", "Chiyoda"),
            ("emergency_only", "true"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Missing longitude: no location, search still valid
    let req = test::TestRequest::post()
        .uri("/hospital/search")
        .set_form([("latitude", "35.68"), ("emergency_only", "TRUE")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = captured.take();
    assert_eq!(
        sent[0]["user_location"],
        serde_json::json!({
            "latitude": 35.68,
            "longitude": 139.76,
            "address": "Chiyoda"
        })
    );
    assert_eq!(
        sent[0]["specialties"],
        serde_json::json!(["cardiology", "neurology"])
    );
    assert_eq!(sent[0]["emergency_only"], true);

    assert!(sent[1].get("user_location").is_none());
    // only the literal "true" sets the flag
    assert_eq!(sent[1]["emergency_only"], false);
}
