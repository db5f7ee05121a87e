//! OpenAPI specification generation and app factory.

use crate::{
    handlers::{
        analyze_symptoms, api_proxy, diagnosis_result, get_metrics, health, home, hospital_detail,
        hospital_search, nearby_hospitals, news_page, search_hospitals, symptom_categories,
        symptom_check, symptom_input, user_profile, user_profile_update, user_register,
        user_register_submit, version,
    },
    middleware::{Cors, MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, BackendClient},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the frontend
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Symptom Checker Frontend".into(),
            version: "1.0.0".into(),
            description: Some(
                "Web frontend for the symptom checker. Renders the user-facing pages and \
                 translates form submissions into calls against the backend diagnosis API. \
                 Anything under /api/v1 is proxied to the backend unchanged; that surface is \
                 documented by the backend itself."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Build the application with the full route table and middleware stack.
///
/// The backend client and metrics registry are created once at startup
/// and shared immutably across workers and requests; this factory only
/// wires them in. Used by main and by the integration tests.
pub fn create_app(
    client: actix_web::web::Data<BackendClient>,
    metrics: actix_web::web::Data<AppMetrics>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Cors)
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(client)
        .app_data(metrics)
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/version").route(web::get().to(version)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/symptom/").route(web::get().to(symptom_check)))
        .service(web::resource("/symptom/input").route(web::post().to(symptom_input)))
        .service(web::resource("/symptom/categories").route(web::get().to(symptom_categories)))
        .service(web::resource("/diagnosis/").route(web::get().to(diagnosis_result)))
        .service(web::resource("/diagnosis/analyze").route(web::post().to(analyze_symptoms)))
        .service(web::resource("/hospital/").route(web::get().to(hospital_search)))
        .service(web::resource("/hospital/search").route(web::post().to(search_hospitals)))
        .service(web::resource("/hospital/nearby").route(web::get().to(nearby_hospitals)))
        .service(web::resource("/hospital/{id}").route(web::get().to(hospital_detail)))
        .service(
            web::resource("/user/register")
                .route(web::get().to(user_register))
                .route(web::post().to(user_register_submit)),
        )
        .service(
            web::resource("/user/profile")
                .route(web::get().to(user_profile))
                .route(web::put().to(user_profile_update)),
        )
        .service(web::resource("/news/").route(web::get().to(news_page)))
        .with_json_spec_at("/api/spec/v2")
        .build()
        // the wildcard proxy is plain actix: it is not part of the
        // documented frontend API
        .service(
            actix_web::web::resource("/api/v1/{path:.*}")
                .route(actix_web::web::route().to(api_proxy)),
        )
}
