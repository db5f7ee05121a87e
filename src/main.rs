use actix_web::{HttpServer, web};
use symptom_checker_frontend::{AppConfig, AppMetrics, BackendClient, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env first so both the logger and the config see it
    if let Err(err) = dotenvy::dotenv() {
        eprintln!("Warning: .env file not loaded: {err}");
    }

    let config = AppConfig::from_env();

    // The debug switch forces verbose logging regardless of RUST_LOG
    let mut logger = env_logger::Builder::from_default_env();
    if config.debug {
        logger.parse_filters("debug");
    }
    logger.init();

    let client = BackendClient::new(&config.backend_url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let client = web::Data::new(client);
    let metrics = AppMetrics::new().map_err(std::io::Error::other)?;
    let metrics = web::Data::new(metrics);

    println!(
        "Server running at http://0.0.0.0:{} (backend: {})",
        config.port,
        client.base_url()
    );

    HttpServer::new(move || create_app(client.clone(), metrics.clone()))
        .bind(("0.0.0.0", config.port))?
        .run()
        .await
}
