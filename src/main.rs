use actix_web::HttpServer;
use route_metrics::{AppState, TelemetryConfig, create_app, telemetry};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing(&TelemetryConfig::from_env()) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let state = AppState::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    tracing::info!(address = %bind_address, "Server starting");

    HttpServer::new(move || create_app(&state))
        .bind(&bind_address)?
        .run()
        .await
}
