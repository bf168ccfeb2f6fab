use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hubdeck_backend::{handlers, AppState, ArchiveService, Config};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hubdeck"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubdeck_backend=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!("Starting HubDeck backend on {}:{}", config.host, config.port);

    let archive =
        ArchiveService::new(&config.github_api_base).expect("Failed to initialise archive service");

    let server_addr = format!("{}:{}", config.host, config.port);

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        archive,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health_check))
            .service(web::scope("/api").configure(handlers::configure_download_routes))
    })
    .bind(&server_addr)?
    .run()
    .await
}
