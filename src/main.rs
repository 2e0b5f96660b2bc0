use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use care_match::config::Settings;
use care_match::core::Matcher;
use care_match::routes::{self, handle_json_payload_error, AppState};
use care_match::services::CatalogStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration, CARE_MATCH_CONFIG points at an explicit file
    let settings = match std::env::var("CARE_MATCH_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };

    // Initialize logging, LOG_LEVEL and LOG_FORMAT override the config file
    let (config_level, config_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "compact".to_string()),
    };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(config_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(config_format);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Care Match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // Load the provider catalog
    let catalog = CatalogStore::open(&settings.catalog.path).map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::NotFound, e)
    })?;

    info!(
        "Catalog loaded from {} ({} providers)",
        catalog.path().display(),
        catalog.snapshot().len()
    );

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher: Matcher::with_default_scorer(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // Open CORS so the browser frontend can call the API directly
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
