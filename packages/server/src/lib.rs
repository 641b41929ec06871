#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Hyderabad complaint map.
//!
//! Serves the REST API behind the dashboard: complaints with their
//! derived categories and suggested actions, the solution for the latest
//! complaint, live air quality from WAQI, and the static About content.
//! Complaints are read from the `SQLite` store at `COMPLAINTS_DB_PATH`
//! (default `data/complaints.db`). Frontend files are served from
//! `app/dist` when present.

mod about;
mod handlers;
pub mod interactive;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use complaint_map_aqi::{LastKnownAqi, StationCache, WaqiService};
use switchy_database::Database;

/// Shared application state.
pub struct AppState {
    /// Complaint store.
    pub db: Arc<dyn Database>,
    /// HTTP client for the WAQI API.
    pub http: reqwest::Client,
    /// WAQI service settings.
    pub waqi: WaqiService,
    /// WAQI API token, `None` when air quality is not configured.
    pub waqi_token: Option<String>,
    /// Recently fetched stations.
    pub stations: StationCache,
    /// Last live city-average AQI.
    pub last_aqi: LastKnownAqi,
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/config", web::get().to(handlers::config))
            .route("/categories", web::get().to(handlers::categories))
            .route("/complaints", web::get().to(handlers::complaints))
            .route("/solutions", web::get().to(handlers::solution))
            .route("/solutions/latest", web::get().to(handlers::latest_solution))
            .route("/classify", web::get().to(handlers::classify_text))
            .route("/aqi", web::get().to(handlers::aqi))
            .route("/aqi/refresh", web::post().to(handlers::aqi_refresh))
            .route("/about", web::get().to(handlers::about)),
    );
}

/// Starts the complaint map API server.
///
/// Opens the complaint store, loads the WAQI settings, and starts the
/// Actix-Web HTTP server. This is a regular async function: the caller
/// provides the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the complaint store cannot be
/// opened, the WAQI settings are malformed, or the HTTP server fails to
/// bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let db_path = complaint_map_database::db_path_from_env();
    log::info!("Opening complaints database at {}...", db_path.display());
    let db = complaint_map_database::open_db(&db_path)
        .await
        .map_err(std::io::Error::other)?;

    let waqi = WaqiService::load().map_err(std::io::Error::other)?;
    let waqi_token = match complaint_map_aqi::service::token_from_env() {
        Ok(token) => Some(token),
        Err(e) => {
            log::warn!("Air quality disabled: {e}");
            None
        }
    };

    let http = reqwest::Client::builder()
        .timeout(waqi.timeout())
        .build()
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(AppState {
        db: Arc::from(db),
        http,
        stations: StationCache::new(waqi.cache_ttl()),
        last_aqi: LastKnownAqi::new(),
        waqi,
        waqi_token,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    let serve_frontend = Path::new("app/dist").is_dir();
    if !serve_frontend {
        log::info!("No app/dist directory, serving the API only");
    }

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let app = App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api);

        if serve_frontend {
            app.service(Files::new("/", "app/dist").index_file("index.html"))
        } else {
            app
        }
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
