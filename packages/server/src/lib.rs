#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the crime prediction application.
//!
//! Serves the login and main views plus the `/predict` JSON endpoint.
//! The database handle, feature preparer, and classifier are constructed
//! once at startup and injected through [`AppState`], so tests swap in
//! stub classifiers and in-memory databases.

pub mod handlers;
pub mod views;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use crime_predict_crime_models::KNOWN_LOCATIONS;
use crime_predict_database::db;
use crime_predict_inference::{Classifier, FeaturePreparer, LinearModel};
use switchy_database::Database;

/// Default model artifact path when `MODEL_PATH` is not set.
pub const DEFAULT_MODEL_PATH: &str = "data/crime_model.json";

/// Shared application state.
pub struct AppState {
    /// Database connection.
    pub db: Arc<dyn Database>,
    /// Feature vector builder over the fixed known-location list.
    pub preparer: FeaturePreparer,
    /// Pre-trained classifier (loaded artifact in production, stubs in
    /// tests).
    pub classifier: Arc<dyn Classifier>,
}

/// Registers all application routes.
///
/// Shared between [`run_server`] and the integration tests so both exercise
/// the same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::login_view))
            .route(web::post().to(handlers::login_submit)),
    )
    .route("/index", web::get().to(handlers::index_view))
    .route("/predict", web::post().to(handlers::predict));
}

/// Starts the crime prediction server.
///
/// Opens the database, loads the model artifact, and serves HTTP. This is
/// a regular async function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the database cannot be opened or the model artifact is
/// missing or malformed — both are startup-fatal conditions.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Opening database...");
    let db_conn = db::connect_from_env()
        .await
        .expect("Failed to open database");

    log::info!("Loading model artifact...");
    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
    let model =
        LinearModel::from_file(Path::new(&model_path)).expect("Failed to load model artifact");

    let state = web::Data::new(AppState {
        db: Arc::from(db_conn),
        preparer: FeaturePreparer::new(KNOWN_LOCATIONS),
        classifier: Arc::new(model),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
