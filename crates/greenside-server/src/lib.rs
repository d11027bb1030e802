pub mod api;
pub mod config;
pub mod error;
pub mod file_store;
pub mod health;
pub mod scoring;
pub mod state;

use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use greenside_core::error::RecordError;
use greenside_core::records::Records;
use greenside_core::store::RecordStore;

use config::ServerConfig;
use file_store::JsonFileStore;
use state::AppState;

/// Build the Axum router and application state from a config, keeping
/// records as JSON files under `config.data_dir`.
pub fn build_app(config: ServerConfig) -> Result<(Router<()>, AppState), RecordError> {
    let store = JsonFileStore::open(&config.data_dir)?;
    tracing::info!(dir = %store.dir().display(), "Opened record store");
    build_app_with_store(config, Box::new(store))
}

/// Build the router over an already-opened store.
pub fn build_app_with_store(
    config: ServerConfig,
    store: Box<dyn RecordStore>,
) -> Result<(Router<()>, AppState), RecordError> {
    let records = Records::load(
        store,
        config.limits.record_limits(),
        config.seed_default_courses,
    )?;
    let state = AppState::new(config, records);

    let api_routes = Router::new()
        .route("/courses", get(api::list_courses).post(api::create_course))
        .route(
            "/courses/{id}",
            get(api::get_course)
                .put(api::update_course)
                .delete(api::delete_course),
        )
        .route("/games", get(api::list_games).post(api::create_game))
        .route(
            "/games/{id}",
            get(api::get_game).delete(api::delete_game),
        )
        .route("/games/{id}/scorecard", get(scoring::get_scorecard))
        .route("/games/{id}/scores/{hole}/{player}", put(scoring::put_score));

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    Ok((app, state))
}
