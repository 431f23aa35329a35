use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod challenge;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod rate_limit;

use config::Config;
use rate_limit::RateLimitState;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub ws_tx: Option<broadcast::Sender<String>>,
    pub rate_limiter: RateLimitState,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hardtrack_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    let config = Arc::new(config);

    // Database
    let db = db::create_pool(&config.database_url).await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    // WebSocket broadcast channel
    let (ws_tx, _) = broadcast::channel::<String>(256);

    let rate_limiter = RateLimitState::new();

    let state = AppState {
        db,
        config: config.clone(),
        ws_tx: Some(ws_tx),
        rate_limiter,
    };

    // Participant creation is the only unauthenticated write that grows
    // without bound, so it gets its own per-IP limit.
    let participant_create_routes = Router::new()
        .route(
            "/api/participants",
            post(handlers::participants::create_participant),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_participants,
        ));

    let api_routes = Router::new()
        // Participants
        .route(
            "/api/participants",
            get(handlers::participants::list_participants),
        )
        .route(
            "/api/participants/:id",
            patch(handlers::participants::update_participant),
        )
        // Entries
        .route("/api/entries", get(handlers::entries::list_entries))
        .route("/api/entries", post(handlers::entries::create_entry))
        .route(
            "/api/entries/:participant_id/:date",
            put(handlers::entries::update_entry),
        )
        .route(
            "/api/entries/:participant_id/:date",
            delete(handlers::entries::delete_entry),
        )
        .route(
            "/api/participants/:id/entries",
            delete(handlers::entries::reset_challenge),
        )
        // Stats & Leaderboard
        .route(
            "/api/participants/:id/stats",
            get(handlers::stats::get_participant_stats),
        )
        .route(
            "/api/leaderboard",
            get(handlers::leaderboard::get_leaderboard),
        )
        .merge(participant_create_routes);

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/ws", get(handlers::ws::ws_handler));

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::PATCH,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Expired rate-limit windows are purged in the background
    spawn_rate_limit_cleanup(state.rate_limiter.clone());

    let app = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    // Use into_make_service_with_connect_info to provide client IP for rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}

fn spawn_rate_limit_cleanup(limiter: RateLimitState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            limiter.cleanup().await;
        }
    });
}
