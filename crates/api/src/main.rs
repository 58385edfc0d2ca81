use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signal_core::aggregator::Aggregator;
use signal_core::domain::SearchReport;
use signal_core::trends::MarketTrends;

mod error;

use error::ApiError;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ALLOW_ORIGIN: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = signal_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let aggregator = match Aggregator::from_settings(&settings) {
        Ok(aggregator) => aggregator,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "provider configuration is incomplete");
            return Err(e);
        }
    };

    let state = AppState { aggregator };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/search/:identifier", get(search))
        .route("/market/trends", get(market_trends))
        .with_state(state)
        .layer(cors_layer()?)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    aggregator: Aggregator,
}

async fn search(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<SearchReport>, ApiError> {
    let report = state.aggregator.search(&identifier).await?;
    Ok(Json(report))
}

async fn market_trends(State(state): State<AppState>) -> Result<Json<MarketTrends>, ApiError> {
    let trends = state.aggregator.market_trends().await?;
    Ok(Json(trends))
}

fn cors_layer() -> anyhow::Result<CorsLayer> {
    let origin = std::env::var("CORS_ALLOW_ORIGIN")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CORS_ALLOW_ORIGIN.to_string());
    let origin = HeaderValue::from_str(&origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &signal_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
