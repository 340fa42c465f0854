use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use areas::{Dataset, FilterOptions};
use panel::DashboardVariant;

mod dashboards;
mod loader;

/// Everything one mounted dashboard needs to answer requests: its static
/// configuration plus the immutable, shared dataset loaded at startup.
#[derive(Clone)]
pub struct Board {
    pub variant: &'static DashboardVariant,
    pub dataset: Arc<Dataset>,
    pub options: Arc<FilterOptions>,
    /// The boundary FeatureCollection, serialized once for the map client.
    pub boundaries: Arc<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("PANEL_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9180".to_string())
        .parse()
        .expect("invalid PANEL_ADDR");

    let client = loader::http_client();

    // Datasets load once, before the listener exists. A dashboard without
    // data has no degraded mode, so any variant failing every candidate
    // URL stops the process here.
    let mut boards = Vec::with_capacity(panel::VARIANTS.len());
    for variant in panel::VARIANTS {
        match loader::load_board(&client, variant).await {
            Ok(board) => boards.push(board),
            Err(err) => {
                error!("startup load failed for {}: {err}", variant.slug);
                std::process::exit(1);
            }
        }
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let mut app = Router::new().route("/healthz", get(healthz));
    for board in boards {
        let base_path = board.variant.base_path;
        app = app.nest(base_path, dashboards::routes(board));
        info!("mounted dashboard at {base_path}");
    }
    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    info!("panel server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}
