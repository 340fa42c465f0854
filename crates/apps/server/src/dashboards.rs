//! Per-variant dashboard routes.
//!
//! Every variant mounts the same four routes at its base path; the
//! nested router's state is the variant's [`Board`]. The server keeps no
//! session state: the selection travels inside each update request and
//! comes back in the response.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use panel::{export_csv, run_cycle, DownloadRequest, UpdateRequest, UpdateResponse};

use crate::Board;

pub fn routes(board: Board) -> Router {
    Router::new()
        .route("/options", get(get_options))
        .route("/boundaries", get(get_boundaries))
        .route("/update", post(post_update))
        .route("/download", post(post_download))
        .with_state(board)
}

async fn get_options(State(board): State<Board>) -> Json<Value> {
    Json(json!({
        "slug": board.variant.slug,
        "area_label": board.variant.area_label,
        "default_modality": board.variant.default_modality,
        "modalities": board.options.modalities,
        "secondary": board.options.secondary,
        "ufs": board.options.ufs,
    }))
}

async fn get_boundaries(State(board): State<Board>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/geo+json"),
    );
    (StatusCode::OK, headers, board.boundaries.as_ref().clone()).into_response()
}

async fn post_update(
    State(board): State<Board>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    Json(run_cycle(&board.dataset, board.variant, &request))
}

async fn post_download(
    State(board): State<Board>,
    Json(request): Json<DownloadRequest>,
) -> Response {
    let Some(download) = export_csv(board.dataset.areas(), board.variant, &request) else {
        // Trigger never fired: no spurious download.
        return StatusCode::NO_CONTENT.into_response();
    };

    let disposition = format!("attachment; filename=\"{}\"", download.filename);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    (StatusCode::OK, headers, download.content).into_response()
}
