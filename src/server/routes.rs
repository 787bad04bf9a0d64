use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;

use crate::core::{ChClient, ChError};
use crate::resolve::resolve_company;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: ChClient,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

/// Build the API router around `client`.
pub fn router(client: ChClient) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/company/search", get(search_company))
        .with_state(AppState { client })
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn missing_name() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing 'name' parameter in the request." })),
    )
        .into_response()
}

/// `GET /company/search?name=PT.%20Buka%20Bumi%20Konstruksi`
pub(crate) async fn search_company(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(name) = params.name.filter(|n| !n.is_empty()) else {
        return missing_name();
    };

    match resolve_company(&state.client, &name).await {
        Ok(profile) => {
            tracing::info!(%name, url = %profile.url(), "company resolved");
            Json(profile).into_response()
        }
        Err(ChError::InvalidInput(_)) => missing_name(),
        Err(err) => {
            tracing::warn!(%name, kind = ?err.kind(), error = %err, "company lookup failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": format!(
                        "Could not find or extract information for '{name}'. Please verify the company name."
                    )
                })),
            )
                .into_response()
        }
    }
}
