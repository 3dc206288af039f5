use crate::models::AppState;
use crate::models::oauth::LoginParams;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

pub async fn login_handler(
    State(app_state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> impl IntoResponse {
    let state = params.state.unwrap_or_else(|| "default".to_string());

    let mut url = reqwest::Url::parse(&app_state.config.authorize_url)
        .expect("Failed to parse authorize URL");

    url.query_pairs_mut()
        .append_pair("client_id", &app_state.config.client_id)
        .append_pair("redirect_uri", &app_state.config.redirect_uri)
        .append_pair("scope", "repo")
        .append_pair("state", &state);

    let constructed_url = url.to_string();

    tracing::debug!(%state, "redirecting to the GitHub authorization page");
    // 302 Found; axum's `Redirect::to` would answer 303.
    (StatusCode::FOUND, [(header::LOCATION, constructed_url)])
}
