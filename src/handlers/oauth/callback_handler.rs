use crate::handlers::oauth::popup;
use crate::models::AppState;
use crate::models::app_config::AppConfig;
use crate::models::oauth::CallbackParams;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

/// Ways the code-for-token exchange can fail. All of them end the request
/// as a 500 with the error page; the popup relays the description to the
/// opener.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Token endpoint returned HTTP {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },
    #[error("No access token received")]
    MissingToken,
}

/// Receive GitHub's redirect, trade the code for an access token and
/// answer with the popup page that relays the outcome to the opener.
/// Every path is terminal: no retries, at most one exchange per request.
pub async fn callback_handler(
    State(app_state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    tracing::debug!(
        code_present = params.code.is_some(),
        state = ?params.state,
        "OAuth callback received"
    );

    // An empty `code=` counts as missing, like a fully absent parameter.
    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Authorization code not found").into_response();
    };

    let config = &app_state.config;
    match exchange_code(config, &code).await {
        Ok(access_token) => {
            Html(popup::success_page(&access_token, &config.site_url)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token exchange failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(popup::error_page(&e.to_string(), &config.site_url)),
            )
                .into_response()
        }
    }
}

/// Exchange an authorization code at the token endpoint. Issues exactly
/// one request; the client secret travels only in this form body.
pub async fn exchange_code(config: &AppConfig, code: &str) -> Result<String, ExchangeError> {
    #[derive(Deserialize)]
    struct TokenResponse {
        access_token: Option<String>,
    }

    let params = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("code", code),
        ("redirect_uri", config.redirect_uri.as_str()),
    ];

    let client = reqwest::Client::new();
    let response = client
        .post(&config.token_url)
        .header(ACCEPT, "application/json")
        .form(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        return Err(ExchangeError::UpstreamStatus { status, body });
    }

    let token_data = response.json::<TokenResponse>().await?;
    token_data.access_token.ok_or(ExchangeError::MissingToken)
}
