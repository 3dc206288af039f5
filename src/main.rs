mod handlers;
mod models;

use axum::{Router, routing::get};
use handlers::oauth::{callback_handler, login_handler};
use handlers::status_handler;
use models::{AppConfig, AppState};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("decap_oauth_server=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true),
        )
        .init();
}

/// Log which variables are present without printing secret values.
fn report_configuration(config: &AppConfig) {
    tracing::info!(
        client_id_set = !config.client_id.is_empty(),
        client_secret_set = !config.client_secret.is_empty(),
        redirect_uri = %config.redirect_uri,
        site_url = %config.site_url,
        "environment loaded"
    );

    let missing = config.missing();
    if !missing.is_empty() {
        tracing::warn!(
            ?missing,
            "missing environment variables; OAuth flows will fail until they are set"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();
    report_configuration(&config);

    let app_state = AppState {
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(status_handler))
        .route("/oauth/github", get(login_handler))
        .route("/oauth/callback", get(callback_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
