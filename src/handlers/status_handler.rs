use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
    message: &'static str,
    endpoints: [&'static str; 2],
}

pub async fn status_handler() -> impl IntoResponse {
    Json(StatusResponse {
        status: "OK",
        message: "Decap CMS OAuth Server",
        endpoints: ["/oauth/github", "/oauth/callback"],
    })
}
