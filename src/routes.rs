use axum::{response::Html, routing::get, Router};

/// The page served at `/`. Kept byte-identical to the deployed page so smoke
/// checks can match on it exactly.
pub const INDEX_BODY: &str = "<!DOCTYPE html><html lang=\"ja\"><head><meta charset=\"UTF-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"><title>My First Web App</title></head><body><h1>Hello_World! App.js is Running!</h1></body></html>";

/// Unmatched paths and methods fall through to axum's defaults
/// (404 and 405 respectively).
pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_BODY)
}
