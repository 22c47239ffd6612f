use crate::http::ApiContext;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

pub(crate) fn router() -> Router<ApiContext> {
    Router::new().route("/api/healthz", get(healthz))
}

async fn healthz() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
