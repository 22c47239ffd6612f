use crate::http::ApiContext;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, MethodRouter};
use axum::Router;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serves `FILEPATH_ROOT` under `/app`, counting every request on the way in.
///
/// The prefix is stripped by `nest_service`, so `/app/index.html` maps to
/// `<FILEPATH_ROOT>/index.html`.
pub(crate) fn router(ctx: ApiContext) -> Router<ApiContext> {
    let files: MethodRouter = any(serve_file).with_state(ctx);
    Router::new().nest_service("/app", files)
}

async fn serve_file(State(ctx): State<ApiContext>, req: Request<Body>) -> Response {
    // Counted before the file layer runs, so misses and errors count too.
    ctx.hits.increment();

    match ServeDir::new(&ctx.config.filepath_root).oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(e) => crate::http::Error::Anyhow(anyhow::Error::new(e)).into_response(),
    }
}
