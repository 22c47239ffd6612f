use crate::http::{envelope, ApiContext, Error, Result, ResultExt};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::Router;

pub(crate) fn router() -> Router<ApiContext> {
    Router::new()
        .route("/admin/metrics", get(metrics))
        .route("/admin/reset", post(reset))
}

#[derive(serde::Serialize)]
struct MessageBody {
    message: &'static str,
}

async fn metrics(ctx: State<ApiContext>) -> Html<String> {
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {} times!</p></body></html>",
        ctx.hits.read()
    ))
}

/// Deletes every user and zeroes the hit counter. Only available on the `dev` platform.
///
/// The two steps aren't atomic; if the delete fails the counter keeps its value.
async fn reset(ctx: State<ApiContext>) -> Result<Response> {
    if !ctx.config.is_dev() {
        return Err(Error::Forbidden);
    }

    ctx.store
        .user()
        .delete_all_users()
        .await
        .or_store_error("Error deleting users")?;

    ctx.hits.reset();

    Ok(envelope::respond(
        StatusCode::OK,
        &MessageBody {
            message: "All users deleted successfully, fileserverHits reset to zero",
        },
    ))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{send, TestApp};
    use crate::models::user::MockUserCtrlTrait;
    use crate::models::MockStoreTrait;
    use axum::http::{header, Method, StatusCode};
    use serde_json::json;
    use std::sync::Arc;

    fn store_expecting_delete(result: crate::http::Result<()>) -> MockStoreTrait {
        let mut user_ctrl = MockUserCtrlTrait::new();
        user_ctrl
            .expect_delete_all_users()
            .times(1)
            .return_once(move || result);
        let user_ctrl = Arc::new(user_ctrl);

        let mut mock_store = MockStoreTrait::new();
        mock_store
            .expect_user()
            .times(1)
            .returning(move || user_ctrl.clone());
        mock_store
    }

    #[tokio::test]
    async fn metrics_renders_the_hit_count() {
        let app = TestApp::new(MockStoreTrait::new());
        for _ in 0..7 {
            app.ctx.hits.increment();
        }

        let response = send(app.router(), Method::GET, "/admin/metrics", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(
            response.text(),
            "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited 7 times!</p></body></html>"
        );
    }

    #[tokio::test]
    async fn reset_outside_dev_is_forbidden() {
        let mut mock_store = MockStoreTrait::new();
        mock_store.expect_user().never();

        let app = TestApp::with_platform(mock_store, "prod");
        app.ctx.hits.increment();

        let response = send(app.router(), Method::POST, "/admin/reset", None).await;

        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.json(), json!({ "error": "Forbidden" }));
        assert_eq!(app.ctx.hits.read(), 1);
    }

    #[tokio::test]
    async fn reset_in_dev_deletes_users_then_zeroes_hits() {
        let app = TestApp::with_platform(store_expecting_delete(Ok(())), "dev");
        for _ in 0..5 {
            app.ctx.hits.increment();
        }

        let response = send(app.router(), Method::POST, "/admin/reset", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.json(),
            json!({ "message": "All users deleted successfully, fileserverHits reset to zero" })
        );
        assert_eq!(app.ctx.hits.read(), 0);
    }

    #[tokio::test]
    async fn failed_delete_leaves_hits_alone() {
        let app = TestApp::with_platform(
            store_expecting_delete(Err(sqlx::Error::PoolTimedOut.into())),
            "dev",
        );
        for _ in 0..5 {
            app.ctx.hits.increment();
        }

        let response = send(app.router(), Method::POST, "/admin/reset", None).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json(), json!({ "error": "Error deleting users" }));
        assert_eq!(app.ctx.hits.read(), 5);
    }
}
