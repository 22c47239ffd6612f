use crate::http::extractor::JsonParams;
use crate::http::{envelope, ApiContext, Error, Result, ResultExt};
use crate::models::chirp::{Chirp, CreateChirp, NewChirp, ValidateChirp};
use crate::moderation::moderate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::Router;

/// Longest body accepted, counted in characters before moderation.
pub const MAX_CHIRP_LENGTH: usize = 140;

pub(crate) fn router() -> Router<ApiContext> {
    Router::new()
        .route("/api/chirps", post(create_chirp).get(list_chirps))
        .route("/api/validate_chirp", post(validate_chirp))
}

#[derive(serde::Serialize)]
struct CleanedBody {
    cleaned_body: String,
}

fn check_length(body: &str) -> Result<()> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(Error::ChirpTooLong);
    }
    Ok(())
}

async fn create_chirp(
    ctx: State<ApiContext>,
    JsonParams(req): JsonParams<CreateChirp>,
) -> Result<Response> {
    check_length(&req.body)?;

    let chirp = ctx
        .store
        .chirp()
        .create_chirp(NewChirp {
            body: moderate(&req.body),
            user_id: req.user_id,
        })
        .await
        .or_store_error("Error creating chirp")?;

    Ok(envelope::respond(StatusCode::CREATED, &chirp.into_chirp()))
}

async fn list_chirps(ctx: State<ApiContext>) -> Result<Response> {
    let chirps: Vec<Chirp> = ctx
        .store
        .chirp()
        .list_chirps()
        .await
        .or_store_error("Error retrieving chirps")?
        .into_iter()
        .map(|record| record.into_chirp())
        .collect();

    Ok(envelope::respond(StatusCode::OK, &chirps))
}

/// Same checks as `create_chirp`, but nothing is stored.
async fn validate_chirp(JsonParams(req): JsonParams<ValidateChirp>) -> Result<Response> {
    check_length(&req.body)?;

    Ok(envelope::respond(
        StatusCode::OK,
        &CleanedBody {
            cleaned_body: moderate(&req.body),
        },
    ))
}
