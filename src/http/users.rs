use crate::http::extractor::JsonParams;
use crate::http::{envelope, ApiContext, Error, Result, ResultExt};
use crate::models::user::{Credentials, NewUser};
use crate::password;
use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::Router;

pub(crate) fn router() -> Router<ApiContext> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/login", post(login_user))
}

async fn create_user(
    ctx: State<ApiContext>,
    JsonParams(req): JsonParams<Credentials>,
) -> Result<Response> {
    let hashed_password = hash_password(req.password).await?;

    let user = ctx
        .store
        .user()
        .create_user(NewUser {
            email: req.email,
            hashed_password,
        })
        .await
        .or_store_error("Error creating user")?;

    Ok(envelope::respond(StatusCode::CREATED, &user.into_public()))
}

async fn login_user(
    ctx: State<ApiContext>,
    JsonParams(req): JsonParams<Credentials>,
) -> Result<Response> {
    // Whether the account is missing or the password is wrong, the client hears the same thing.
    let user = ctx
        .store
        .user()
        .user_by_email(&req.email)
        .await
        .or(Err(Error::Unauthorized))?;

    let (public, hashed_password) = user.into_public_and_hash();

    verify_password(req.password, hashed_password).await?;

    Ok(envelope::respond(StatusCode::OK, &public))
}

async fn hash_password(plaintext: String) -> Result<String> {
    // Argon2 hashing is designed to be computationally intensive,
    // so we need to do this on a blocking thread.
    tokio::task::spawn_blocking(move || -> Result<String> { Ok(password::hash(&plaintext)?) })
        .await
        .context("panic in generating password hash")?
}

async fn verify_password(plaintext: String, hashed_password: String) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        password::verify(&hashed_password, &plaintext).map_err(|_| Error::Unauthorized)
    })
    .await
    .context("panic in verifying password hash")?
}
