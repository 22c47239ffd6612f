use crate::http::Error;
use axum::async_trait;
use axum::body::{Body, Bytes};
use axum::extract::FromRequest;
use axum::http::Request;
use serde::de::DeserializeOwned;

/// Decodes the request body as JSON into `T`.
///
/// Unlike `axum::Json`, this doesn't insist on a `Content-Type: application/json` header,
/// and every failure (unreadable body, bad syntax, wrong types) becomes `Error::Decode`
/// so it's rendered through the same envelope as everything else.
///
/// Parameter types opt into `#[serde(default)]`, so missing fields come through empty
/// and unknown ones are ignored.
pub struct JsonParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S, Body> for JsonParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::Decode(anyhow::anyhow!("failed to read request body: {}", e)))?;

        let params = serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.into()))?;

        Ok(Self(params))
    }
}
