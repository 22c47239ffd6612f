//! The only two ways a JSON endpoint answers a request.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::fmt::Debug;

/// Sent with a 500 when a response body can't be serialized. Clients depend on this exact text.
pub const FALLBACK_BODY: &str = r#"{"error":"Internal server error"}"#;

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Writes `payload` as a JSON body with the given status.
pub fn respond<T: serde::Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => json_response(status, body),
        Err(e) => {
            log::error!("error serializing response body: {}", e);
            json_response(StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_BODY.into())
        }
    }
}

/// Writes `{"error": message}` with the given status.
///
/// `cause` is logged when present, and so is every 5xx whether or not it has one.
/// Client errors should pass `None` so that their causes stay out of the logs.
pub fn fail(status: StatusCode, message: &str, cause: Option<&dyn Debug>) -> Response {
    match cause {
        Some(cause) => log::error!("{} ({}): {:?}", message, status, cause),
        None if status.is_server_error() => log::error!("{} ({})", message, status),
        None => {}
    }

    respond(status, &ErrorBody { error: message })
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
