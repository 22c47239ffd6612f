use crate::http::envelope;
use crate::password::HashError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function.
///
/// For convenience, this represents both API errors as well as internal recoverable errors,
/// and maps them to appropriate status codes. The `Display` impl is the message the client sees.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request body couldn't be read or wasn't the JSON we expected.
    ///
    /// This is a 500 rather than a 400; existing clients rely on it.
    #[error("Error decoding parameters")]
    Decode(#[source] anyhow::Error),

    #[error("Chirp is too long")]
    ChirpTooLong,

    /// Unknown email or wrong password. The two are reported identically so that the
    /// response doesn't reveal which accounts exist.
    #[error("Incorrect email or password")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    /// A call to the store failed. `message` names the operation for the client.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to hash password")]
    Hash(#[from] HashError),

    /// Automatically return `500 Internal Server Error` on a `sqlx::Error`.
    ///
    /// Via the generated `From<sqlx::Error> for Error` impl,
    /// this allows using `?` on database calls in handler functions without a manual mapping step.
    ///
    /// The actual error message isn't returned to the client for security reasons.
    /// It should be logged instead.
    #[error("Internal server error")]
    Sqlx(#[from] sqlx::Error),

    /// Return `500 Internal Server Error` on a `anyhow::Error`.
    ///
    /// `anyhow::Error` is used in a few places to capture context and backtraces
    /// on unrecoverable (but technically non-fatal) errors which we don't want to expose.
    #[error("Internal server error")]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ChirpTooLong => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Decode(_)
            | Self::Store { .. }
            | Self::Hash(_)
            | Self::Sqlx(_)
            | Self::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Axum allows you to return `Result` from handler functions, but the error type
/// also must be some sort of response type.
///
/// Every error goes out through `envelope::fail`, so the body is always `{"error": "..."}`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match &self {
            Self::Decode(cause) => envelope::fail(status, &message, Some(cause)),
            Self::Store { source, .. } => envelope::fail(status, &message, Some(source)),
            Self::Hash(cause) => envelope::fail(status, &message, Some(cause)),
            Self::Sqlx(cause) => envelope::fail(status, &message, Some(cause)),
            Self::Anyhow(cause) => envelope::fail(status, &message, Some(cause)),
            // Client errors are the client's business; we don't log them.
            Self::ChirpTooLong | Self::Unauthorized | Self::Forbidden => {
                envelope::fail(status, &message, None)
            }
        }
    }
}

/// A little helper trait for labelling a failed store call with what the handler was doing.
///
/// ```rust,ignore
/// let chirps = ctx
///     .store
///     .chirp()
///     .list_chirps()
///     .await
///     .or_store_error("Error retrieving chirps")?;
/// ```
pub trait ResultExt<T> {
    fn or_store_error(self, message: &'static str) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn or_store_error(self, message: &'static str) -> Result<T, Error> {
        self.map_err(|e| Error::Store {
            message,
            source: anyhow::Error::new(e.into()),
        })
    }
}
