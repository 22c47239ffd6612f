/// Defines a common error type to use for all request handlers.
mod error;

/// The uniform JSON success/error responses every JSON endpoint goes through.
pub mod envelope;

/// Contains `JsonParams`, the request-body extractor used by the handlers that take input.
pub mod extractor;

/// A catch-all module for other common types in the API.
pub mod types;

// Modules introducing routes. See `api_router()` in `server` for how they're assembled.
mod admin;
mod app;
mod chirps;
mod health;
mod users;

pub mod server;
pub use server::serve;

pub mod api_context;
pub use api_context::ApiContext;

pub use error::{Error, ResultExt};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod test_support;
