/// Command-line and environment configuration.
pub mod config;

/// The HTTP layer: routing, handlers, and the response envelope they all share.
pub mod http;

/// The counter behind `/admin/metrics`.
pub mod metrics;

/// Store traits and their Postgres implementations.
pub mod models;

/// Censoring of chirp bodies.
pub mod moderation;

/// Argon2 password hashing.
pub mod password;
