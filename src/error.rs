//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the API client, the cache constructor and the REPL.
///
/// Cache lookups never produce one of these: a miss is `None`.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status code
    #[error("Response failed with status code: {status} and\nbody: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// `mapb` was issued while on the first page
    #[error("At top of locations list")]
    AtFirstPage,

    /// A command was issued without its required argument
    #[error("No {0} name was entered")]
    MissingArgument(&'static str),

    /// The configured API root cannot have paths appended to it
    #[error("Invalid PokeAPI base URL: {0}")]
    InvalidBaseUrl(String),

    /// A cache was configured with a zero TTL
    #[error("Cache TTL must be greater than zero")]
    InvalidTtl,

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
