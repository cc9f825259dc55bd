//! Pokedex - A command-line PokeAPI explorer
//!
//! Lists location areas, explores their encounters and simulates captures.
//! Responses are memoised in a time-bounded cache that a background task
//! sweeps once per TTL.

pub mod api;
pub mod cache;
pub mod capture;
pub mod config;
pub mod error;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
