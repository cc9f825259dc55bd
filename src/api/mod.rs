//! PokeAPI Module
//!
//! Typed, cached access to the location-area and pokemon endpoints.

mod client;
pub mod types;

pub use client::{Direction, PokeApiClient};
pub use types::{LocationArea, LocationAreaPage, NamedResource, Pokemon};
