//! Background Tasks Module
//!
//! Contains background tasks that run alongside the explorer.
//!
//! # Tasks
//! - Cache reaper: removes entries older than the cache TTL, once per TTL

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
