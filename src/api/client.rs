//! PokeAPI HTTP client
//!
//! Every GET goes through the shared response cache, keyed by the full URL.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::types::{LocationArea, LocationAreaPage, Pokemon};
use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};

/// Which page of location areas to load next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Client for the PokeAPI, memoising response bodies in a `Cache`.
///
/// Also tracks the `map`/`mapb` paging position.
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: Arc<Cache>,
    base_url: Url,
    page_size: u32,
    next_url: Option<String>,
    previous_url: Option<String>,
}

impl PokeApiClient {
    /// Create a client from configuration, sharing `cache` with other callers
    pub fn new(config: &Config, cache: Arc<Cache>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| PokedexError::InvalidBaseUrl(config.base_url.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url,
            page_size: config.page_size,
            next_url: None,
            previous_url: None,
        })
    }

    /// URL of the first location-area page
    pub fn first_page_url(&self) -> Result<String> {
        let mut url = self.endpoint(&["location-area"])?;
        url.set_query(Some(&format!("offset=0&limit={}", self.page_size)));
        Ok(url.into())
    }

    /// Appends `segments` to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PokedexError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch a page of location areas in the given direction.
    ///
    /// Starts at the first page when no page has been loaded yet. Moving back
    /// from the first page is an error. A successful load replaces the stored
    /// next/previous URLs.
    pub async fn location_areas(&mut self, direction: Direction) -> Result<LocationAreaPage> {
        let url = match direction {
            Direction::Next => match self.next_url.clone() {
                Some(url) => url,
                None => self.first_page_url()?,
            },
            Direction::Previous => self
                .previous_url
                .clone()
                .ok_or(PokedexError::AtFirstPage)?,
        };

        let page: LocationAreaPage = self.get_json(&url).await?;
        self.next_url = page.next.clone();
        self.previous_url = page.previous.clone();

        Ok(page)
    }

    /// Fetch one location area and its encounters
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.endpoint(&["location-area", name])?;
        self.get_json(url.as_str()).await
    }

    /// Fetch one Pokemon
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.endpoint(&["pokemon", name])?;
        self.get_json(url.as_str()).await
    }

    /// GET `url`, answering from the cache when possible.
    ///
    /// Only successful responses are cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Serving response from cache");
            return Ok(body);
        }

        debug!(url, "Cache miss, requesting upstream");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() > 299 {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
