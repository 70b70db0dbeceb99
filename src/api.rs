//! OpenDota HTTP access and the cache-or-network decision for player heroes.

use crate::cache::{CacheGateway, KeyValueStore};
use crate::{HeroCatalogEntry, HeroStatRecord};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    Network { url: String, status: u16 },
    /// The body was not the JSON we expected.
    Parse(String),
    /// The request never produced a readable response.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network { url, status } => {
                write!(f, "Network response was not ok: HTTP {} from {}", status, url)
            }
            FetchError::Parse(reason) => write!(f, "Failed to parse response body: {}", reason),
            FetchError::Transport(reason) => write!(f, "Request failed: {}", reason),
        }
    }
}

impl std::error::Error for FetchError {}

pub fn player_heroes_url(base: &str, player_id: u64) -> String {
    format!("{}/players/{}/heroes", base.trim_end_matches('/'), player_id)
}

pub fn heroes_url(base: &str) -> String {
    format!("{}/heroes", base.trim_end_matches('/'))
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

pub fn parse_player_heroes(body: &str) -> Result<Vec<HeroStatRecord>, FetchError> {
    parse_json(body)
}

pub fn parse_hero_catalog(body: &str) -> Result<Vec<HeroCatalogEntry>, FetchError> {
    parse_json(body)
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return error.message().into();
    }
    format!("{:?}", err)
}

/// GET `url` and return the body text of a successful response.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let transport = |e: JsValue| FetchError::Transport(js_error_message(&e));

    let response = JsFuture::from(gloo_utils::window().fetch_with_str(url))
        .await
        .map_err(transport)?;
    let response: web_sys::Response = response.dyn_into().map_err(transport)?;
    if !response.ok() {
        return Err(FetchError::Network {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    body.as_string()
        .ok_or_else(|| FetchError::Transport("response body is not text".to_string()))
}

pub async fn fetch_player_heroes(
    base: &str,
    player_id: u64,
) -> Result<Vec<HeroStatRecord>, FetchError> {
    let url = player_heroes_url(base, player_id);
    debug!("Fetching player heroes from {}", url);
    let records = parse_player_heroes(&fetch_text(&url).await?)?;
    info!("Fetched {} hero records for player {}", records.len(), player_id);
    Ok(records)
}

pub async fn fetch_hero_catalog(base: &str) -> Result<Vec<HeroCatalogEntry>, FetchError> {
    let url = heroes_url(base);
    debug!("Fetching hero catalog from {}", url);
    let catalog = parse_hero_catalog(&fetch_text(&url).await?)?;
    info!("Fetched {} heroes", catalog.len());
    Ok(catalog)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Cache,
    Network,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Cache => f.write_str("cache"),
            DataSource::Network => f.write_str("network"),
        }
    }
}

/// Records for display and where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<HeroStatRecord>,
    pub source: DataSource,
}

async fn fetch_and_store<S, F, Fut, C>(
    gateway: &CacheGateway<S>,
    clock: C,
    fetch: F,
) -> Result<LoadOutcome, FetchError>
where
    S: KeyValueStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<HeroStatRecord>, FetchError>>,
    C: Fn() -> i64,
{
    let records = fetch().await?;
    if let Err(e) = gateway.write(&records, clock()) {
        warn!("Fetched hero records were not cached: {}", e);
    }
    Ok(LoadOutcome {
        records,
        source: DataSource::Network,
    })
}

/// Serve fresh cached records, otherwise fetch and repopulate the cache.
///
/// `clock` returns the current time in ms; it is read once for the freshness
/// decision and again after the fetch to stamp the new envelope.
pub async fn load_player_heroes<S, F, Fut, C>(
    gateway: &CacheGateway<S>,
    clock: C,
    fetch: F,
) -> Result<LoadOutcome, FetchError>
where
    S: KeyValueStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<HeroStatRecord>, FetchError>>,
    C: Fn() -> i64,
{
    if let Some(records) = gateway.fresh_records(clock()) {
        info!("Using {} cached hero records", records.len());
        return Ok(LoadOutcome {
            records,
            source: DataSource::Cache,
        });
    }
    fetch_and_store(gateway, clock, fetch).await
}

/// Drop the cached slot and fetch again.
///
/// The cache stays empty if the fetch fails.
pub async fn refresh_player_heroes<S, F, Fut, C>(
    gateway: &CacheGateway<S>,
    clock: C,
    fetch: F,
) -> Result<LoadOutcome, FetchError>
where
    S: KeyValueStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<HeroStatRecord>, FetchError>>,
    C: Fn() -> i64,
{
    gateway.invalidate();
    fetch_and_store(gateway, clock, fetch).await
}
