use std::sync::Arc;

use anyhow::{Context, Result};
use clash_protocol::{MoveData, PokemonData};
use futures_util::future::join_all;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::api::{ApiMove, ApiPokemon};
use crate::cache::DexCache;
use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::normalize::normalize_identifier;

/// Async creature data client with a shared cache
///
/// Cloning is cheap; clones share the HTTP pool, the cache and the
/// request limiter.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    cache: Arc<DexCache>,
    limiter: Arc<Semaphore>,
}

impl DexClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let limiter = Arc::new(Semaphore::new(config.max_concurrent_requests.max(1)));

        Ok(Self {
            http,
            config: Arc::new(config),
            cache: Arc::new(DexCache::default()),
            limiter,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a creature by name or numeric id, hitting the network on a cache miss
    pub async fn get_pokemon(&self, identifier: &str) -> Result<Arc<PokemonData>> {
        let key = normalize_identifier(identifier);
        if key.is_empty() {
            return Err(FetchError::InvalidIdentifier(identifier.to_string()).into());
        }

        if let Some(data) = self.cache.get(&key).await {
            tracing::debug!(identifier = %key, "Cache hit");
            return Ok(data);
        }

        let url = format!("{}/pokemon/{}", self.config.base_url, key);
        let api: ApiPokemon = self
            .fetch_json(&url, &key)
            .await
            .with_context(|| format!("Failed to fetch Pokemon '{}'", identifier.trim()))?;

        let moves = self.fetch_moves(api.move_urls(self.config.move_limit)).await;
        let data = Arc::new(api.into_record(moves));

        tracing::info!(
            identifier = %key,
            id = data.id,
            moves = data.moves.len(),
            "Fetched Pokemon"
        );

        self.cache.insert(&key, Arc::clone(&data)).await;
        Ok(data)
    }

    /// Pre-seed the cache, e.g. with fixtures or an offline snapshot
    pub async fn insert(&self, data: PokemonData) -> Arc<PokemonData> {
        let data = Arc::new(data);
        let key = normalize_identifier(&data.name);
        self.cache.insert(&key, Arc::clone(&data)).await;
        data
    }

    /// Cached record for an identifier, without touching the network
    pub async fn cached(&self, identifier: &str) -> Option<Arc<PokemonData>> {
        self.cache.get(&normalize_identifier(identifier)).await
    }

    /// Fetch move details concurrently; failures are logged and skipped
    async fn fetch_moves(&self, urls: Vec<String>) -> Vec<MoveData> {
        let requests = urls.iter().map(|url| async move {
            let result = self.fetch_json::<ApiMove>(url, url).await;
            (url, result)
        });

        join_all(requests)
            .await
            .into_iter()
            .filter_map(|(url, result)| match result {
                Ok(mv) => Some(mv.into_record()),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Skipping move that failed to load");
                    None
                }
            })
            .collect()
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str, identifier: &str) -> Result<T> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .context("Request limiter closed")?;

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(identifier.to_string()).into());
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                identifier: identifier.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }
}
