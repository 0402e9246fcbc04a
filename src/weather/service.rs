//! Weather Service
//!
//! The single authoritative path from "city + unit preference" to a
//! [`NormalizedWeather`] value. Mediates between the TTL cache and the
//! provider: fresh cache entries are reused; misses fetch, normalize and
//! store. Provider calls happen outside the cache lock, so concurrent
//! misses for the same key may each fetch independently; last write wins.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::cache::CacheStore;
use crate::error::{Result, WeatherError};
use crate::provider::WeatherProvider;
use crate::weather::normalize::normalize;
use crate::weather::types::{NormalizedWeather, Units};

// == Weather Service ==
/// Cache-mediated weather lookup over an abstract provider.
#[derive(Clone)]
pub struct WeatherService {
    cache: Arc<RwLock<CacheStore<NormalizedWeather>>>,
    provider: Arc<dyn WeatherProvider>,
    cache_ttl: u64,
}

impl WeatherService {
    // == Constructor ==
    /// Creates a new service over the given cache, provider and TTL.
    pub fn new(
        cache: Arc<RwLock<CacheStore<NormalizedWeather>>>,
        provider: Arc<dyn WeatherProvider>,
        cache_ttl: u64,
    ) -> Self {
        Self {
            cache,
            provider,
            cache_ttl,
        }
    }

    /// Deterministic cache key for a (city, units) pair.
    ///
    /// City names differing only in case or surrounding whitespace
    /// collide on the same key.
    pub fn cache_key(city: &str, units: Units) -> String {
        format!("{}_{}", city.trim().to_lowercase(), units)
    }

    // == Get Weather ==
    /// Returns current weather for a city, serving from the cache when a
    /// fresh entry exists.
    ///
    /// Cached copies come back with `cached = true` and their original
    /// fetch timestamp. On a miss the provider is called, the payload
    /// normalized and stored under the configured TTL. Provider failures
    /// are translated at the provider boundary and never write to the
    /// cache.
    pub async fn get_weather(&self, city: &str, units: Units) -> Result<NormalizedWeather> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidInput(
                "City name is required".to_string(),
            ));
        }

        let key = Self::cache_key(city, units);

        // Cache read in its own lock scope; the provider call below must
        // not hold the lock across network I/O
        if let Some(mut hit) = self.cache.write().await.get(&key) {
            info!("returning cached data for {}", city);
            hit.cached = true;
            return Ok(hit);
        }

        let raw = self.provider.fetch_current(city, units).await?;
        let weather = normalize(raw, units, self.provider.name());

        self.cache
            .write()
            .await
            .set(key, weather.clone(), self.cache_ttl);

        info!("fetched fresh weather data for {}", city);
        Ok(weather)
    }

    // == Cached Weather ==
    /// Cache-only lookup; never touches the provider.
    pub async fn cached_weather(&self, city: &str, units: Units) -> Option<NormalizedWeather> {
        let key = Self::cache_key(city, units);
        let mut hit = self.cache.write().await.get(&key)?;
        hit.cached = true;
        Some(hit)
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
