//! In-process caches for air quality data.
//!
//! Both caches are plain values owned by whoever needs them (the server
//! keeps one of each in its application state) and are shared by
//! reference. Neither persists across restarts.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use complaint_map_aqi_models::AqiStation;

use crate::AqiError;
use crate::service::WaqiService;
use crate::waqi;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The most recent live city-average AQI and when it was computed.
///
/// Used as a fallback when no station is currently reporting.
#[derive(Debug, Default)]
pub struct LastKnownAqi {
    inner: Mutex<Option<(u32, DateTime<Utc>)>>,
}

impl LastKnownAqi {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Returns the remembered value and its timestamp, if any.
    #[must_use]
    pub fn get(&self) -> Option<(u32, DateTime<Utc>)> {
        *lock(&self.inner)
    }

    /// Remembers a live value.
    pub fn set(&self, value: u32, timestamp: DateTime<Utc>) {
        *lock(&self.inner) = Some((value, timestamp));
    }

    /// Forgets the remembered value.
    pub fn clear(&self) {
        *lock(&self.inner) = None;
    }
}

/// Time-limited cache of the last fetched station list.
#[derive(Debug)]
pub struct StationCache {
    ttl: Duration,
    entry: Mutex<Option<(Instant, Vec<AqiStation>)>>,
}

impl StationCache {
    /// Creates an empty cache whose entries stay fresh for `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached stations if they were fetched less than `ttl`
    /// before `now`.
    #[must_use]
    pub fn fresh(&self, now: Instant) -> Option<Vec<AqiStation>> {
        lock(&self.entry).as_ref().and_then(|(fetched_at, stations)| {
            (now.saturating_duration_since(*fetched_at) < self.ttl).then(|| stations.clone())
        })
    }

    /// Replaces the cached stations.
    pub fn store(&self, stations: Vec<AqiStation>, fetched_at: Instant) {
        *lock(&self.entry) = Some((fetched_at, stations));
    }

    /// Drops the cached stations so the next lookup refetches.
    pub fn clear(&self) {
        *lock(&self.entry) = None;
    }

    /// Returns fresh cached stations, or fetches and caches a new list.
    ///
    /// Failed fetches are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`AqiError`] if a fetch was needed and failed.
    pub async fn get_or_fetch(
        &self,
        client: &reqwest::Client,
        service: &WaqiService,
        token: &str,
    ) -> Result<Vec<AqiStation>, AqiError> {
        if let Some(stations) = self.fresh(Instant::now()) {
            log::debug!("Using cached AQI stations ({})", stations.len());
            return Ok(stations);
        }

        let stations = waqi::fetch_stations(client, service, token).await?;
        self.store(stations.clone(), Instant::now());
        Ok(stations)
    }
}
