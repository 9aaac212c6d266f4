use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{header::AUTHORIZATION, Client, Url};
use serde::Deserialize;
use serde_json::Value;

use courtside_core::models::{list_items, single_data};

use crate::cache::TtlCache;
use crate::error::FetchError;

/// Longest body excerpt carried by an upstream error.
pub const ERROR_BODY_PREFIX: usize = 200;

pub const ROSTER_PAGE_SIZE: u32 = 25;
pub const STATS_PAGE_SIZE: u32 = 100;

/// One provider request: path segments below the base URL plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Games scheduled on `date`.
    pub fn games_on(date: NaiveDate) -> Self {
        Self::new(["games"]).with_query("dates[]", date.format("%Y-%m-%d"))
    }

    pub fn game(game_id: &str) -> Self {
        Self::new(["games", game_id])
    }

    pub fn active_roster(team_id: i64) -> Self {
        Self::new(["players", "active"])
            .with_query("team_ids[]", team_id)
            .with_query("per_page", ROSTER_PAGE_SIZE)
    }

    pub fn player(player_id: &str) -> Self {
        Self::new(["players", player_id])
    }

    pub fn season_stats(player_id: &str, season: i32) -> Self {
        Self::new(["stats"])
            .with_query("player_ids[]", player_id)
            .with_query("seasons[]", season)
            .with_query("per_page", STATS_PAGE_SIZE)
    }

    /// Path below the base URL, for log lines.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Absolute URL under `base`. Segments and query values are percent-encoded.
    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(base.to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// A single GET against the provider, returning the decoded JSON body.
#[async_trait]
pub trait StatsTransport: Send + Sync {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

/// reqwest-backed transport carrying the provider credential.
pub struct HttpTransport {
    client: Client,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(api_key: Option<String>) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent("Courtside/1.0").build()?;
        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl StatsTransport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let mut request = self.client.get(url.clone());
        // The provider takes the raw key, without a scheme prefix.
        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, key);
        }

        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_PREFIX).collect(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Cache-through access to the statistics provider.
pub struct UpstreamClient {
    base_url: Url,
    transport: Arc<dyn StatsTransport>,
    cache: TtlCache<String, Arc<Value>>,
}

impl UpstreamClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn StatsTransport>,
        ttl: Duration,
    ) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::Url(format!("{base_url}: {e}")))?;
        Ok(Self {
            base_url,
            transport,
            cache: TtlCache::new(ttl),
        })
    }

    pub fn cache(&self) -> &TtlCache<String, Arc<Value>> {
        &self.cache
    }

    /// Raw provider JSON for `endpoint`, served from cache while fresh.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Arc<Value>, FetchError> {
        let url = endpoint.url(&self.base_url)?;
        let key = url.to_string();

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("Cache hit: {}", url.path());
            return Ok(cached);
        }

        tracing::info!("Fetching {} {}", url.path(), url.query().unwrap_or_default());
        let body = Arc::new(self.transport.get_json(&url).await?);
        self.cache.set(key, Arc::clone(&body));
        Ok(body)
    }

    /// Records under the `data` array; empty when the provider sends none.
    /// Items that fail to decode are logged and skipped.
    pub async fn fetch_list<T>(&self, endpoint: &Endpoint) -> Result<Vec<T>, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body = self.fetch(endpoint).await?;
        let items = list_items(&body);

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match T::deserialize(item) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(
                    "Skipping malformed record {index} from /{}: {e}",
                    endpoint.path()
                ),
            }
        }
        Ok(records)
    }

    /// The single object of a detail endpoint. A 404 or a null payload is
    /// reported as `NotFound` naming `what`.
    pub async fn fetch_one<T>(&self, endpoint: &Endpoint, what: &str) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body = match self.fetch(endpoint).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => {
                return Err(FetchError::NotFound(format!("{what} not found")));
            }
            Err(e) => return Err(e),
        };

        let data = single_data(&body);
        if data.is_null() {
            return Err(FetchError::NotFound(format!("{what} not found")));
        }
        Ok(T::deserialize(data)?)
    }
}
