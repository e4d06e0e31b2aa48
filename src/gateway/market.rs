//! Market-data gateway over the CoinGecko `/coins/markets` listing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{self, MarketQuery};
use crate::error::{AppError, Result};
use crate::models::Coin;

/// Read-only source of the coin listing.
#[async_trait]
pub trait MarketGateway: Send + Sync {
    /// Fetch one page of coins in the gateway's fixed currency and order.
    async fn fetch_coins(&self) -> Result<Vec<Coin>>;
}

// ---------------------------------------------------------------------------
// CoinGeckoClient
// ---------------------------------------------------------------------------

/// HTTP client for the public CoinGecko listing endpoint. Unauthenticated.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
    query: MarketQuery,
}

impl CoinGeckoClient {
    /// Create a client against `base_url` (e.g. [`config::COINGECKO_BASE`]).
    pub fn new(base_url: impl Into<String>, query: MarketQuery, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("crypto-app/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            query,
        })
    }

    pub fn query(&self) -> &MarketQuery {
        &self.query
    }

    fn markets_url(&self) -> String {
        format!("{}/{}", self.base_url, config::MARKETS_PATH)
    }
}

#[async_trait]
impl MarketGateway for CoinGeckoClient {
    async fn fetch_coins(&self) -> Result<Vec<Coin>> {
        let url = self.markets_url();
        tracing::debug!(
            url = %url,
            currency = %self.query.vs_currency,
            per_page = self.query.per_page,
            "Fetching coin listing"
        );
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .query(&self.query.params())
            .send()
            .await
            .map_err(AppError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Coin listing request rejected");
            return Err(AppError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(AppError::from_transport)?;
        let coins: Vec<Coin> =
            serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))?;

        tracing::debug!(
            count = coins.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Coin listing received"
        );
        Ok(coins)
    }
}
