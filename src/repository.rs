//! Repositories wrap each gateway call in a single `Result`.
//!
//! Every method performs exactly one remote call. Failures are logged here
//! and handed upward as [`AppError`](crate::error::AppError); the layers
//! above only ever look at the error's message.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::gateway::{AuthGateway, MarketGateway};
use crate::models::{Coin, User};

// ---------------------------------------------------------------------------
// CoinRepository
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct CoinRepository {
    gateway: Arc<dyn MarketGateway>,
}

impl CoinRepository {
    pub fn new(gateway: Arc<dyn MarketGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the coin listing. An empty listing counts as a failure.
    pub async fn get_coins(&self) -> Result<Vec<Coin>> {
        match self.gateway.fetch_coins().await {
            Ok(coins) if coins.is_empty() => {
                tracing::warn!("Market gateway returned an empty listing");
                Err(AppError::EmptyResult)
            }
            Ok(coins) => Ok(coins),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load coins");
                Err(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AuthRepository
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AuthRepository {
    gateway: Arc<dyn AuthGateway>,
}

impl AuthRepository {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<User> {
        self.gateway
            .sign_in(email, password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Login failed"))
    }

    pub async fn register_user(&self, email: &str, password: &str) -> Result<User> {
        self.gateway
            .sign_up(email, password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Registration failed"))
    }

    pub async fn logout_user(&self) -> Result<()> {
        self.gateway
            .sign_out()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Logout failed"))
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        self.gateway
            .current_session()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Session lookup failed"))
    }
}
