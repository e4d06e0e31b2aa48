//! Shared test fixtures: in-memory gateways and sample coins.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crypto_app::gateway::{AuthGateway, MarketGateway};
use crypto_app::models::{Coin, User};
use crypto_app::{AppError, Result};
use tokio::sync::Notify;

pub fn coin(id: &str, symbol: &str, name: &str, price: Option<f64>, rank: u32) -> Coin {
    Coin {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://example.test/{id}.png"),
        current_price: price,
        price_change_24h: Some(1.5),
        market_cap_rank: Some(rank),
    }
}

pub fn sample_coins() -> Vec<Coin> {
    vec![
        coin("bitcoin", "btc", "Bitcoin", Some(45000.0), 1),
        coin("ethereum", "eth", "Ethereum", Some(2500.0), 2),
        coin("cardano", "ada", "Cardano", Some(0.95), 4),
    ]
}

// ---------------------------------------------------------------------------
// FakeMarket
// ---------------------------------------------------------------------------

/// Market gateway that replays scripted responses in order. The last
/// response repeats once the script runs out.
pub struct FakeMarket {
    responses: Mutex<Vec<Result<Vec<Coin>>>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl FakeMarket {
    pub fn returning(coins: Vec<Coin>) -> Arc<Self> {
        Self::scripted(vec![Ok(coins)])
    }

    pub fn failing(err: AppError) -> Arc<Self> {
        Self::scripted(vec![Err(err)])
    }

    pub fn scripted(responses: Vec<Result<Vec<Coin>>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            gate: None,
        })
    }

    /// Every call waits for a `notify_one` on `gate` before answering.
    pub fn gated(coins: Vec<Coin>, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(vec![Ok(coins)]),
            calls: AtomicUsize::new(0),
            gate: Some(gate),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next(&self) -> Result<Vec<Coin>> {
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            clone_result(&responses[0])
        }
    }
}

fn clone_result(r: &Result<Vec<Coin>>) -> Result<Vec<Coin>> {
    match r {
        Ok(coins) => Ok(coins.clone()),
        Err(AppError::Timeout(m)) => Err(AppError::Timeout(m.clone())),
        Err(AppError::Auth(m)) => Err(AppError::Auth(m.clone())),
        Err(AppError::Decode(m)) => Err(AppError::Decode(m.clone())),
        Err(AppError::EmptyResult) => Err(AppError::EmptyResult),
        Err(other) => Err(AppError::NotFound(other.to_string())),
    }
}

#[async_trait]
impl MarketGateway for FakeMarket {
    async fn fetch_coins(&self) -> Result<Vec<Coin>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.next()
    }
}

// ---------------------------------------------------------------------------
// FakeAuth
// ---------------------------------------------------------------------------

/// Auth gateway backed by an in-memory account table.
pub struct FakeAuth {
    accounts: Mutex<HashMap<String, String>>,
    session: Mutex<Option<User>>,
    fail_logout: bool,
    fail_session: bool,
}

impl FakeAuth {
    pub fn new() -> Arc<Self> {
        Self::build(false, false)
    }

    pub fn with_account(email: &str, password: &str) -> Arc<Self> {
        let auth = Self::new();
        auth.accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), password.to_string());
        auth
    }

    pub fn signed_in(email: &str) -> Arc<Self> {
        let auth = Self::with_account(email, "secret123");
        *auth.session.lock().unwrap() = Some(user_for(email));
        auth
    }

    pub fn failing_logout() -> Arc<Self> {
        Self::build(true, false)
    }

    pub fn failing_session() -> Arc<Self> {
        Self::build(false, true)
    }

    fn build(fail_logout: bool, fail_session: bool) -> Arc<Self> {
        Arc::new(Self {
            accounts: Mutex::new(HashMap::new()),
            session: Mutex::new(None),
            fail_logout,
            fail_session,
        })
    }
}

pub fn user_for(email: &str) -> User {
    User::new(format!("id-{email}"), email)
}

#[async_trait]
impl AuthGateway for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let ok = self.accounts.lock().unwrap().get(email).map(String::as_str) == Some(password);
        if !ok {
            return Err(AppError::Auth(
                "Login failed: Invalid login credentials".to_string(),
            ));
        }
        let user = user_for(email);
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AppError::Auth(
                "Registration failed: User already registered".to_string(),
            ));
        }
        accounts.insert(email.to_string(), password.to_string());
        let user = user_for(email);
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_logout {
            return Err(AppError::Auth("Network unreachable".to_string()));
        }
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<User>> {
        if self.fail_session {
            return Err(AppError::Timeout("session lookup".to_string()));
        }
        Ok(self.session.lock().unwrap().clone())
    }
}
