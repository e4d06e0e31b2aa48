use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const COINGECKO_BASE: &str = "https://api.coingecko.com/api/v3";
pub const MARKETS_PATH: &str = "coins/markets";

pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_ORDER: &str = "market_cap_desc";
pub const DEFAULT_PER_PAGE: u32 = 50;
pub const DEFAULT_PAGE: u32 = 1;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DARK_THEME_KEY: &str = "dark_theme";

pub const SUPABASE_URL_ENV: &str = "CRYPTO_APP_SUPABASE_URL";
pub const SUPABASE_ANON_KEY_ENV: &str = "CRYPTO_APP_SUPABASE_ANON_KEY";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed query parameters for the market listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            order: DEFAULT_ORDER.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
        }
    }
}

impl MarketQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", "false".to_string()),
        ]
    }
}

/// Project URL and public anon key of the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
}

impl AuthConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Read the auth settings from the environment, if both are present.
    pub fn from_env() -> Option<Self> {
        let url = env::var(SUPABASE_URL_ENV).ok()?;
        let key = env::var(SUPABASE_ANON_KEY_ENV).ok()?;
        if url.trim().is_empty() || key.trim().is_empty() {
            return None;
        }
        Some(Self::new(url, key))
    }
}

pub fn default_prefs_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("crypto-app")
    } else {
        PathBuf::from(".crypto-app")
    }
}
