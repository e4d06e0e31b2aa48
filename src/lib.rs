//! Cryptocurrency market browser with email/password authentication.
//!
//! Lists coins from the CoinGecko market listing, shows per-coin detail and
//! a mock portfolio, and gates everything behind a Supabase email/password
//! login. Each screen is driven by a controller that exposes a tri-state
//! [`ViewState`]: `Loading`, `Success(payload)` or `Error(message)`.
//!
//! # Quick start
//!
//! ```no_run
//! use crypto_app::CryptoApp;
//!
//! # async fn example() -> crypto_app::Result<()> {
//! let app = CryptoApp::builder()
//!     .auth("https://project.supabase.co", "anon-key")
//!     .build()
//!     .await?;
//!
//! // Wait for the first listing
//! let mut rx = app.coin_list().subscribe();
//! rx.wait_for(|s| !s.is_loading()).await.ok();
//! println!("{:?}", app.coin_list().state());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod prefs;
pub mod repository;
pub mod screens;
pub mod usecase;
pub mod view_state;

pub use controller::{AuthController, CoinListController, DetailController, SettingsController};
pub use error::{AppError, Result};
pub use navigation::{Navigator, Route};
pub use prefs::PreferenceStore;
pub use view_state::ViewState;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use config::{AuthConfig, MarketQuery};
use gateway::{AuthGateway, CoinGeckoClient, MarketGateway, SupabaseAuthClient};
use repository::{AuthRepository, CoinRepository};
use usecase::{AuthUseCases, GetCoinsUseCase};

// ---------------------------------------------------------------------------
// CryptoAppBuilder
// ---------------------------------------------------------------------------

/// Builder for the composition root.
///
/// Use [`CryptoApp::builder()`] to obtain one. Gateways default to the HTTP
/// clients; tests can inject their own through
/// [`market_gateway`](Self::market_gateway) and
/// [`auth_gateway`](Self::auth_gateway).
pub struct CryptoAppBuilder {
    market_base_url: String,
    market_query: MarketQuery,
    auth: Option<AuthConfig>,
    prefs_dir: Option<PathBuf>,
    timeout: Duration,
    autoload: bool,
    market_gateway: Option<Arc<dyn MarketGateway>>,
    auth_gateway: Option<Arc<dyn AuthGateway>>,
}

impl Default for CryptoAppBuilder {
    fn default() -> Self {
        Self {
            market_base_url: config::COINGECKO_BASE.to_string(),
            market_query: MarketQuery::default(),
            auth: None,
            prefs_dir: None,
            timeout: config::DEFAULT_TIMEOUT,
            autoload: true,
            market_gateway: None,
            auth_gateway: None,
        }
    }
}

impl CryptoAppBuilder {
    /// Override the market-data base URL. Defaults to the public CoinGecko API.
    pub fn market_base_url(mut self, url: impl Into<String>) -> Self {
        self.market_base_url = url.into();
        self
    }

    pub fn market_query(mut self, query: MarketQuery) -> Self {
        self.market_query = query;
        self
    }

    /// Set the auth provider's project URL and anon key.
    ///
    /// If not set, they are read from `CRYPTO_APP_SUPABASE_URL` and
    /// `CRYPTO_APP_SUPABASE_ANON_KEY`.
    pub fn auth(mut self, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::new(url, anon_key));
        self
    }

    /// Directory holding `settings.json`. Defaults to the platform config dir.
    pub fn prefs_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.prefs_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// HTTP timeout for both gateways. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether controllers start their first load on build. Defaults to `true`.
    pub fn autoload(mut self, autoload: bool) -> Self {
        self.autoload = autoload;
        self
    }

    pub fn market_gateway(mut self, gateway: Arc<dyn MarketGateway>) -> Self {
        self.market_gateway = Some(gateway);
        self
    }

    pub fn auth_gateway(mut self, gateway: Arc<dyn AuthGateway>) -> Self {
        self.auth_gateway = Some(gateway);
        self
    }

    /// Wire gateways, repositories, use cases and controllers together.
    ///
    /// Must be awaited inside a Tokio runtime; with autoload enabled the
    /// coin list load and the session check start immediately.
    pub async fn build(self) -> Result<CryptoApp> {
        let market: Arc<dyn MarketGateway> = match self.market_gateway {
            Some(gateway) => gateway,
            None => Arc::new(CoinGeckoClient::new(
                self.market_base_url,
                self.market_query,
                self.timeout,
            )?),
        };

        let auth: Arc<dyn AuthGateway> = match self.auth_gateway {
            Some(gateway) => gateway,
            None => {
                let config = self.auth.or_else(AuthConfig::from_env).ok_or_else(|| {
                    AppError::InvalidArgument(format!(
                        "auth provider not configured; set {} and {}",
                        config::SUPABASE_URL_ENV,
                        config::SUPABASE_ANON_KEY_ENV
                    ))
                })?;
                Arc::new(SupabaseAuthClient::new(config, self.timeout)?)
            }
        };

        let prefs_dir = self.prefs_dir.unwrap_or_else(config::default_prefs_dir);
        let prefs = Arc::new(PreferenceStore::open(&prefs_dir).await?);

        let get_coins = GetCoinsUseCase::new(CoinRepository::new(market));
        let auth_use_cases = AuthUseCases::new(AuthRepository::new(auth));

        let (coin_list, auth) = if self.autoload {
            (
                CoinListController::new(get_coins),
                AuthController::new(auth_use_cases),
            )
        } else {
            (
                CoinListController::idle(get_coins),
                AuthController::idle(auth_use_cases),
            )
        };

        tracing::debug!(prefs_dir = %prefs_dir.display(), "App wired");
        Ok(CryptoApp {
            coin_list,
            auth,
            settings: SettingsController::new(prefs.clone()),
            prefs,
        })
    }
}

// ---------------------------------------------------------------------------
// CryptoApp
// ---------------------------------------------------------------------------

/// The composition root. Owns one controller per screen.
pub struct CryptoApp {
    coin_list: CoinListController,
    auth: AuthController,
    settings: SettingsController,
    prefs: Arc<PreferenceStore>,
}

impl CryptoApp {
    pub fn builder() -> CryptoAppBuilder {
        CryptoAppBuilder::default()
    }

    pub fn coin_list(&self) -> &CoinListController {
        &self.coin_list
    }

    pub fn auth(&self) -> &AuthController {
        &self.auth
    }

    pub fn settings(&self) -> &SettingsController {
        &self.settings
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    /// Controller for the detail destination of `coin_id`.
    pub fn detail(&self, coin_id: &str) -> DetailController {
        DetailController::new(coin_id, self.coin_list.clone())
    }

    /// A back stack starting where the current auth state says it should.
    pub fn navigator(&self) -> Navigator {
        Navigator::for_auth(self.auth.is_authenticated())
    }

    /// Render the screen for `route` from the current controller states.
    pub fn render(&self, route: &Route) -> String {
        match route {
            Route::List => {
                let last = self.coin_list.last_loaded();
                screens::home::render(&self.coin_list.state(), last.as_deref().map(Vec::as_slice))
            }
            Route::Detail(id) => screens::detail::render(&self.detail(id).state()),
            Route::Portfolio => screens::portfolio::render(&screens::portfolio::mock_holdings()),
            Route::Settings => screens::settings::render(
                self.settings.is_dark_theme(),
                self.auth.current_user().as_ref(),
            ),
            Route::Login => screens::login::render(&self.auth.state()),
            Route::Register => screens::register::render(&self.auth.state(), None),
        }
    }
}

impl fmt::Display for CryptoApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CryptoApp(prefs={}, authenticated={}, dark_theme={})",
            self.prefs.path().display(),
            self.auth.is_authenticated(),
            self.prefs.is_dark_theme()
        )
    }
}
