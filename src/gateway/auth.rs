//! Auth gateway over the Supabase GoTrue REST API.
//!
//! The signed-in session is kept in memory only. Every failure of sign-in or
//! sign-up is reported as [`AppError::Auth`] with a `Login failed: ` or
//! `Registration failed: ` prefix, carrying the provider's own message when
//! it sends one.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::AuthConfig;
use crate::error::{AppError, Result};
use crate::models::{Session, User};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const CONFIRMATION_REQUIRED: &str =
    "user not found after successful sign-up. Email confirmation might be required.";

/// Email/password authentication provider.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_out(&self) -> Result<()>;

    /// The principal of the current session, or `None` when signed out.
    async fn current_session(&self) -> Result<Option<User>>;
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    user: Option<User>,
}

/// GoTrue reports errors under a handful of different keys depending on the
/// endpoint and server version.
#[derive(Deserialize, Default)]
struct ProviderError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderError {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

// ---------------------------------------------------------------------------
// SupabaseAuthClient
// ---------------------------------------------------------------------------

pub struct SupabaseAuthClient {
    client: Client,
    config: AuthConfig,
    session: Mutex<Option<Session>>,
}

impl SupabaseAuthClient {
    pub fn new(config: AuthConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            config,
            session: Mutex::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.config.anon_key)
    }

    /// Whether a session is currently held in memory.
    pub async fn has_session(&self) -> bool {
        self.session.lock().await.is_some()
    }

    async fn store(&self, tokens: TokenResponse) -> Option<User> {
        let session = into_session(tokens)?;
        let user = session.user.clone();
        *self.session.lock().await = Some(session);
        Some(user)
    }

    /// Drop the stored session, unless it has been replaced since `access_token`
    /// was read.
    async fn clear_if_current(&self, access_token: &str) {
        let mut stored = self.session.lock().await;
        if is_current(stored.as_ref(), access_token) {
            *stored = None;
        }
    }

    async fn post_credentials(&self, path: &str, email: &str, password: &str) -> Result<TokenResponse> {
        let response = self
            .with_key(self.client.post(self.endpoint(path)))
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(AppError::from_transport)?;
        decode(response).await
    }

    /// Exchange the refresh token of `expired` for a new session. A session
    /// stored by a concurrent sign-in or sign-out wins over the refreshed one.
    async fn refresh(&self, expired: &Session, refresh_token: &str) -> Result<Option<User>> {
        tracing::debug!("Refreshing expired session");
        let response = self
            .with_key(self.client.post(self.endpoint("token?grant_type=refresh_token")))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(AppError::from_transport)?;
        let tokens: TokenResponse = decode(response).await?;

        let mut stored = self.session.lock().await;
        if is_current(stored.as_ref(), &expired.access_token) {
            *stored = into_session(tokens);
        } else {
            tracing::debug!("Session replaced during refresh");
        }
        Ok(stored.as_ref().map(|s| s.user.clone()))
    }
}

#[async_trait]
impl AuthGateway for SupabaseAuthClient {
    #[tracing::instrument(skip(self, password), fields(email = %email))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        tracing::info!("Attempting sign-in");
        let tokens = self
            .post_credentials("token?grant_type=password", email, password)
            .await
            .map_err(|e| prefixed(LOGIN_FAILED, e))?;

        match self.store(tokens).await {
            Some(user) => {
                tracing::info!(user_id = %user.id, "Sign-in successful");
                Ok(user)
            }
            None => Err(AppError::Auth(format!(
                "{LOGIN_FAILED}: user not found after successful sign-in"
            ))),
        }
    }

    #[tracing::instrument(skip(self, password), fields(email = %email))]
    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        tracing::info!("Attempting sign-up");
        let tokens = self
            .post_credentials("signup", email, password)
            .await
            .map_err(|e| prefixed(REGISTRATION_FAILED, e))?;

        match self.store(tokens).await {
            Some(user) => {
                tracing::info!(user_id = %user.id, "Sign-up successful");
                Ok(user)
            }
            None => {
                tracing::warn!("Sign-up returned no session");
                Err(AppError::Auth(format!(
                    "{REGISTRATION_FAILED}: {CONFIRMATION_REQUIRED}"
                )))
            }
        }
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.session.lock().await.take() else {
            tracing::debug!("Sign-out with no session");
            return Ok(());
        };

        let response = self
            .with_key(self.client.post(self.endpoint("logout")))
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(AppError::from_transport)?;

        let status = response.status();
        // An already revoked token still means we are signed out.
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            tracing::info!(user_id = %session.user.id, "Signed out");
            Ok(())
        } else {
            Err(provider_failure(response).await)
        }
    }

    async fn current_session(&self) -> Result<Option<User>> {
        let session = self.session.lock().await.clone();
        let Some(session) = session else {
            return Ok(None);
        };

        if session.is_expired() {
            return match session.refresh_token.as_deref() {
                Some(token) => self.refresh(&session, token).await,
                None => {
                    self.clear_if_current(&session.access_token).await;
                    Ok(None)
                }
            };
        }

        let response = self
            .with_key(self.client.get(self.endpoint("user")))
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(AppError::from_transport)?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::info!("Stored session rejected by provider");
                self.clear_if_current(&session.access_token).await;
                Ok(None)
            }
            status if status.is_success() => {
                let user: User = response
                    .json()
                    .await
                    .map_err(|e| AppError::Decode(e.to_string()))?;
                let mut stored = self.session.lock().await;
                if let Some(stored) = stored
                    .as_mut()
                    .filter(|s| s.access_token == session.access_token)
                {
                    stored.user = user.clone();
                }
                Ok(Some(user))
            }
            _ => Err(provider_failure(response).await),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn into_session(tokens: TokenResponse) -> Option<Session> {
    let access_token = tokens.access_token?;
    let user = tokens.user?;
    Some(Session::new(access_token, tokens.refresh_token, tokens.expires_in, user))
}

fn is_current(stored: Option<&Session>, access_token: &str) -> bool {
    stored.is_some_and(|s| s.access_token == access_token)
}

async fn decode(response: Response) -> Result<TokenResponse> {
    if !response.status().is_success() {
        return Err(provider_failure(response).await);
    }
    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Turn a non-2xx provider response into an error carrying its message.
async fn provider_failure(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderError>(&body)
        .ok()
        .and_then(ProviderError::into_message);

    tracing::warn!(status, "Auth provider returned an error");
    match message {
        Some(message) => AppError::Auth(message),
        None => AppError::Status { status, body },
    }
}

fn prefixed(prefix: &str, err: AppError) -> AppError {
    AppError::Auth(format!("{prefix}: {err}"))
}
