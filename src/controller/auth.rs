use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::User;
use crate::usecase::AuthUseCases;
use crate::view_state::ViewState;

/// `Success(None)` means nobody is signed in.
pub type AuthState = ViewState<Option<User>>;

/// Owns the authentication state shared by the login, register and
/// settings screens.
#[derive(Clone)]
pub struct AuthController {
    inner: Arc<Inner>,
}

struct Inner {
    use_cases: AuthUseCases,
    state: watch::Sender<AuthState>,
}

impl AuthController {
    /// Create the controller in `Loading` and start the session check.
    pub fn new(use_cases: AuthUseCases) -> Self {
        let controller = Self::idle(use_cases);
        let inner = controller.inner.clone();
        tokio::spawn(async move { inner.check_current_user().await });
        controller
    }

    /// Create the controller in `Loading` without checking the session.
    pub fn idle(use_cases: AuthUseCases) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            inner: Arc::new(Inner { use_cases, state }),
        }
    }

    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    /// The signed-in user, if the last action resolved to one.
    pub fn current_user(&self) -> Option<User> {
        match &*self.inner.state.borrow() {
            ViewState::Success(user) => user.clone(),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Re-run the session check.
    pub fn check_session(&self) -> JoinHandle<()> {
        self.inner.state.send_replace(ViewState::Loading);
        let inner = self.inner.clone();
        tokio::spawn(async move { inner.check_current_user().await })
    }

    pub fn login(&self, email: &str, password: &str) -> JoinHandle<()> {
        self.inner.state.send_replace(ViewState::Loading);
        let inner = self.inner.clone();
        let (email, password) = (email.to_string(), password.to_string());
        tokio::spawn(async move { inner.login(&email, &password).await })
    }

    pub fn register(&self, email: &str, password: &str) -> JoinHandle<()> {
        self.inner.state.send_replace(ViewState::Loading);
        let inner = self.inner.clone();
        let (email, password) = (email.to_string(), password.to_string());
        tokio::spawn(async move { inner.register(&email, &password).await })
    }

    pub fn logout(&self) -> JoinHandle<()> {
        self.inner.state.send_replace(ViewState::Loading);
        let inner = self.inner.clone();
        tokio::spawn(async move { inner.logout().await })
    }

    // -- Inline variants ---------------------------------------------------

    pub async fn login_now(&self, email: &str, password: &str) {
        self.inner.state.send_replace(ViewState::Loading);
        self.inner.login(email, password).await;
    }

    pub async fn register_now(&self, email: &str, password: &str) {
        self.inner.state.send_replace(ViewState::Loading);
        self.inner.register(email, password).await;
    }

    pub async fn logout_now(&self) {
        self.inner.state.send_replace(ViewState::Loading);
        self.inner.logout().await;
    }
}

impl Inner {
    /// A failed lookup is treated as "signed out" so the user lands on the
    /// login screen instead of an error.
    async fn check_current_user(&self) {
        let user = match self.use_cases.current_user.execute().await {
            Ok(user) => user,
            Err(e) => {
                tracing::info!(error = %e, "Session lookup failed, treating as signed out");
                None
            }
        };
        self.state.send_replace(ViewState::Success(user));
    }

    async fn login(&self, email: &str, password: &str) {
        let result = self.use_cases.login.execute(email, password).await;
        self.state.send_replace(ViewState::from_result(result.map(Some)));
    }

    async fn register(&self, email: &str, password: &str) {
        let result = self.use_cases.register.execute(email, password).await;
        self.state.send_replace(ViewState::from_result(result.map(Some)));
    }

    async fn logout(&self) {
        let result = self.use_cases.logout.execute().await;
        self.state.send_replace(ViewState::from_result(result.map(|_| None)));
    }
}
