use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::Coin;
use crate::usecase::GetCoinsUseCase;
use crate::view_state::ViewState;

pub type CoinListState = ViewState<Vec<Coin>>;

/// Owns the coin list screen's state.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct CoinListController {
    inner: Arc<Inner>,
}

struct Inner {
    use_case: GetCoinsUseCase,
    state: watch::Sender<CoinListState>,
    last_loaded: watch::Sender<Option<Arc<Vec<Coin>>>>,
}

impl CoinListController {
    /// Create the controller in `Loading` and start the first load.
    pub fn new(use_case: GetCoinsUseCase) -> Self {
        let controller = Self::idle(use_case);
        controller.spawn_load();
        controller
    }

    /// Create the controller in `Loading` without starting a load.
    pub fn idle(use_case: GetCoinsUseCase) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        let (last_loaded, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                use_case,
                state,
                last_loaded,
            }),
        }
    }

    pub fn state(&self) -> CoinListState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CoinListState> {
        self.inner.state.subscribe()
    }

    /// Re-enter `Loading` and start a new load.
    ///
    /// The returned handle completes once this load has written its result.
    pub fn refresh(&self) -> JoinHandle<()> {
        self.spawn_load()
    }

    /// Run one load to completion on the current task.
    pub async fn load(&self) {
        self.inner.state.send_replace(ViewState::Loading);
        self.inner.run_load().await;
    }

    /// The most recent successful listing, kept while a refresh is in flight.
    pub fn last_loaded(&self) -> Option<Arc<Vec<Coin>>> {
        self.inner.last_loaded.borrow().clone()
    }

    /// Look a coin up by identifier in the most recent successful listing.
    pub fn coin_by_id(&self, id: &str) -> Option<Coin> {
        self.last_loaded()
            .and_then(|coins| coins.iter().find(|c| c.id == id).cloned())
    }

    fn spawn_load(&self) -> JoinHandle<()> {
        self.inner.state.send_replace(ViewState::Loading);
        let inner = self.inner.clone();
        tokio::spawn(async move { inner.run_load().await })
    }
}

impl Inner {
    async fn run_load(&self) {
        tracing::debug!("Loading coin listing");
        let state = ViewState::from_result(self.use_case.execute().await);
        match &state {
            ViewState::Success(coins) => {
                tracing::info!(count = coins.len(), "Coin listing loaded");
                self.last_loaded.send_replace(Some(Arc::new(coins.clone())));
            }
            ViewState::Error(message) => {
                tracing::info!(error = %message, "Coin listing failed");
            }
            ViewState::Loading => {}
        }
        self.state.send_replace(state);
    }
}
