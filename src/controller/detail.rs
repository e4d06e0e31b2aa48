use crate::controller::CoinListController;
use crate::models::Coin;
use crate::view_state::ViewState;

pub const COIN_NOT_FOUND: &str = "Coin not found";

/// Resolves a coin identifier against the coin list's current state.
///
/// Only the identifier travels through navigation; the record itself is
/// always re-read from the list that is already loaded.
#[derive(Clone)]
pub struct DetailController {
    coin_id: String,
    coins: CoinListController,
}

impl DetailController {
    pub fn new(coin_id: impl Into<String>, coins: CoinListController) -> Self {
        Self {
            coin_id: coin_id.into(),
            coins,
        }
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    pub fn state(&self) -> ViewState<Coin> {
        match self.coins.state() {
            ViewState::Loading => ViewState::Loading,
            ViewState::Error(message) => ViewState::Error(message),
            ViewState::Success(coins) => coins
                .into_iter()
                .find(|c| c.id == self.coin_id)
                .map(ViewState::Success)
                .unwrap_or_else(|| ViewState::Error(COIN_NOT_FOUND.to_string())),
        }
    }
}
