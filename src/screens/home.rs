use crate::controller::coin_list::CoinListState;
use crate::models::Coin;
use crate::view_state::ViewState;

use super::{coin_tile, error_line, LOADING};

pub const REFRESHING: &str = "Refreshing...";

/// Render the coin list.
///
/// While a refresh is in flight and an earlier list exists, the old list
/// stays on screen under a refresh indicator instead of being replaced.
pub fn render(state: &CoinListState, last_loaded: Option<&[Coin]>) -> String {
    match state {
        ViewState::Loading => match last_loaded {
            Some(coins) if !coins.is_empty() => {
                let mut out = vec![REFRESHING.to_string()];
                out.extend(coins.iter().map(coin_tile));
                out.join("\n")
            }
            _ => LOADING.to_string(),
        },
        ViewState::Success(coins) => coins
            .iter()
            .map(coin_tile)
            .collect::<Vec<_>>()
            .join("\n"),
        ViewState::Error(message) => error_line(message),
    }
}
