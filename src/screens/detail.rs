use crate::controller::detail::COIN_NOT_FOUND;
use crate::models::Coin;
use crate::view_state::ViewState;

use super::{error_line, LOADING};

pub fn render(state: &ViewState<Coin>) -> String {
    match state {
        ViewState::Loading => LOADING.to_string(),
        ViewState::Success(coin) => render_coin(coin),
        ViewState::Error(message) if message == COIN_NOT_FOUND => message.clone(),
        ViewState::Error(message) => error_line(message),
    }
}

fn render_coin(coin: &Coin) -> String {
    let rank = coin
        .market_cap_rank
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    [
        coin.name.clone(),
        coin.price_display(),
        coin.symbol_display(),
        format!("Rank: {rank}"),
        format!("24h: {}", coin.change_display()),
        format!("Icon: {}", coin.image),
    ]
    .join("\n")
}
