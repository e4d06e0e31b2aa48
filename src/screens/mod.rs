//! Text renderers for each destination.
//!
//! Screens never hold state of their own: they render whatever their
//! controller currently reports and the host forwards user input back to the
//! controller.

pub mod detail;
pub mod home;
pub mod login;
pub mod portfolio;
pub mod register;
pub mod settings;

use crate::models::Coin;

pub const LOADING: &str = "Loading...";

/// One line of the coin list: rank, ticker, name, price and 24h change.
pub fn coin_tile(coin: &Coin) -> String {
    let rank = coin
        .market_cap_rank
        .map(|r| format!("#{r}"))
        .unwrap_or_else(|| "#-".to_string());
    format!(
        "{:>4}  {:<6} {:<20} {:>14} {:>8}",
        rank,
        coin.symbol_display(),
        coin.name,
        coin.price_display(),
        coin.change_display()
    )
}

pub fn error_line(message: &str) -> String {
    format!("Error: {message}")
}
