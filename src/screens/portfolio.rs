//! Mock portfolio. Holdings are fixed display data priced at fixed
//! snapshots, not at live market prices.

use crate::models::{Coin, Holding};

use super::coin_tile;

pub const PORTFOLIO_CHANGE: &str = "+12.5%";
const MASKED_CARD: &str = "**** **** **** 5678";

pub fn mock_holdings() -> Vec<Holding> {
    vec![
        Holding::new(
            mock_coin("bitcoin", "BTC", "Bitcoin", "1/large/bitcoin.png", 45000.0, 2.5, 1),
            0.006,
        ),
        Holding::new(
            mock_coin("ethereum", "ETH", "Ethereum", "279/large/ethereum.png", 2500.0, -1.2, 2),
            0.02,
        ),
        Holding::new(
            mock_coin("cardano", "ADA", "Cardano", "975/large/cardano.png", 0.95, 3.1, 4),
            30.0,
        ),
    ]
}

fn mock_coin(
    id: &str,
    symbol: &str,
    name: &str,
    image: &str,
    price: f64,
    change: f64,
    rank: u32,
) -> Coin {
    Coin {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://assets.coingecko.com/coins/images/{image}"),
        current_price: Some(price),
        price_change_24h: Some(change),
        market_cap_rank: Some(rank),
    }
}

pub fn total_balance(holdings: &[Holding]) -> f64 {
    holdings.iter().map(Holding::value).sum()
}

pub fn render(holdings: &[Holding]) -> String {
    let mut out = vec![
        "Total Balance".to_string(),
        format!("${:.2}", total_balance(holdings)),
        format!("Portfolio Value {PORTFOLIO_CHANGE}    {MASKED_CARD}"),
        String::new(),
    ];
    out.extend(holdings.iter().map(|h| coin_tile(&h.coin)));
    out.join("\n")
}
