use super::coin::Coin;

// ---------------------------------------------------------------------------
// Holding: a coin in the mock portfolio
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub coin: Coin,
    pub amount: f64,
}

impl Holding {
    pub fn new(coin: Coin, amount: f64) -> Self {
        Self { coin, amount }
    }

    /// Current value of the position, `0.0` when the coin has no price.
    pub fn value(&self) -> f64 {
        self.coin.safe_price() * self.amount
    }
}
