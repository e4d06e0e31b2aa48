use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Coin: one row of the market listing
// ---------------------------------------------------------------------------

/// Market snapshot of a single coin, decoded straight from the listing feed.
///
/// Price, change and rank are nullable upstream; they stay `None` here and
/// the display helpers decide how to show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default, rename = "price_change_percentage_24h")]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

impl Coin {
    pub fn safe_price(&self) -> f64 {
        self.current_price.unwrap_or(0.0)
    }

    pub fn safe_change_24h(&self) -> f64 {
        self.price_change_24h.unwrap_or(0.0)
    }

    /// `true` when the 24h change is zero or positive.
    pub fn is_gaining(&self) -> bool {
        self.safe_change_24h() >= 0.0
    }

    /// Price with two decimals, e.g. `$45000.00`, or `N/A` when unknown.
    pub fn price_display(&self) -> String {
        match self.current_price {
            Some(price) => format!("${:.2}", price),
            None => "N/A".to_string(),
        }
    }

    /// Signed 24h change, e.g. `+2.50%` or `-1.20%`.
    pub fn change_display(&self) -> String {
        let change = self.safe_change_24h();
        if change >= 0.0 {
            format!("+{:.2}%", change)
        } else {
            format!("{:.2}%", change)
        }
    }

    pub fn symbol_display(&self) -> String {
        self.symbol.to_uppercase()
    }
}
