//! Thin clients over the two remote services the app talks to.
//!
//! Each gateway is a trait so the repositories can be driven by an in-memory
//! fake in tests; the HTTP implementations live next to their trait.

pub mod auth;
pub mod market;

pub use auth::{AuthGateway, SupabaseAuthClient};
pub use market::{CoinGeckoClient, MarketGateway};
