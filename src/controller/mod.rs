//! Per-screen state owners.
//!
//! Every controller holds its screen's [`ViewState`](crate::view_state::ViewState)
//! in a [`tokio::sync::watch`] channel. Loads and actions are spawned onto
//! the Tokio runtime; each one moves the state to `Loading` first and writes
//! its own result when it finishes. Overlapping calls are not cancelled, so
//! the last call to complete decides the final state.
//!
//! Controllers that spawn work must be created from within a Tokio runtime.

pub mod auth;
pub mod coin_list;
pub mod detail;
pub mod settings;

pub use auth::AuthController;
pub use coin_list::CoinListController;
pub use detail::DetailController;
pub use settings::SettingsController;
