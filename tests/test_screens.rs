//! Screen rendering, coin display helpers, and coin feed decoding.

mod common;

use common::{coin, sample_coins, user_for};
use crypto_app::models::Coin;
use crypto_app::screens::{self, detail, home, login, portfolio, register, settings};
use crypto_app::ViewState;

// ---------------------------------------------------------------------------
// Coin decoding and display
// ---------------------------------------------------------------------------

#[test]
fn decodes_market_listing_with_nulls_and_extra_fields() {
    let body = serde_json::json!([
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 45000.5,
            "market_cap": 880000000000u64,
            "market_cap_rank": 1,
            "price_change_percentage_24h": -1.234,
            "roi": null
        },
        {
            "id": "newcoin",
            "symbol": "new",
            "name": "New Coin",
            "image": "https://example.test/new.png",
            "current_price": null,
            "market_cap_rank": null,
            "price_change_percentage_24h": null
        }
    ]);

    let coins: Vec<Coin> = serde_json::from_value(body).unwrap();
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].current_price, Some(45000.5));
    assert_eq!(coins[0].price_change_24h, Some(-1.234));
    assert_eq!(coins[0].market_cap_rank, Some(1));
    assert_eq!(coins[1].current_price, None);
    assert_eq!(coins[1].market_cap_rank, None);
}

#[test]
fn price_and_change_formatting() {
    let mut c = coin("bitcoin", "btc", "Bitcoin", Some(45000.0), 1);
    c.price_change_24h = Some(2.5);
    assert_eq!(c.price_display(), "$45000.00");
    assert_eq!(c.change_display(), "+2.50%");
    assert_eq!(c.symbol_display(), "BTC");
    assert!(c.is_gaining());

    c.current_price = None;
    c.price_change_24h = Some(-1.2);
    assert_eq!(c.price_display(), "N/A");
    assert_eq!(c.change_display(), "-1.20%");
    assert!(!c.is_gaining());

    c.price_change_24h = None;
    assert_eq!(c.change_display(), "+0.00%");
    assert_eq!(c.safe_price(), 0.0);
}

#[test]
fn coin_tile_shows_rank_symbol_and_price() {
    let tile = screens::coin_tile(&coin("cardano", "ada", "Cardano", Some(0.95), 4));
    assert!(tile.contains("#4"));
    assert!(tile.contains("ADA"));
    assert!(tile.contains("Cardano"));
    assert!(tile.contains("$0.95"));
    assert!(tile.contains("+1.50%"));
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[test]
fn home_renders_each_state() {
    assert_eq!(home::render(&ViewState::Loading, None), "Loading...");
    assert_eq!(
        home::render(&ViewState::Error("Network timeout: x".to_string()), None),
        "Error: Network timeout: x"
    );

    let rendered = home::render(&ViewState::Success(sample_coins()), None);
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.lines().nth(1).unwrap().contains("ETH"));
}

#[test]
fn home_overlays_refresh_on_stale_list() {
    let stale = sample_coins();
    let rendered = home::render(&ViewState::Loading, Some(stale.as_slice()));
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Refreshing...");
    assert_eq!(lines.len(), 4);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[test]
fn detail_renders_coin_fields() {
    let rendered = detail::render(&ViewState::Success(coin(
        "ethereum",
        "eth",
        "Ethereum",
        Some(2500.0),
        2,
    )));
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Ethereum");
    assert_eq!(lines[1], "$2500.00");
    assert_eq!(lines[2], "ETH");
    assert_eq!(lines[3], "Rank: 2");
}

#[test]
fn detail_not_found_has_no_error_prefix() {
    assert_eq!(
        detail::render(&ViewState::Error("Coin not found".to_string())),
        "Coin not found"
    );
    assert_eq!(
        detail::render(&ViewState::Error("boom".to_string())),
        "Error: boom"
    );
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[test]
fn portfolio_total_balance() {
    let holdings = portfolio::mock_holdings();
    assert_eq!(holdings.len(), 3);
    assert!((portfolio::total_balance(&holdings) - 348.5).abs() < 1e-9);

    let rendered = portfolio::render(&holdings);
    assert!(rendered.contains("Total Balance"));
    assert!(rendered.contains("$348.50"));
    assert!(rendered.contains("+12.5%"));
    assert!(rendered.contains("BTC"));
    assert!(rendered.contains("ADA"));
}

// ---------------------------------------------------------------------------
// Settings / auth screens
// ---------------------------------------------------------------------------

#[test]
fn settings_shows_user_and_theme() {
    let user = user_for("alice@example.com");
    let rendered = settings::render(true, Some(&user));
    assert!(rendered.contains("alice@example.com"));
    assert!(rendered.contains("Dark theme: on"));
    assert!(rendered.contains("Version 1.0.0"));

    assert!(settings::render(false, None).contains("Dark theme: off"));
}

#[test]
fn login_shows_error_message() {
    let rendered = login::render(&ViewState::Error("Login failed: nope".to_string()));
    assert!(rendered.contains("Login failed: nope"));
    assert!(!login::render(&ViewState::Success(None)).contains("Loading"));
}

#[test]
fn register_form_validation_order() {
    use register::RegisterFormError::*;

    assert_eq!(register::validate("", "secret1", "secret1"), Err(MissingField));
    assert_eq!(register::validate("a@b.c", "", ""), Err(MissingField));
    assert_eq!(register::validate("a@b.c", "secret1", "secret2"), Err(PasswordMismatch));
    assert_eq!(register::validate("a@b.c", "abc", "abc"), Err(PasswordTooShort));
    assert_eq!(register::validate("a@b.c", "abcdef", "abcdef"), Ok(()));
}

#[test]
fn register_renders_form_error() {
    let rendered = register::render(
        &ViewState::Success(None),
        Some(register::RegisterFormError::PasswordMismatch),
    );
    assert!(rendered.contains("Passwords don't match"));
    assert_eq!(
        register::RegisterFormError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters"
    );
}
