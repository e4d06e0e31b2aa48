//! Authentication controller: session check, login, register, logout.

mod common;

use std::sync::Arc;

use common::{user_for, FakeAuth};
use crypto_app::controller::AuthController;
use crypto_app::gateway::AuthGateway;
use crypto_app::repository::AuthRepository;
use crypto_app::usecase::AuthUseCases;
use crypto_app::{Navigator, Route, ViewState};

fn controller(gateway: Arc<dyn AuthGateway>) -> AuthController {
    AuthController::new(AuthUseCases::new(AuthRepository::new(gateway)))
}

fn idle_controller(gateway: Arc<dyn AuthGateway>) -> AuthController {
    AuthController::idle(AuthUseCases::new(AuthRepository::new(gateway)))
}

async fn settle(ctrl: &AuthController) {
    let mut rx = ctrl.subscribe();
    rx.wait_for(|s| !s.is_loading()).await.unwrap();
}

// ---------------------------------------------------------------------------
// session check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_session_resolves_to_signed_out() {
    let ctrl = controller(FakeAuth::new());
    assert!(ctrl.state().is_loading());
    settle(&ctrl).await;

    assert_eq!(ctrl.state(), ViewState::Success(None));
    assert!(!ctrl.is_authenticated());
    assert_eq!(Navigator::for_auth(ctrl.is_authenticated()).current(), &Route::Login);
}

#[tokio::test]
async fn existing_session_resolves_to_user() {
    let ctrl = controller(FakeAuth::signed_in("alice@example.com"));
    settle(&ctrl).await;

    assert_eq!(ctrl.current_user(), Some(user_for("alice@example.com")));
    assert_eq!(Navigator::for_auth(ctrl.is_authenticated()).current(), &Route::List);
}

#[tokio::test]
async fn failed_session_lookup_is_treated_as_signed_out() {
    let ctrl = controller(FakeAuth::failing_session());
    settle(&ctrl).await;

    assert_eq!(ctrl.state(), ViewState::Success(None));
}

// ---------------------------------------------------------------------------
// login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_with_valid_credentials() {
    let ctrl = idle_controller(FakeAuth::with_account("bob@example.com", "hunter22"));

    let handle = ctrl.login("bob@example.com", "hunter22");
    assert!(ctrl.state().is_loading());
    handle.await.unwrap();

    let user = ctrl.current_user().expect("signed in");
    assert_eq!(user.email, "bob@example.com");
}

#[tokio::test]
async fn login_with_invalid_credentials_shows_provider_message() {
    let ctrl = idle_controller(FakeAuth::with_account("bob@example.com", "hunter22"));

    ctrl.login_now("bob@example.com", "wrong").await;

    assert_eq!(
        ctrl.state(),
        ViewState::Error("Login failed: Invalid login credentials".to_string())
    );
    assert!(ctrl.current_user().is_none());
}

// ---------------------------------------------------------------------------
// register
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_new_account_signs_in() {
    let ctrl = idle_controller(FakeAuth::new());

    ctrl.register("carol@example.com", "secret123").await.unwrap();

    assert_eq!(ctrl.current_user().map(|u| u.email), Some("carol@example.com".to_string()));
}

#[tokio::test]
async fn register_existing_account_fails() {
    let ctrl = idle_controller(FakeAuth::with_account("carol@example.com", "secret123"));

    ctrl.register_now("carol@example.com", "another1").await;

    let state = ctrl.state();
    assert!(state.error().unwrap().starts_with("Registration failed"));
}

// ---------------------------------------------------------------------------
// logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn logout_resolves_to_no_user() {
    let ctrl = controller(FakeAuth::signed_in("dave@example.com"));
    settle(&ctrl).await;
    assert!(ctrl.is_authenticated());

    let handle = ctrl.logout();
    assert!(ctrl.state().is_loading());
    handle.await.unwrap();

    assert_eq!(ctrl.state(), ViewState::Success(None));
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let ctrl = idle_controller(FakeAuth::new());
    ctrl.logout_now().await;
    assert_eq!(ctrl.state(), ViewState::Success(None));
}

#[tokio::test]
async fn failed_logout_is_an_error() {
    let ctrl = idle_controller(FakeAuth::failing_logout());
    ctrl.logout_now().await;
    assert_eq!(ctrl.state(), ViewState::Error("Network unreachable".to_string()));
}

#[tokio::test]
async fn session_check_after_login_finds_user() {
    let ctrl = idle_controller(FakeAuth::with_account("erin@example.com", "pw12345"));
    ctrl.login_now("erin@example.com", "pw12345").await;

    ctrl.check_session().await.unwrap();
    assert_eq!(ctrl.current_user(), Some(user_for("erin@example.com")));
}
