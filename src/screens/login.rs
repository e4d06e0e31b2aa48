use crate::controller::auth::AuthState;
use crate::view_state::ViewState;

use super::LOADING;

pub fn render(state: &AuthState) -> String {
    let mut out = vec!["Login".to_string()];
    match state {
        ViewState::Loading => out.push(LOADING.to_string()),
        ViewState::Error(message) => out.push(message.clone()),
        ViewState::Success(_) => {}
    }
    out.push("Usage: login <email> <password>".to_string());
    out.push("Don't have an account? Register".to_string());
    out.join("\n")
}
