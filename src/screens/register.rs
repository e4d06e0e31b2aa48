use crate::controller::auth::AuthState;
use crate::view_state::ViewState;

use super::LOADING;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Problems caught on the form before anything is sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterFormError {
    #[error("Fill in all fields")]
    MissingField,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Check the registration form in the order the screen reports problems.
pub fn validate(email: &str, password: &str, confirm: &str) -> Result<(), RegisterFormError> {
    if email.is_empty() || password.is_empty() {
        return Err(RegisterFormError::MissingField);
    }
    if password != confirm {
        return Err(RegisterFormError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterFormError::PasswordTooShort);
    }
    Ok(())
}

pub fn render(state: &AuthState, form_error: Option<RegisterFormError>) -> String {
    let mut out = vec!["Register".to_string()];
    if let Some(err) = form_error {
        out.push(err.to_string());
    }
    match state {
        ViewState::Loading => out.push(LOADING.to_string()),
        ViewState::Error(message) => out.push(message.clone()),
        ViewState::Success(_) => {}
    }
    out.push("Usage: register <email> <password> <confirm>".to_string());
    out.push("Already have an account? Login".to_string());
    out.join("\n")
}
