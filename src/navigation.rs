//! Named destinations and the back stack.
//!
//! The detail destination carries only a coin identifier; the coin itself is
//! resolved against the loaded list by
//! [`DetailController`](crate::controller::DetailController).

use std::fmt;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Detail(String),
    Portfolio,
    Settings,
    Login,
    Register,
}

impl Route {
    /// Path form of the route, e.g. `list` or `detail/bitcoin`.
    pub fn path(&self) -> String {
        match self {
            Route::List => "list".to_string(),
            Route::Detail(id) => format!("detail/{}", urlencoding::encode(id)),
            Route::Portfolio => "portfolio".to_string(),
            Route::Settings => "settings".to_string(),
            Route::Login => "login".to_string(),
            Route::Register => "register".to_string(),
        }
    }

    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim().trim_matches('/');
        match path {
            "list" => Ok(Route::List),
            "portfolio" => Ok(Route::Portfolio),
            "settings" => Ok(Route::Settings),
            "login" => Ok(Route::Login),
            "register" => Ok(Route::Register),
            _ => {
                let id = path
                    .strip_prefix("detail/")
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| AppError::NotFound(format!("Unknown route: {}", path)))?;
                let id = urlencoding::decode(id)
                    .map_err(|e| AppError::InvalidArgument(format!("Bad coin id in route: {e}")))?;
                Ok(Route::Detail(id.into_owned()))
            }
        }
    }

    /// Destinations that are only reachable while signed in.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// Destinations shown in the bottom bar.
    pub fn is_tab(&self) -> bool {
        matches!(self, Route::List | Route::Portfolio | Route::Settings)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Back stack of destinations. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    /// Start at the coin list when signed in, at login otherwise.
    pub fn for_auth(authenticated: bool) -> Self {
        Self::new(Self::start_route(authenticated))
    }

    fn start_route(authenticated: bool) -> Route {
        if authenticated {
            Route::List
        } else {
            Route::Login
        }
    }

    pub fn current(&self) -> &Route {
        // The stack is created with one entry and `pop` keeps the last one.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        self.stack.push(route);
    }

    /// Go back one step. Returns `false` when already at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Bottom-bar navigation: replace the top entry instead of stacking.
    pub fn switch_tab(&mut self, route: Route) {
        tracing::debug!(route = %route, "Switch tab");
        if let Some(top) = self.stack.last_mut() {
            *top = route;
        }
    }

    /// Drop the whole stack and start over for the given auth status.
    pub fn reset_for(&mut self, authenticated: bool) {
        self.stack.clear();
        self.stack.push(Self::start_route(authenticated));
    }
}
