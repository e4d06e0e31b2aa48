//! One-operation use cases. Each delegates to a single repository method.

use crate::error::Result;
use crate::models::{Coin, User};
use crate::repository::{AuthRepository, CoinRepository};

#[derive(Clone)]
pub struct GetCoinsUseCase {
    repository: CoinRepository,
}

impl GetCoinsUseCase {
    pub fn new(repository: CoinRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Coin>> {
        self.repository.get_coins().await
    }
}

#[derive(Clone)]
pub struct LoginUseCase {
    repository: AuthRepository,
}

impl LoginUseCase {
    pub fn new(repository: AuthRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User> {
        self.repository.login_user(email, password).await
    }
}

#[derive(Clone)]
pub struct RegisterUseCase {
    repository: AuthRepository,
}

impl RegisterUseCase {
    pub fn new(repository: AuthRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User> {
        self.repository.register_user(email, password).await
    }
}

#[derive(Clone)]
pub struct LogoutUseCase {
    repository: AuthRepository,
}

impl LogoutUseCase {
    pub fn new(repository: AuthRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<()> {
        self.repository.logout_user().await
    }
}

#[derive(Clone)]
pub struct GetCurrentUserUseCase {
    repository: AuthRepository,
}

impl GetCurrentUserUseCase {
    pub fn new(repository: AuthRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Option<User>> {
        self.repository.current_user().await
    }
}

/// The four auth use cases the authentication controller drives.
#[derive(Clone)]
pub struct AuthUseCases {
    pub login: LoginUseCase,
    pub register: RegisterUseCase,
    pub logout: LogoutUseCase,
    pub current_user: GetCurrentUserUseCase,
}

impl AuthUseCases {
    /// Build all four use cases over the same repository.
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            login: LoginUseCase::new(repository.clone()),
            register: RegisterUseCase::new(repository.clone()),
            logout: LogoutUseCase::new(repository.clone()),
            current_user: GetCurrentUserUseCase::new(repository),
        }
    }
}
