//! Session service trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::UserId;
use domain::{Role, Session, SessionToken, User};
use tokio::sync::RwLock;

use crate::error::{ServiceError, ServiceResult};

/// Staff authentication.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Checks credentials and opens a session.
    async fn login(&self, username: &str, password: &str) -> ServiceResult<Session>;

    /// Closes a session. Unknown tokens are ignored.
    async fn logout(&self, token: &SessionToken) -> ServiceResult<()>;

    /// The user a token belongs to, if the session is open.
    async fn current_user(&self, token: &SessionToken) -> Option<User>;
}

#[derive(Debug)]
struct Account {
    password: String,
    user: User,
}

#[derive(Debug, Default)]
struct InMemorySessionState {
    accounts: HashMap<String, Account>,
    sessions: HashMap<SessionToken, User>,
    next_id: u64,
}

/// In-memory user registry and session table.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionProvider {
    state: Arc<RwLock<InMemorySessionState>>,
}

impl InMemorySessionProvider {
    /// Creates a provider with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with the default admin, manager and cashier accounts.
    pub async fn with_default_staff() -> Self {
        let provider = Self::new();
        provider.register("admin", "admin123", Role::Admin).await;
        provider.register("manager", "manager123", Role::Manager).await;
        provider.register("cashier", "cashier123", Role::Cashier).await;
        provider
    }

    /// Registers a user, replacing any existing account with the same name.
    pub async fn register(&self, username: &str, password: &str, role: Role) -> User {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id),
            username: username.to_string(),
            role,
        };
        state.accounts.insert(
            username.to_string(),
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );
        user
    }

    /// Number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    #[tracing::instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> ServiceResult<Session> {
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::MissingCredentials);
        }

        let mut state = self.state.write().await;
        let user = match state.accounts.get(username) {
            Some(account) if account.password == password => account.user.clone(),
            _ => {
                tracing::warn!("login rejected");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        let session = Session::open(user);
        state
            .sessions
            .insert(session.token.clone(), session.user.clone());
        tracing::info!(role = %session.user.role, "login succeeded");
        Ok(session)
    }

    async fn logout(&self, token: &SessionToken) -> ServiceResult<()> {
        self.state.write().await.sessions.remove(token);
        Ok(())
    }

    async fn current_user(&self, token: &SessionToken) -> Option<User> {
        self.state.read().await.sessions.get(token).cloned()
    }
}
