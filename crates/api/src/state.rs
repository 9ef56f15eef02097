//! Shared application state.

use std::collections::HashMap;
use std::sync::Arc;

use checkout::{
    CheckoutConfig, CheckoutCoordinator, InMemoryCatalog, InMemorySalesRecorder,
    InMemorySessionProvider,
};
use domain::{CartSession, SessionToken, User};
use reports::SalesLedger;
use tokio::sync::RwLock;

/// Open cart sessions keyed by token.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionToken, CartSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: CartSession) {
        let token = session.token().clone();
        self.sessions.write().await.insert(token, session);
    }

    pub async fn get(&self, token: &SessionToken) -> Option<CartSession> {
        self.sessions.read().await.get(token).cloned()
    }

    pub async fn remove(&self, token: &SessionToken) -> Option<CartSession> {
        self.sessions.write().await.remove(token)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub catalog: InMemoryCatalog,
    pub ledger: SalesLedger,
    pub recorder: InMemorySalesRecorder,
    pub sessions: InMemorySessionProvider,
    pub carts: SessionRegistry,
    pub checkout: CheckoutConfig,
}

impl AppState {
    pub fn new(
        catalog: InMemoryCatalog,
        sessions: InMemorySessionProvider,
        checkout: CheckoutConfig,
    ) -> Self {
        let ledger = SalesLedger::new();
        let recorder = InMemorySalesRecorder::new(catalog.clone(), ledger.clone());
        Self {
            catalog,
            ledger,
            recorder,
            sessions,
            carts: SessionRegistry::new(),
            checkout,
        }
    }

    /// A coordinator whose sales are attributed to `user`.
    pub fn coordinator_for(&self, user: &User) -> CheckoutCoordinator<InMemorySalesRecorder> {
        CheckoutCoordinator::with_config(
            self.recorder.acting_as(user.username.clone()),
            self.checkout,
        )
    }
}
