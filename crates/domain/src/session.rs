//! Authenticated sessions and the cart each one owns.

use chrono::{DateTime, Utc};
use common::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::SharedCart;

/// Staff role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    #[default]
    Cashier,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Cashier => "cashier",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

/// Opaque bearer token identifying a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user: User,
    pub opened_at: DateTime<Utc>,
}

impl Session {
    pub fn open(user: User) -> Self {
        Self {
            token: SessionToken::generate(),
            user,
            opened_at: Utc::now(),
        }
    }
}

/// A session together with the cart it owns.
///
/// The cart lives exactly as long as this value: it starts empty when the
/// session opens and is dropped with it at logout.
#[derive(Debug, Clone)]
pub struct CartSession {
    session: Session,
    cart: SharedCart,
}

impl CartSession {
    /// Starts a session with an empty cart.
    pub fn start(session: Session) -> Self {
        tracing::debug!(user = %session.user.username, "cart session started");
        Self {
            session,
            cart: SharedCart::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> &User {
        &self.session.user
    }

    pub fn token(&self) -> &SessionToken {
        &self.session.token
    }

    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    /// Ends the session, emptying its cart.
    ///
    /// Other handles to the cart observe the empty state, including a
    /// checkout still in flight.
    pub async fn end(self) {
        self.cart.discard().await;
        tracing::debug!(user = %self.session.user.username, "cart session ended");
    }
}
