use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog identifier of a tea.
///
/// Opaque to this workspace: the backend decides the format, the cart only
/// compares identifiers for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeaId(String);

impl TeaId {
    /// Creates a tea ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TeaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TeaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a cart line.
///
/// Unique within a cart and stable for as long as the line exists, even
/// while its quantity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    /// Creates a new random line ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a line ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for LineId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Identifier assigned by the sales recorder to a recorded sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(u64);

impl SaleId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SALE-{:04}", self.0)
    }
}

/// Identifier of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
