//! Checkout and service error types.

use std::time::Duration;

use common::TeaId;
use domain::CatalogError;
use thiserror::Error;

/// Errors returned by the storefront services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The tea is not in the catalog.
    #[error("Unknown tea: {0}")]
    UnknownTea(TeaId),

    /// The backend refused to record the sale.
    #[error("Sale of {tea_id} rejected: {reason}")]
    SaleRejected { tea_id: TeaId, reason: String },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The submission task ended without producing a result.
    #[error("Submission aborted: {0}")]
    Aborted(String),

    /// A catalog item failed validation.
    #[error("Invalid catalog item: {0}")]
    InvalidItem(#[from] CatalogError),

    /// Username or password did not match.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username or password was empty.
    #[error("Must include username and password")]
    MissingCredentials,
}

/// Result type for service calls.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Errors that prevent a checkout from being submitted.
///
/// Per-line sale failures are not errors; they are reported through
/// [`CheckoutOutcome::PartialFailure`](crate::CheckoutOutcome::PartialFailure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("Please add items to your cart before checking out.")]
    EmptyCart,

    /// Another checkout of the same cart is still submitting.
    #[error("A checkout is already in progress for this cart")]
    AlreadySubmitting,
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
