//! Shopping cart aggregation.

mod aggregate;
mod line_item;
mod shared;
mod snapshot;

pub use aggregate::{Cart, QuantityChange};
pub use line_item::{LineItem, Quantity};
pub use shared::{CartGuard, CheckoutPermit, SharedCart};
pub use snapshot::CartSnapshot;

use common::TeaId;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Operating on a line that does not exist is not an error; those calls are
/// no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity is zero or negative.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: i64 },

    /// Quantity text is not a whole number.
    #[error("Invalid quantity: {input:?} is not a whole number")]
    InvalidQuantityInput { input: String },

    /// A checkout of this cart has not finished yet.
    #[error("Checkout is in progress. The cart cannot be changed until it finishes.")]
    CheckoutInProgress,

    /// Resulting quantity does not fit in a line.
    #[error("Quantity overflow for {tea_id}: {requested} exceeds {max}")]
    QuantityOverflow {
        tea_id: TeaId,
        requested: i64,
        max: u32,
    },
}
