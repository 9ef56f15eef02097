//! Checkout orchestration for the tea counter.
//!
//! A checkout turns the cart into one sale request per line:
//! 1. Snapshot the cart (an empty cart is rejected before any request)
//! 2. Submit every line concurrently and wait for all of them
//! 3. Clear the cart if every sale was recorded, otherwise report `k of n` failed
//!
//! Recorded sales are never rolled back. The [`services`] module holds the
//! catalog, sales, session and reporting seams with in-memory implementations.

pub mod coordinator;
pub mod error;
pub mod outcome;
pub mod services;
pub mod state;

pub use coordinator::{CheckoutConfig, CheckoutCoordinator};
pub use error::{CheckoutError, Result, ServiceError, ServiceResult};
pub use outcome::{CheckoutOutcome, PartialFailurePolicy, RecordedSale, SaleFailure};
pub use services::{
    CatalogProvider, InMemoryCatalog, InMemorySalesRecorder, InMemorySessionProvider,
    ReportingProvider, SalesRecorder, SessionProvider,
};
pub use state::CheckoutState;
