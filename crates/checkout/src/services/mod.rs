//! Storefront service traits and in-memory implementations.

pub mod catalog;
pub mod reporting;
pub mod sales;
pub mod session;

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use reporting::ReportingProvider;
pub use sales::{InMemorySalesRecorder, SalesRecorder};
pub use session::{InMemorySessionProvider, SessionProvider};
