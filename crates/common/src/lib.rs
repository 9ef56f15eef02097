//! Shared identifier types used across the tea counter crates.

pub mod types;

pub use types::{LineId, SaleId, TeaId, UserId};
