//! HTTP route handlers.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod health;
pub mod metrics;
pub mod reports;
pub mod session;
