//! Domain layer for the tea counter.
//!
//! This crate provides:
//! - Money in integer minor units
//! - Catalog items and categories
//! - The session-scoped shopping cart and its shared handle
//! - Users and sessions

pub mod cart;
pub mod catalog;
pub mod money;
pub mod session;

pub use cart::{
    Cart, CartError, CartSnapshot, CheckoutPermit, LineItem, Quantity, QuantityChange, SharedCart,
};
pub use catalog::{CatalogError, CatalogItem, Category};
pub use money::{Money, MoneyError};
pub use session::{CartSession, Role, Session, SessionToken, User};
