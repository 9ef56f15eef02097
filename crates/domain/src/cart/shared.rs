//! Session-owned handle to a cart.

use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use super::{Cart, CartError, CartSnapshot};

/// Cloneable handle to one cart, guarded by a single mutex.
///
/// Every mutation runs while holding the lock, so a concurrent reader sees
/// either the state before or after it, never a line with a stale quantity.
/// While a [`CheckoutPermit`] is held the cart only changes through it.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    cart: Arc<Mutex<Cart>>,
    checkout_in_flight: Arc<AtomicBool>,
}

impl SharedCart {
    /// Creates a handle to a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the cart for reading.
    pub async fn read(&self) -> CartGuard<'_> {
        CartGuard(self.cart.lock().await)
    }

    /// Runs `f` against the cart while holding the lock.
    ///
    /// Fails with [`CartError::CheckoutInProgress`] without calling `f` while
    /// a checkout holds the permit.
    pub async fn with<T, E>(&self, f: impl FnOnce(&mut Cart) -> Result<T, E>) -> Result<T, E>
    where
        E: From<CartError>,
    {
        let mut cart = self.cart.lock().await;
        if self.is_checking_out() {
            return Err(CartError::CheckoutInProgress.into());
        }
        f(&mut cart)
    }

    /// Empties the cart, even while a checkout is in flight.
    pub async fn discard(&self) {
        self.cart.lock().await.clear();
    }

    /// Takes a snapshot of the current lines.
    pub async fn snapshot(&self) -> CartSnapshot {
        self.cart.lock().await.snapshot()
    }

    /// Marks the cart as being checked out.
    ///
    /// Returns `None` if another checkout already holds the permit. The
    /// permit is released when dropped.
    pub fn begin_checkout(&self) -> Option<CheckoutPermit> {
        self.checkout_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CheckoutPermit {
                cart: Arc::clone(&self.cart),
                flag: Arc::clone(&self.checkout_in_flight),
            })
    }

    /// Returns true while a checkout permit is held.
    pub fn is_checking_out(&self) -> bool {
        self.checkout_in_flight.load(Ordering::Acquire)
    }
}

/// Read-only view of a locked cart.
#[derive(Debug)]
pub struct CartGuard<'a>(MutexGuard<'a, Cart>);

impl Deref for CartGuard<'_> {
    type Target = Cart;

    fn deref(&self) -> &Cart {
        &self.0
    }
}

/// Exclusive right to check out a cart.
#[derive(Debug)]
pub struct CheckoutPermit {
    cart: Arc<Mutex<Cart>>,
    flag: Arc<AtomicBool>,
}

impl CheckoutPermit {
    /// Runs `f` against the cart being checked out.
    pub async fn with<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.cart.lock().await;
        f(&mut cart)
    }
}

impl Drop for CheckoutPermit {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
