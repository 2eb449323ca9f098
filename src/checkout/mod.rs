//! Checkout API resources

pub mod order;

pub use order::{CheckoutOrder, CHECKOUT_ORDERS_PATH};
