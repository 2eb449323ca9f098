//! # Klarna REST client
//!
//! A **typed, async** Rust client for the Klarna Checkout (v3) and Order
//! Management (v1) REST APIs.
//!
//! ## Features
//!
//! - 🔐 **Authenticated transport**: HTTP Basic merchant credentials and JSON headers on every request
//! - 🧭 **Location tracking**: resources follow the `Location` the API hands back on creation
//! - 🧾 **Typed records**: serde models for checkout orders, orders, captures and refunds
//! - 🚦 **Tagged errors**: transport failures, API rejections, malformed responses and
//!   precondition errors are distinct [`KlarnaError`] variants
//! - ⏹️ **Cancellation**: attach a `CancellationToken` to any resource
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use klarna_rest::models::{CheckoutOrderData, MerchantUrls, OrderLine};
//! use klarna_rest::{config::EU_TEST_BASE_URL, Client, ConnectorConfig, Create, Resource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectorConfig::new("merchant_id", "shared_secret", EU_TEST_BASE_URL);
//!     let client = Client::from_config(&config)?;
//!
//!     let mut checkout = client.checkout_order(None);
//!     checkout
//!         .create(&CheckoutOrderData {
//!             purchase_country: Some("se".to_string()),
//!             purchase_currency: Some("sek".to_string()),
//!             locale: Some("sv-se".to_string()),
//!             order_amount: Some(10000),
//!             order_tax_amount: Some(2000),
//!             order_lines: vec![OrderLine::new("Blue shoes", 2, 5000, 2500)],
//!             merchant_urls: Some(MerchantUrls {
//!                 terms: "https://shop.example/terms".to_string(),
//!                 checkout: "https://shop.example/checkout".to_string(),
//!                 confirmation: "https://shop.example/confirmation".to_string(),
//!                 push: "https://shop.example/push".to_string(),
//!                 ..Default::default()
//!             }),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     let order = checkout.fetch().await?;
//!     println!("{}", order.html_snippet.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`transport`**: requests, responses, authentication and the [`Connector`]
//! - **`resource`**: the lifecycle shared by every remote resource
//! - **`checkout`**: checkout orders
//! - **`order_management`**: orders, captures and refunds
//! - **`models`**: request and response records
//! - **`config`**: connector configuration and well-known endpoints
//! - **`error`**: error type and response classification

pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod order_management;
pub mod resource;
pub mod transport;

// Re-exports for convenience
pub use checkout::CheckoutOrder;
pub use client::Client;
pub use config::ConnectorConfig;
pub use error::{KlarnaError, Result};
pub use order_management::{Capture, Order, Refund};
pub use resource::{Create, Resource};
pub use transport::{Connector, RequestFactory};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
