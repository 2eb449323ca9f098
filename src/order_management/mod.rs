//! Order management API resources
//!
//! After a checkout completes, the order is handled through
//! `/ordermanagement/v1/orders/{order_id}`:
//!
//! - [`Order`] - acknowledge, cancel, change the authorization, refund
//! - [`Capture`] - capture (part of) an order and manage the shipment
//! - [`Refund`] - create and look up refunds
//!
//! # Examples
//!
//! ```no_run
//! use klarna_rest::models::CaptureData;
//! use klarna_rest::order_management::Order;
//! use klarna_rest::transport::Connector;
//! use klarna_rest::{Create, Resource};
//!
//! # async fn example() -> klarna_rest::Result<()> {
//! let connector = Connector::with_http("merchant_id", "shared_secret", klarna_rest::config::EU_TEST_BASE_URL)?;
//! let mut order = Order::new(connector, "12345");
//!
//! let data = order.fetch().await?;
//! order.acknowledge().await?;
//!
//! let mut capture = order.new_capture(None)?;
//! capture
//!     .create(&CaptureData {
//!         captured_amount: data.order_amount.unwrap_or_default(),
//!         description: Some("Shipped in full".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! capture.trigger_send_out().await?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod order;
pub mod refund;

pub use capture::Capture;
pub use order::{Order, ORDERS_PATH};
pub use refund::Refund;
