//! Entry point handing out resources bound to one connector

use crate::checkout::CheckoutOrder;
use crate::config::ConnectorConfig;
use crate::order_management::{Capture, Order, Refund};
use crate::transport::Connector;
use crate::Result;

/// API client for one merchant account
///
/// Cloning is cheap; all clones and every resource they create share the
/// same connector.
#[derive(Debug, Clone)]
pub struct Client {
    connector: Connector,
}

impl Client {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    /// Create a reqwest-backed client from configuration
    pub fn from_config(config: &ConnectorConfig) -> Result<Self> {
        Ok(Self::new(Connector::from_config(config)?))
    }

    /// Create a client from `KLARNA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ConnectorConfig::from_env()?)
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    /// A checkout order; `None` for an order that is about to be created
    pub fn checkout_order(&self, order_id: Option<&str>) -> CheckoutOrder {
        CheckoutOrder::new(self.connector.clone(), order_id)
    }

    pub fn order(&self, order_id: &str) -> Order {
        Order::new(self.connector.clone(), order_id)
    }

    /// A capture of the order at `order_url`
    pub fn capture(&self, order_url: &str, capture_id: Option<&str>) -> Capture {
        Capture::new(self.connector.clone(), order_url, capture_id)
    }

    /// A refund of the order at `order_url`
    pub fn refund(&self, order_url: &str, refund_id: Option<&str>) -> Refund {
        Refund::new(self.connector.clone(), order_url, refund_id)
    }
}
