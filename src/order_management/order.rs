//! Order management order resource

use super::{Capture, Refund};
use crate::models::{
    OrderData, RefundData, UpdateAuthorization, UpdateCustomerDetails, UpdateMerchantReferences,
};
use crate::resource::{id_path, sub_path, Resource, ResourceCore};
use crate::transport::Connector;
use crate::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Collection path of orders
pub const ORDERS_PATH: &str = "/ordermanagement/v1/orders";

/// An authorized order
///
/// Orders are created by the checkout, never through this resource, so an
/// order is always addressed by its id.
#[derive(Debug, Clone)]
pub struct Order {
    core: ResourceCore,
    order_id: String,
}

impl Order {
    pub fn new(connector: Connector, order_id: impl Into<String>) -> Self {
        Self {
            core: ResourceCore::new(connector),
            order_id: order_id.into(),
        }
    }

    /// Abort calls made by this order once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.core.set_cancellation(token);
        self
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Location of the order, or its id-derived path
    pub fn url(&self) -> Result<String> {
        let by_id = (!self.order_id.is_empty()).then(|| id_path(ORDERS_PATH, &self.order_id));
        self.core.resolve_target(by_id, "order operation")
    }

    fn action(&self, segment: &str) -> Result<String> {
        Ok(sub_path(&self.url()?, segment))
    }

    /// Acknowledge that the order was received by the merchant system
    pub async fn acknowledge(&self) -> Result<()> {
        let url = self.action("acknowledge")?;
        self.core.post::<()>(&url, None).await?;
        Ok(())
    }

    /// Cancel an order that has not been captured
    pub async fn cancel(&self) -> Result<()> {
        let url = self.action("cancel")?;
        self.core.post::<()>(&url, None).await?;
        Ok(())
    }

    /// Change the authorized amount and order lines
    pub async fn update_authorization(&self, update: &UpdateAuthorization) -> Result<()> {
        let url = self.action("authorization")?;
        self.core.patch(&url, update).await?;
        Ok(())
    }

    /// Extend the time the authorization stays valid
    pub async fn extend_authorization_time(&self) -> Result<()> {
        let url = self.action("extend-authorization-time")?;
        self.core.post::<()>(&url, None).await?;
        Ok(())
    }

    pub async fn update_merchant_references(
        &self,
        update: &UpdateMerchantReferences,
    ) -> Result<()> {
        let url = self.action("merchant-references")?;
        self.core.patch(&url, update).await?;
        Ok(())
    }

    /// Replace the billing and/or shipping address
    pub async fn update_customer_details(&self, update: &UpdateCustomerDetails) -> Result<()> {
        let url = self.action("customer-details")?;
        self.core.patch(&url, update).await?;
        Ok(())
    }

    /// Refund an amount of a captured order
    pub async fn refund(&self, refund: &RefundData) -> Result<()> {
        let url = self.action("refunds")?;
        self.core.post(&url, Some(refund)).await?;
        Ok(())
    }

    /// Release the authorization that remains after the last capture
    pub async fn release_remaining_authorization(&self) -> Result<()> {
        let url = self.action("release-remaining-authorization")?;
        self.core.post::<()>(&url, None).await?;
        Ok(())
    }

    /// A capture of this order; `None` for a capture that is about to be created
    pub fn new_capture(&self, capture_id: Option<&str>) -> Result<Capture> {
        Ok(Capture::new(
            self.core.connector().clone(),
            self.url()?,
            capture_id,
        ))
    }

    /// A refund of this order; `None` for a refund that is about to be created
    pub fn new_refund(&self, refund_id: Option<&str>) -> Result<Refund> {
        Ok(Refund::new(
            self.core.connector().clone(),
            self.url()?,
            refund_id,
        ))
    }
}

#[async_trait]
impl Resource for Order {
    type Data = OrderData;

    fn connector(&self) -> &Connector {
        self.core.connector()
    }

    fn location(&self) -> Option<&str> {
        self.core.location()
    }

    async fn fetch(&mut self) -> Result<OrderData> {
        let url = self.url()?;
        self.core.fetch(&url).await
    }
}
