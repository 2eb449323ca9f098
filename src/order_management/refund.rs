//! Refund resource

use crate::models::RefundData;
use crate::resource::{decode_created, id_path, sub_path, Create, Resource, ResourceCore};
use crate::transport::Connector;
use crate::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A refund of an order, addressed under `{order}/refunds`
#[derive(Debug, Clone)]
pub struct Refund {
    core: ResourceCore,
    collection: String,
    refund_id: Option<String>,
}

impl Refund {
    pub fn new(connector: Connector, order_url: impl Into<String>, refund_id: Option<&str>) -> Self {
        let collection = sub_path(&order_url.into(), "refunds");
        Self {
            core: ResourceCore::new(connector),
            collection,
            refund_id: refund_id.filter(|id| !id.is_empty()).map(str::to_string),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.core.set_cancellation(token);
        self
    }

    pub fn refund_id(&self) -> Option<&str> {
        self.refund_id.as_deref()
    }

    fn url(&self) -> Result<String> {
        let by_id = self
            .refund_id
            .as_deref()
            .map(|id| id_path(&self.collection, id));
        self.core.resolve_target(by_id, "refund fetch")
    }
}

#[async_trait]
impl Resource for Refund {
    type Data = RefundData;

    fn connector(&self) -> &Connector {
        self.core.connector()
    }

    fn location(&self) -> Option<&str> {
        self.core.location()
    }

    async fn fetch(&mut self) -> Result<RefundData> {
        let url = self.url()?;
        self.core.fetch(&url).await
    }
}

#[async_trait]
impl Create for Refund {
    type Input = RefundData;

    async fn create(&mut self, data: &RefundData) -> Result<Option<RefundData>> {
        let response = self.core.create(&self.collection, data).await?;
        Ok(decode_created(&response))
    }
}
