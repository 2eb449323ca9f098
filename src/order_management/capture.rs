//! Capture resource

use crate::models::{AddShippingInfo, CaptureData, UpdateCustomerDetails};
use crate::resource::{decode_created, id_path, sub_path, Create, Resource, ResourceCore};
use crate::transport::Connector;
use crate::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A capture of an order, addressed under `{order}/captures`
#[derive(Debug, Clone)]
pub struct Capture {
    core: ResourceCore,
    collection: String,
    capture_id: Option<String>,
}

impl Capture {
    /// `order_url` may be the order's location or its path relative to the base URL
    pub fn new(connector: Connector, order_url: impl Into<String>, capture_id: Option<&str>) -> Self {
        let collection = sub_path(&order_url.into(), "captures");
        Self {
            core: ResourceCore::new(connector),
            collection,
            capture_id: capture_id.filter(|id| !id.is_empty()).map(str::to_string),
        }
    }

    /// Abort calls made by this capture once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.core.set_cancellation(token);
        self
    }

    pub fn capture_id(&self) -> Option<&str> {
        self.capture_id.as_deref()
    }

    /// Location of the capture, or its id-derived path
    pub fn url(&self) -> Result<String> {
        let by_id = self
            .capture_id
            .as_deref()
            .map(|id| id_path(&self.collection, id));
        self.core.resolve_target(by_id, "capture operation")
    }

    /// Attach shipping information to the capture
    pub async fn add_shipping_info(&self, shipping_info: &AddShippingInfo) -> Result<()> {
        let url = sub_path(&self.url()?, "shipping-info");
        self.core.post(&url, Some(shipping_info)).await?;
        Ok(())
    }

    pub async fn update_customer_details(&self, update: &UpdateCustomerDetails) -> Result<()> {
        let url = sub_path(&self.url()?, "customer-details");
        self.core.patch(&url, update).await?;
        Ok(())
    }

    /// Send the invoice or account communication to the customer again
    pub async fn trigger_send_out(&self) -> Result<()> {
        let url = sub_path(&self.url()?, "trigger-send-out");
        self.core.post::<()>(&url, None).await?;
        Ok(())
    }
}

#[async_trait]
impl Resource for Capture {
    type Data = CaptureData;

    fn connector(&self) -> &Connector {
        self.core.connector()
    }

    fn location(&self) -> Option<&str> {
        self.core.location()
    }

    async fn fetch(&mut self) -> Result<CaptureData> {
        let url = self.url()?;
        self.core.fetch(&url).await
    }
}

#[async_trait]
impl Create for Capture {
    type Input = CaptureData;

    async fn create(&mut self, data: &CaptureData) -> Result<Option<CaptureData>> {
        let response = self.core.create(&self.collection, data).await?;
        Ok(decode_created(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, ShippingInfo};
    use crate::transport::testing::StubFactory;
    use http::Method;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::sync::Arc;

    const BASE_URL: &str = "https://dummytesturi.test";
    const ORDER_URL: &str = "/path";
    const CAPTURE_ID: &str = "1002";
    const LOCATION: &str = "https://somelocation.test";
    const AUTHORIZATION: &str = "Basic MTIzNDpNeVNlY3JldA==";

    fn stub_capture(capture_id: Option<&str>) -> (Arc<StubFactory>, Capture) {
        let factory = StubFactory::new();
        let connector = Connector::new(factory.clone(), "1234", "MySecret", BASE_URL).unwrap();
        (factory, Capture::new(connector, ORDER_URL, capture_id))
    }

    fn shipping_info() -> AddShippingInfo {
        AddShippingInfo {
            shipping_info: vec![ShippingInfo {
                shipping_company: Some("DHL".to_string()),
                shipping_method: Some("Home".to_string()),
                tracking_number: Some("63456415674545679874".to_string()),
                tracking_uri: Some("http://shipping.example/track/63456415674545679874".to_string()),
                ..Default::default()
            }],
        }
    }

    #[tokio::test]
    async fn test_fetch() {
        let (factory, mut capture) = stub_capture(Some(CAPTURE_ID));
        factory.respond(
            200,
            &[("content-type", "application/json")],
            &json!({
                "capture_id": CAPTURE_ID,
                "description": "capture description",
                "captured_amount": 111
            })
            .to_string(),
        );

        let data = capture.fetch().await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/path/captures/1002"]
        );
        assert_eq!(factory.calls()[0].method, Method::GET);
        assert_eq!(factory.calls()[0].payload, "");
        assert_eq!(data.capture_id.as_deref(), Some(CAPTURE_ID));
        assert_eq!(data.description.as_deref(), Some("capture description"));
    }

    #[tokio::test]
    async fn test_create() {
        let (factory, mut capture) = stub_capture(None);
        let data = CaptureData {
            description: Some("the desc...".to_string()),
            captured_amount: 111,
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        factory.respond(
            201,
            &[("location", LOCATION), ("content-type", "application/json")],
            &json,
        );

        let echoed = capture.create(&data).await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/path/captures"]
        );
        let calls = factory.calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].payload, json);
        assert_eq!(capture.location(), Some(LOCATION));
        assert_eq!(echoed, Some(data));
    }

    #[tokio::test]
    async fn test_add_shipping_info() {
        let (factory, capture) = stub_capture(Some(CAPTURE_ID));
        factory.respond(204, &[("location", LOCATION)], "");
        let info = shipping_info();

        capture.add_shipping_info(&info).await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/path/captures/1002/shipping-info"]
        );
        let calls = factory.calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].payload, serde_json::to_string(&info).unwrap());
    }

    #[tokio::test]
    async fn test_update_customer_details() {
        let (factory, capture) = stub_capture(Some(CAPTURE_ID));
        factory.respond(204, &[], "");
        let update = UpdateCustomerDetails {
            billing_address: Some(Address {
                given_name: Some("Testperson-se".to_string()),
                country: Some("se".to_string()),
                ..Default::default()
            }),
            shipping_address: None,
        };

        capture.update_customer_details(&update).await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/path/captures/1002/customer-details"]
        );
        let calls = factory.calls();
        assert_eq!(calls[0].method, Method::PATCH);
        assert_eq!(calls[0].payload, serde_json::to_string(&update).unwrap());
    }

    #[tokio::test]
    async fn test_trigger_send_out() {
        let (factory, capture) = stub_capture(Some(CAPTURE_ID));
        factory.respond(204, &[], "");

        capture.trigger_send_out().await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/path/captures/1002/trigger-send-out"]
        );
        assert_eq!(factory.calls()[0].method, Method::POST);
        assert_eq!(factory.calls()[0].payload, "");
    }

    #[tokio::test]
    async fn test_sub_operations_follow_created_location() {
        let mut server = Server::new_async().await;
        let location = format!("{}/ordermanagement/v1/orders/0002/captures/77", server.url());
        let create = server
            .mock("POST", "/ordermanagement/v1/orders/0002/captures")
            .match_header("authorization", AUTHORIZATION)
            .match_body(Matcher::PartialJson(json!({ "captured_amount": 500 })))
            .with_status(201)
            .with_header("location", &location)
            .create_async()
            .await;
        let send_out = server
            .mock("POST", "/ordermanagement/v1/orders/0002/captures/77/trigger-send-out")
            .match_header("authorization", AUTHORIZATION)
            .with_status(204)
            .create_async()
            .await;

        let connector = Connector::with_http("1234", "MySecret", &server.url()).unwrap();
        let mut capture = Capture::new(connector, "/ordermanagement/v1/orders/0002", None);
        let echoed = capture
            .create(&CaptureData {
                captured_amount: 500,
                ..Default::default()
            })
            .await
            .unwrap();
        capture.trigger_send_out().await.unwrap();

        create.assert_async().await;
        send_out.assert_async().await;
        assert!(echoed.is_none());
        assert_eq!(capture.location(), Some(location.as_str()));
    }

    #[tokio::test]
    async fn test_unbound_capture_rejects_sub_operations() {
        let (factory, capture) = stub_capture(None);

        let err = capture.trigger_send_out().await.unwrap_err();

        assert!(matches!(err, crate::KlarnaError::Precondition(_)));
        assert!(factory.calls().is_empty());
    }
}
