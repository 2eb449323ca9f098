//! Checkout order resource

use crate::models::CheckoutOrderData;
use crate::resource::{decode_created, decode_optional, id_path, Create, Resource, ResourceCore};
use crate::transport::Connector;
use crate::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Collection path of checkout orders
pub const CHECKOUT_ORDERS_PATH: &str = "/checkout/v3/orders";

/// A checkout order, from cart creation until the purchase completes
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    core: ResourceCore,
    order_id: Option<String>,
}

impl CheckoutOrder {
    /// Create a proxy for a new order, or for the existing order `order_id`
    pub fn new(connector: Connector, order_id: Option<&str>) -> Self {
        Self {
            core: ResourceCore::new(connector),
            order_id: order_id.filter(|id| !id.is_empty()).map(str::to_string),
        }
    }

    /// Abort calls made by this order once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.core.set_cancellation(token);
        self
    }

    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    fn target(&self, operation: &str) -> Result<String> {
        let by_id = self
            .order_id
            .as_deref()
            .map(|id| id_path(CHECKOUT_ORDERS_PATH, id));
        self.core.resolve_target(by_id, operation)
    }

    /// POST changed order data to the order.
    ///
    /// Returns the updated order when the server sends one back, otherwise
    /// `data` unchanged.
    pub async fn update(&mut self, data: &CheckoutOrderData) -> Result<CheckoutOrderData> {
        let url = self.target("update")?;
        let response = self.core.post(&url, Some(data)).await?;
        Ok(decode_optional(&response)?.unwrap_or_else(|| data.clone()))
    }
}

#[async_trait]
impl Resource for CheckoutOrder {
    type Data = CheckoutOrderData;

    fn connector(&self) -> &Connector {
        self.core.connector()
    }

    fn location(&self) -> Option<&str> {
        self.core.location()
    }

    async fn fetch(&mut self) -> Result<CheckoutOrderData> {
        let url = self.target("fetch")?;
        self.core.fetch(&url).await
    }
}

#[async_trait]
impl Create for CheckoutOrder {
    type Input = CheckoutOrderData;

    async fn create(&mut self, data: &CheckoutOrderData) -> Result<Option<CheckoutOrderData>> {
        let response = self.core.create(CHECKOUT_ORDERS_PATH, data).await?;
        Ok(decode_created(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderLine;
    use crate::transport::testing::StubFactory;
    use crate::KlarnaError;
    use http::Method;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const AUTHORIZATION: &str = "Basic MTIzNDpNeVNlY3JldA==";

    fn order_data_1() -> CheckoutOrderData {
        CheckoutOrderData {
            purchase_country: Some("se".to_string()),
            purchase_currency: Some("sek".to_string()),
            locale: Some("sv-se".to_string()),
            order_amount: Some(10000),
            order_tax_amount: Some(2000),
            order_lines: vec![OrderLine::new("Blue shoes", 2, 5000, 2500).with_reference("123050")],
            ..Default::default()
        }
    }

    fn order_data_2() -> CheckoutOrderData {
        CheckoutOrderData {
            purchase_country: Some("de".to_string()),
            purchase_currency: Some("eur".to_string()),
            locale: Some("de-de".to_string()),
            order_amount: Some(1100),
            order_tax_amount: Some(176),
            order_lines: vec![OrderLine::new("Green hat", 1, 1100, 1900)],
            ..Default::default()
        }
    }

    fn connector(url: &str) -> Connector {
        Connector::with_http("1234", "MySecret", url).unwrap()
    }

    #[tokio::test]
    async fn test_create() {
        let mut server = Server::new_async().await;
        let location = format!("{}/checkout/v3/orders/0001", server.url());
        let data = order_data_1();
        let mock = server
            .mock("POST", "/checkout/v3/orders")
            .match_header("authorization", AUTHORIZATION)
            .match_body(Matcher::Json(serde_json::to_value(&data).unwrap()))
            .with_status(201)
            .with_header("location", &location)
            .create_async()
            .await;

        let mut order = CheckoutOrder::new(connector(&server.url()), None);
        let echoed = order.create(&data).await.unwrap();

        mock.assert_async().await;
        assert!(echoed.is_none());
        assert_eq!(order.location(), Some(location.as_str()));
    }

    #[tokio::test]
    async fn test_create_sets_location_verbatim() {
        let factory = StubFactory::new();
        factory.respond(201, &[("location", "https://somelocation.test/")], "");
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, None);
        order.create(&order_data_1()).await.unwrap();

        assert_eq!(order.location(), Some("https://somelocation.test/"));
        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/checkout/v3/orders"]
        );
        let calls = factory.calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(
            calls[0].payload,
            serde_json::to_string(&order_data_1()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_update() {
        let mut server = Server::new_async().await;
        let location = format!("{}/checkout/v3/orders/0001", server.url());
        let data_1 = order_data_1();
        let data_2 = order_data_2();

        let create = server
            .mock("POST", "/checkout/v3/orders")
            .with_status(201)
            .with_header("location", &location)
            .create_async()
            .await;
        let update = server
            .mock("POST", "/checkout/v3/orders/0001")
            .match_header("authorization", AUTHORIZATION)
            .match_body(Matcher::Json(serde_json::to_value(&data_2).unwrap()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&data_2).unwrap())
            .create_async()
            .await;

        let mut order = CheckoutOrder::new(connector(&server.url()), None);
        order.create(&data_1).await.unwrap();
        let updated = order.update(&data_2).await.unwrap();

        create.assert_async().await;
        update.assert_async().await;
        assert_eq!(order.location(), Some(location.as_str()));
        assert_eq!(updated.purchase_country, data_2.purchase_country);
        assert_eq!(updated.purchase_currency, data_2.purchase_currency);
    }

    #[tokio::test]
    async fn test_update_prefixes_foreign_location() {
        let factory = StubFactory::new();
        factory.respond(201, &[("location", "https://somelocation.test/")], "");
        factory.respond(204, &[], "");
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, None);
        order.create(&order_data_1()).await.unwrap();
        let data_2 = order_data_2();
        let updated = order.update(&data_2).await.unwrap();

        // No body: the submitted data is returned
        assert_eq!(updated, data_2);
        assert_eq!(
            factory.created_urls()[1],
            "https://dummytesturi.test/https://somelocation.test/"
        );
    }

    #[tokio::test]
    async fn test_update_with_text_body_returns_input() {
        let factory = StubFactory::new();
        factory.respond(
            201,
            &[("location", "https://dummytesturi.test/checkout/v3/orders/1")],
            "",
        );
        factory.respond(200, &[("content-type", "text/plain")], "OK");
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, None);
        order.create(&order_data_1()).await.unwrap();
        let data_2 = order_data_2();
        let updated = order.update(&data_2).await.unwrap();

        assert_eq!(updated, data_2);
        assert_eq!(
            factory.created_urls()[1],
            "https://dummytesturi.test/checkout/v3/orders/1"
        );
    }

    #[tokio::test]
    async fn test_create_with_text_body_binds() {
        let factory = StubFactory::new();
        factory.respond(
            201,
            &[
                ("location", "https://dummytesturi.test/checkout/v3/orders/1"),
                ("content-type", "text/plain"),
            ],
            "Created",
        );
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, None);
        let echoed = order.create(&order_data_1()).await.unwrap();

        assert!(echoed.is_none());
        assert_eq!(
            order.location(),
            Some("https://dummytesturi.test/checkout/v3/orders/1")
        );
    }

    #[tokio::test]
    async fn test_fetch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/checkout/v3/orders/0003")
            .match_header("authorization", AUTHORIZATION)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "order_id": "0003", "order_amount": 1234 }).to_string())
            .create_async()
            .await;

        let mut order = CheckoutOrder::new(connector(&server.url()), Some("0003"));
        let data = order.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(data.order_id.as_deref(), Some("0003"));
        assert_eq!(data.order_amount, Some(1234));
        assert_eq!(
            order.location(),
            Some(format!("{}/checkout/v3/orders/0003", server.url()).as_str())
        );
    }

    #[tokio::test]
    async fn test_fetch_twice_issues_two_requests() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/checkout/v3/orders/0003")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "order_id": "0003", "status": "checkout_incomplete" }).to_string())
            .expect(2)
            .create_async()
            .await;

        let mut order = CheckoutOrder::new(connector(&server.url()), Some("0003"));
        let first = order.fetch().await.unwrap();
        let second = order.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_expected_url() {
        let factory = StubFactory::new();
        factory.respond(
            200,
            &[("content-type", "application/json")],
            r#"{"order_id":"0003","order_amount":1234}"#,
        );
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, Some("0003"));
        order.fetch().await.unwrap();

        assert_eq!(
            factory.created_urls(),
            vec!["https://dummytesturi.test/checkout/v3/orders/0003"]
        );
        assert_eq!(factory.calls()[0].method, Method::GET);
        assert_eq!(factory.calls()[0].payload, "");
    }

    #[tokio::test]
    async fn test_update_unbound_is_precondition_error() {
        let factory = StubFactory::new();
        let connector =
            Connector::new(factory.clone(), "1234", "MySecret", "https://dummytesturi.test").unwrap();

        let mut order = CheckoutOrder::new(connector, None);
        let err = order.update(&order_data_2()).await.unwrap_err();

        assert!(matches!(err, KlarnaError::Precondition(_)));
        assert!(factory.calls().is_empty());
    }
}
