//! Resource lifecycle shared by checkout orders, orders, captures and refunds
//!
//! A resource starts **unbound**: it knows its connector and maybe an id, but
//! not the URL of the remote instance. It becomes **bound** when
//! [`Create::create`] stores the `Location` header of the response, or when
//! [`Resource::fetch`] succeeds against the id-derived URL. Operations that
//! need the remote instance fail with [`KlarnaError::Precondition`] while the
//! resource has neither a location nor an id.
//!
//! Resource state is plain instance data without locking. Location-changing
//! operations take `&mut self`; use separate instances for concurrent work.

use crate::transport::{Connector, Response};
use crate::{KlarnaError, Result};
use async_trait::async_trait;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Characters escaped when an id is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A client-side proxy for one remote entity
#[async_trait]
pub trait Resource: Send {
    /// Record returned when the resource is fetched
    type Data: DeserializeOwned + Send;

    fn connector(&self) -> &Connector;

    /// URL of the remote instance, once known
    fn location(&self) -> Option<&str>;

    /// GET the remote instance and decode it.
    ///
    /// Every call issues a new request; nothing is cached between calls.
    async fn fetch(&mut self) -> Result<Self::Data>;
}

/// A resource that is created by posting to its collection
#[async_trait]
pub trait Create: Resource {
    /// Record sent in the create request
    type Input: Serialize + Sync;

    /// POST `data` and bind the resource to the returned `Location`.
    ///
    /// Returns the decoded body when the server echoes the created instance.
    async fn create(&mut self, data: &Self::Input) -> Result<Option<Self::Data>>;
}

/// Connector, location and cancellation shared by every resource type
#[derive(Debug, Clone)]
pub struct ResourceCore {
    connector: Connector,
    location: Option<String>,
    cancellation: Option<CancellationToken>,
}

impl ResourceCore {
    pub fn new(connector: Connector) -> Self {
        Self {
            connector,
            location: None,
            cancellation: None,
        }
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Abort in-flight and future calls once `token` is cancelled
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// The location, or the URL derived from `fallback` when unbound
    pub fn resolve_target(&self, fallback: Option<String>, operation: &str) -> Result<String> {
        if let Some(location) = &self.location {
            return Ok(location.clone());
        }
        fallback.ok_or_else(|| {
            KlarnaError::precondition(format!(
                "{} requires a created or fetched resource (no location and no id)",
                operation
            ))
        })
    }

    /// Issue one call through the connector
    pub async fn send(&self, method: Method, url: &str, payload: &str) -> Result<Response> {
        let request = self.connector.create_request(url, method)?;
        match &self.cancellation {
            Some(token) => {
                self.connector
                    .send_with_cancellation(request, payload, token)
                    .await
            }
            None => self.connector.send(request, payload).await,
        }
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.send(Method::GET, url, "").await
    }

    /// POST `data` serialized as JSON, or an empty body
    pub async fn post<T>(&self, url: &str, data: Option<&T>) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let payload = match data {
            Some(data) => serde_json::to_string(data)?,
            None => String::new(),
        };
        self.send(Method::POST, url, &payload).await
    }

    /// PATCH `data` serialized as JSON
    pub async fn patch<T>(&self, url: &str, data: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(data)?;
        self.send(Method::PATCH, url, &payload).await
    }

    /// POST `data` to a collection and bind to the `Location` of the response
    pub async fn create<T>(&mut self, url: &str, data: &T) -> Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let response = self.post(url, Some(data)).await?;

        let location = response.location().ok_or_else(|| {
            KlarnaError::malformed_response(format!(
                "Response to create ({}) has no Location header",
                response.status()
            ))
        })?;

        tracing::debug!("Resource created at {}", location);
        self.location = Some(location.to_string());
        Ok(response)
    }

    /// GET `url`, require a JSON body and decode it; binds the resource to `url`
    pub async fn fetch<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        let response = self.get(url).await?;

        if !response.has_body() || !response.is_json() {
            return Err(KlarnaError::malformed_response(format!(
                "Expected a JSON body, got content type {:?}",
                response.content_type().unwrap_or("none")
            )));
        }

        let data = response.data()?;
        if self.location.is_none() {
            self.location = Some(self.connector.resolve_url(url));
        }
        Ok(data)
    }
}

/// Decode the body if the server returned a JSON one
pub fn decode_optional<T: DeserializeOwned>(response: &Response) -> Result<Option<T>> {
    if response.has_body() && response.is_json() {
        Ok(Some(response.data()?))
    } else {
        Ok(None)
    }
}

/// Body echoed by a successful create.
///
/// The resource is already bound when this runs, so an undecodable body is
/// logged and dropped instead of failing the create.
pub fn decode_created<T: DeserializeOwned>(response: &Response) -> Option<T> {
    decode_optional(response).unwrap_or_else(|e| {
        tracing::warn!("Ignoring undecodable body of created resource: {}", e);
        None
    })
}

/// `base/segment` with exactly one separator
pub fn sub_path(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}

/// `base/id` with the id escaped as a path segment
pub fn id_path(base: &str, id: &str) -> String {
    sub_path(base, &utf8_percent_encode(id, PATH_SEGMENT).to_string())
}
