//! Recording request factory for transport-free tests

use super::{Request, RequestFactory, Response};
use crate::{KlarnaError, Result};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

/// Route `tracing` output to the test harness; safe to call from every test
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A request as it reached the factory
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub payload: String,
}

/// Replays queued responses and records every request it is asked to send
#[derive(Default)]
pub(crate) struct StubFactory {
    created: Mutex<Vec<String>>,
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Response>>,
}

impl StubFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the next response
    pub fn respond(&self, status: u16, headers: &[(&'static str, &str)], body: &str) {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, value.parse().unwrap());
        }
        let status = StatusCode::from_u16(status).unwrap();
        self.responses
            .lock()
            .unwrap()
            .push_back(Response::new(status, map, body));
    }

    /// URLs passed to `create_request`, in order
    pub fn created_urls(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    /// Requests passed to `send`, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestFactory for StubFactory {
    fn create_request(&self, url: &str) -> Result<Request> {
        self.created.lock().unwrap().push(url.to_string());
        Ok(Request::new(Url::parse(url)?))
    }

    async fn send(&self, request: Request, payload: &str) -> Result<Response> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method().clone(),
            url: request.url().to_string(),
            headers: request.headers().clone(),
            payload: payload.to_string(),
        });

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued for request");

        if !response.status().is_success() {
            return Err(KlarnaError::from_response(response));
        }
        Ok(response)
    }
}

/// Accepts every request and never answers, like a server that stalls
#[derive(Default)]
pub(crate) struct StalledFactory {
    started: Notify,
}

impl StalledFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Resolves once a call is in flight
    pub async fn in_flight(&self) {
        self.started.notified().await;
    }
}

#[async_trait]
impl RequestFactory for StalledFactory {
    fn create_request(&self, url: &str) -> Result<Request> {
        Ok(Request::new(Url::parse(url)?))
    }

    async fn send(&self, _request: Request, _payload: &str) -> Result<Response> {
        self.started.notify_one();
        std::future::pending().await
    }
}
