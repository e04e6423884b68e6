//! Common test utilities for stripe-node integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use stripe_node::{NodeError, NodeParameters, RequestSpec, RequestTransport, Result};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    /// The request.
    pub spec: RequestSpec,
    /// Credential override passed with it.
    pub credential: Option<String>,
}

/// Transport that records every request and replays queued responses.
///
/// When the queue is empty it answers `{"id": "obj_default"}`.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: NodeError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent so far.
    pub fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RequestTransport for RecordingTransport {
    async fn request(&self, spec: RequestSpec, credential: Option<&str>) -> Result<Value> {
        self.requests.lock().unwrap().push(Recorded {
            spec,
            credential: credential.map(str::to_string),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"id": "obj_default"})))
    }
}

/// Parameters selecting `resource` and `operation`.
pub fn select(resource: &str, operation: &str) -> NodeParameters {
    NodeParameters::default()
        .set("resource", json!(resource))
        .set("operation", json!(operation))
}

/// Stripe list page.
pub fn page(ids: &[&str], has_more: bool) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
    json!({"object": "list", "data": data, "has_more": has_more})
}

/// `n` empty input items.
pub fn items(n: usize) -> Vec<Value> {
    vec![json!({}); n]
}

/// Route `tracing` output to the test writer.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
