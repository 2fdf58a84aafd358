//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Queue a response with a raw text body.
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse::new(status, body)))
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: ApiError) -> Self {
        self.push(Err(error))
    }

    fn push(self, item: Result<ApiResponse, ApiError>) -> Self {
        self.responses.lock().expect("mock mutex should lock").push_back(item);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("mock mutex should lock").clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().expect("mock mutex should lock").push(request);
        self.responses
            .lock()
            .expect("mock mutex should lock")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}
