//! Scripted transport for tests: canned replies, recorded requests, no network.

use async_trait::async_trait;
use cogmem_types::{ApiRequest, ApiResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone)]
enum Reply {
    Response(ApiResponse),
    Error(TransportError),
    Stall,
}

/// A request as the transport received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub request: ApiRequest,
}

/// Replies are taken from a queue first; once it is empty the fallback reply repeats.
/// With no fallback, an empty queue answers `200 {}`.
pub struct MockTransport {
    queue: Mutex<VecDeque<Reply>>,
    fallback: Option<Reply>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: None,
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with the same response.
    pub fn always(response: ApiResponse) -> Self {
        Self {
            fallback: Some(Reply::Response(response)),
            ..Self::new()
        }
    }

    /// Fail every request with the same transport error.
    pub fn always_failing(error: TransportError) -> Self {
        Self {
            fallback: Some(Reply::Error(error)),
            ..Self::new()
        }
    }

    /// Never answer; only the caller's deadline ends the call.
    pub fn stalled() -> Self {
        Self {
            fallback: Some(Reply::Stall),
            ..Self::new()
        }
    }

    pub fn push_response(&self, response: ApiResponse) {
        self.enqueue(Reply::Response(response));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.enqueue(Reply::Response(ApiResponse::json(status, &body)));
    }

    pub fn push_error(&self, error: TransportError) {
        self.enqueue(Reply::Error(error));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn enqueue(&self, reply: Reply) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }

    fn next_reply(&self) -> Reply {
        let queued = self
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        queued
            .or_else(|| self.fallback.clone())
            .unwrap_or_else(|| Reply::Response(ApiResponse::new(200, "{}")))
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.to_string(),
                request: request.clone(),
            });
        match self.next_reply() {
            Reply::Response(response) => Ok(response),
            Reply::Error(error) => Err(error),
            Reply::Stall => std::future::pending().await,
        }
    }
}
