//! In-memory [`Transport`] double.
//!
//! Records every request it receives and answers from a queue of canned
//! responses keyed by method and path. Unscripted requests get `200` with
//! `[]` for GET and `{}` for everything else, so list screens load empty.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

type Scripted = Result<ApiResponse, ApiError>;

#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: RefCell<Vec<ApiRequest>>,
    scripted: RefCell<HashMap<(Method, String), VecDeque<Scripted>>>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `method path` request.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.push(method, path, Ok(ApiResponse { status, body: body.into() }))
    }

    /// Queue a JSON response for the next `method path` request.
    pub fn respond_json(&self, method: Method, path: &str, status: u16, body: &serde_json::Value) -> &Self {
        self.respond(method, path, status, body.to_string())
    }

    /// Queue a transport-level failure for the next `method path` request.
    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(ApiError::Transport(message.to_owned())))
    }

    fn push(&self, method: Method, path: &str, response: Scripted) -> &Self {
        self.scripted.borrow_mut().entry((method, path.to_owned())).or_default().push_back(response);
        self
    }

    /// Every request sent so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    /// `"METHOD /path"` for every request sent so far.
    #[must_use]
    pub fn call_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| format!("{} {}", c.method, c.path)).collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        self.calls.borrow_mut().push(request);

        let next = self.scripted.borrow_mut().get_mut(&key).and_then(VecDeque::pop_front);
        next.unwrap_or_else(|| {
            let body = if key.0 == Method::Get { b"[]".to_vec() } else { b"{}".to_vec() };
            Ok(ApiResponse { status: 200, body })
        })
    }
}

