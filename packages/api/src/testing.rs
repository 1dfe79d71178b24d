//! Recording transport for tests.
//!
//! Routes are matched on method plus URL suffix. Each route holds a queue of
//! replies: replies are consumed in order, and the last one repeats forever.
//! Unmatched requests get a 404 so a missing route shows up as a failed call
//! rather than a hang.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::ApiError;

#[derive(Clone, Debug)]
enum Reply {
    Response(ApiResponse),
    Error(ApiError),
}

#[derive(Debug, Default)]
struct MockState {
    routes: Vec<(Method, String, VecDeque<Reply>)>,
    requests: Vec<ApiRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for `method` requests whose URL ends with `path`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.push(
            method,
            path,
            Reply::Response(ApiResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    /// Queue a reply with a raw body.
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.push(
            method,
            path,
            Reply::Response(ApiResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) -> &Self {
        self.push(method, path, Reply::Error(error))
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        let mut state = self.lock();
        match state
            .routes
            .iter_mut()
            .find(|(m, p, _)| *m == method && p == path)
        {
            Some((_, _, queue)) => queue.push_back(reply),
            None => state
                .routes
                .push((method, path.to_string(), VecDeque::from([reply]))),
        }
        drop(state);
        self
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.lock();
        let path = request.url.clone();
        let method = request.method;
        state.requests.push(request);

        let reply = state
            .routes
            .iter_mut()
            .filter(|(m, p, _)| *m == method && path.ends_with(p.as_str()))
            .max_by_key(|(_, p, _)| p.len())
            .and_then(|(_, _, queue)| {
                if queue.len() > 1 {
                    queue.pop_front()
                } else {
                    queue.front().cloned()
                }
            });

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Error(error)) => Err(error),
            None => Ok(ApiResponse {
                status: 404,
                body: r#"{"detail":"no mock route"}"#.to_string(),
            }),
        }
    }
}
