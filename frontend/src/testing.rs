//! In-memory transport for driving the client and orchestrator in tests.

use crate::api::transport::{HttpRequest, HttpResponse, Transport, TransportFailure};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

pub const TEST_BASE_URL: &str = "http://backend.test/api";

#[derive(Debug, Clone)]
pub enum Scripted {
    Respond(HttpResponse),
    Fail(TransportFailure),
}

impl Scripted {
    pub fn json(status: u16, body: Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Scripted::Respond(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    pub fn network(cause: &str) -> Self {
        Scripted::Fail(TransportFailure::Network(cause.to_string()))
    }

    pub fn timeout(after_ms: u32) -> Self {
        Scripted::Fail(TransportFailure::TimedOut { after_ms })
    }
}

#[derive(Default)]
struct Script {
    routes: HashMap<String, VecDeque<Scripted>>,
    requests: Vec<HttpRequest>,
}

/// Replays canned responses keyed by endpoint path (query string ignored).
/// Queued responses are consumed in order; the last one repeats.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, path: &str, response: Scripted) {
        self.script
            .borrow_mut()
            .routes
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    /// Drops whatever is queued for `path` and installs `response`.
    pub fn replace(&self, path: &str, response: Scripted) {
        self.script.borrow_mut().routes.remove(path);
        self.on(path, response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().iter().map(|r| path_of(&r.url)).collect()
    }
}

fn path_of(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query
        .strip_prefix(TEST_BASE_URL)
        .unwrap_or(without_query)
        .to_string()
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let path = path_of(&request.url);
        let mut script = self.script.borrow_mut();
        script.requests.push(request);

        let queue = match script.routes.get_mut(&path) {
            Some(queue) if !queue.is_empty() => queue,
            _ => {
                return Err(TransportFailure::Network(format!(
                    "no scripted response for {path}"
                )))
            }
        };
        let next = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        };

        match next {
            Scripted::Respond(response) => Ok(response),
            Scripted::Fail(failure) => Err(failure),
        }
    }
}
