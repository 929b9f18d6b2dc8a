use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::AbortSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportFailure {
    Network(String),
    TimedOut { after_ms: u32 },
}

/// The seam between the API client and the wire. The browser build uses
/// [`FetchTransport`]; tests swap in a scripted one.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// `fetch` through gloo-net, aborted by the browser once `timeout_ms` passes.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    timeout_ms: u32,
}

impl FetchTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    fn classify(&self, error: gloo_net::Error) -> TransportFailure {
        match error {
            gloo_net::Error::JsError(js)
                if js.name == "TimeoutError" || js.name == "AbortError" =>
            {
                TransportFailure::TimedOut {
                    after_ms: self.timeout_ms,
                }
            }
            other => TransportFailure::Network(other.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let signal = AbortSignal::timeout_with_u32(self.timeout_ms);

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let builder = builder.abort_signal(Some(&signal));

        let sent = match request.body {
            Some(body) => match builder.body(body) {
                Ok(prepared) => prepared.send().await,
                Err(e) => Err(e),
            },
            None => builder.send().await,
        };
        let response = sent.map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(HttpResponse { status, body })
    }
}
