pub mod transport;

use crate::config::DashboardConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthResponse, ChannelSearchResults, ChannelSummary, CompareRequest, DemographicsProfile,
    Envelope, ErrorBody, QuotaStatus, StatisticsSnapshot, SystemConfig, SystemHealth, SystemStats,
    VideoList, VideoOrder,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use transport::{FetchTransport, HttpMethod, HttpRequest, Transport, TransportFailure};

const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Merged over the default `Content-Type: application/json`.
    pub headers: Vec<(String, String)>,
    /// Already serialized.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json_body<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// Appends `params` as a query string, skipping the `?` when there are none.
fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

fn channel_path(channel_id: &str, suffix: &str) -> String {
    format!("/channel/{}/{}", urlencoding::encode(channel_id), suffix)
}

fn rejected(body: ErrorBody) -> ApiError {
    ApiError::Rejected {
        code: body.code,
        message: body.message,
    }
}

/// Typed client for the channel analytics backend. One instance is built at
/// startup and shared by everything that talks to the backend.
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<FetchTransport> {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.api_base_url.clone(),
            FetchTransport::new(config.request_timeout_ms),
        )
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Sends a request to `base_url + endpoint` and returns the parsed JSON
    /// payload untouched. Envelope handling is left to the caller.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Value> {
        let result = self.dispatch(endpoint, options).await;
        if let Err(e) = &result {
            log::error!("API request {} failed: {}", endpoint, e);
        }
        result
    }

    async fn dispatch(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Value> {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|failure| match failure {
                TransportFailure::Network(cause) => ApiError::Transport(cause),
                TransportFailure::TimedOut { after_ms } => ApiError::Timeout(after_ms),
            })?;

        let parsed = serde_json::from_str::<Value>(&response.body);

        if !response.ok() {
            let message = parsed
                .ok()
                .and_then(|payload| {
                    payload
                        .pointer("/error/message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("HTTP error: status {}", response.status));
            return Err(ApiError::Backend {
                status: response.status,
                message,
            });
        }

        parsed.map_err(|e| ApiError::Transport(format!("invalid JSON in response: {e}")))
    }

    async fn fetch<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<D> {
        let payload = self.request(endpoint, options).await?;
        serde_json::from_value(payload).map_err(|e| {
            log::error!("API response from {} has an unexpected shape: {}", endpoint, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Fetches an enveloped route and unwraps `data`, turning
    /// `success: false` into [`ApiError::Rejected`].
    async fn fetch_data<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<D> {
        let envelope: Envelope<D> = self.fetch(endpoint, options).await?;
        envelope.into_result().map_err(|body| {
            log::warn!("API {} reported failure: {}", endpoint, body.message);
            rejected(body)
        })
    }

    async fn fetch_auth(&self, endpoint: &str, options: RequestOptions) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self.fetch(endpoint, options).await?;
        response.into_result().map_err(rejected)
    }

    pub async fn get_system_health(&self) -> ApiResult<SystemHealth> {
        self.fetch("/system/health", RequestOptions::get()).await
    }

    pub async fn get_system_config(&self) -> ApiResult<SystemConfig> {
        self.fetch_data("/system/config", RequestOptions::get()).await
    }

    pub async fn get_system_stats(&self) -> ApiResult<SystemStats> {
        self.fetch_data("/system/stats", RequestOptions::get()).await
    }

    pub async fn get_quota_status(&self) -> ApiResult<QuotaStatus> {
        self.fetch_data("/system/quota/status", RequestOptions::get()).await
    }

    pub async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> ApiResult<ChannelSearchResults> {
        let endpoint = with_query(
            "/channel/search",
            &[("q", query.to_string()), ("maxResults", max_results.to_string())],
        );
        self.fetch_data(&endpoint, RequestOptions::get()).await
    }

    pub async fn get_channel_basic_info(&self, channel_id: &str) -> ApiResult<ChannelSummary> {
        self.fetch_data(&channel_path(channel_id, "basic"), RequestOptions::get())
            .await
    }

    pub async fn get_channel_statistics(
        &self,
        channel_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
        metrics: Option<&str>,
    ) -> ApiResult<Vec<StatisticsSnapshot>> {
        let params: Vec<(&str, String)> = [
            ("startDate", start_date),
            ("endDate", end_date),
            ("metrics", metrics),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
        .collect();

        let endpoint = with_query(&channel_path(channel_id, "statistics"), &params);
        self.fetch_data(&endpoint, RequestOptions::get()).await
    }

    pub async fn get_channel_demographics(
        &self,
        channel_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ApiResult<DemographicsProfile> {
        let params: Vec<(&str, String)> = [("startDate", start_date), ("endDate", end_date)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .collect();

        let endpoint = with_query(&channel_path(channel_id, "demographics"), &params);
        self.fetch_data(&endpoint, RequestOptions::get()).await
    }

    pub async fn get_channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
        order: VideoOrder,
    ) -> ApiResult<VideoList> {
        let endpoint = with_query(
            &channel_path(channel_id, "videos"),
            &[
                ("maxResults", max_results.to_string()),
                ("order", order.as_query_value().to_string()),
            ],
        );
        self.fetch_data(&endpoint, RequestOptions::get()).await
    }

    /// The comparison payload is backend-defined, so it is handed back as raw JSON.
    pub async fn compare_channels(&self, comparison: &CompareRequest) -> ApiResult<Value> {
        let options = RequestOptions::post().json_body(comparison)?;
        self.fetch_data("/channel/compare", options).await
    }

    pub async fn login(&self) -> ApiResult<AuthResponse> {
        self.fetch_auth("/auth/login", RequestOptions::get()).await
    }

    pub async fn logout(&self) -> ApiResult<AuthResponse> {
        self.fetch_auth("/auth/logout", RequestOptions::post()).await
    }

    pub async fn get_current_user(&self) -> ApiResult<AuthResponse> {
        self.fetch_auth("/auth/me", RequestOptions::get()).await
    }

    pub async fn refresh_token(&self) -> ApiResult<AuthResponse> {
        self.fetch_auth("/auth/refresh", RequestOptions::post()).await
    }
}
