use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Size label ("default", "medium", "high") to image URL. The backend sends
/// `null` for sizes it doesn't have.
pub type Thumbnails = BTreeMap<String, Option<String>>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelStatistics {
    pub view_count: u64,
    pub subscriber_count: u64,
    pub video_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_url: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

/// One hit of `/channel/search`. Only the id is needed to continue the lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSearchHit {
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ChannelSearchResults {
    pub channels: Vec<ChannelSearchHit>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatistics {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published_at: Option<String>,
    /// ISO-8601 duration such as `PT12M5S`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub statistics: VideoStatistics,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct VideoList {
    pub videos: Vec<VideoSummary>,
}

/// Sort order accepted by `/channel/{id}/videos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoOrder {
    #[default]
    ViewCount,
    Date,
}

impl VideoOrder {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            VideoOrder::ViewCount => "viewCount",
            VideoOrder::Date => "date",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupShare {
    pub age_group: String,
    pub views_percentage: f64,
    pub watch_time_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AudienceShare {
    pub views_percentage: f64,
    pub watch_time_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GenderSplit {
    pub male: AudienceShare,
    pub female: AudienceShare,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryShare {
    #[serde(alias = "country")]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    pub views_percentage: f64,
    #[serde(default)]
    pub watch_time_percentage: f64,
}

/// Audience breakdown. Percentages are shown as received; they are not
/// checked to add up to 100.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DemographicsProfile {
    pub age_groups: Vec<AgeGroupShare>,
    pub gender: GenderSplit,
    pub top_countries: Vec<CountryShare>,
}

/// One row of `/channel/{id}/statistics`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    #[serde(default)]
    pub channel_id: String,
    pub date: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub subscriber_count: u64,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub estimated_minutes_watched: u64,
    #[serde(default)]
    pub average_view_duration: u64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub channel_ids: Vec<String>,
    pub metrics: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    #[serde(other)]
    Unknown,
}

/// `/system/health` answers with a bare object, not an envelope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SystemHealth {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SystemHealth {
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            error: Some(error.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FeatureFlags {
    #[serde(rename = "youtubeDataAPI")]
    pub youtube_data_api: bool,
    #[serde(rename = "youtubeAnalyticsAPI")]
    pub youtube_analytics_api: bool,
    pub oauth: bool,
    pub caching: bool,
    #[serde(rename = "rateLimit")]
    pub rate_limit: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceLimits {
    pub max_channels_compare: u32,
    pub max_search_results: u32,
    pub max_videos_per_channel: u32,
    pub default_date_range_days: u32,
}

/// Cache lifetimes in seconds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheTtls {
    pub channel_basic_info: u64,
    pub channel_statistics: u64,
    pub audience_demographics: u64,
    pub videos_list: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RateLimits {
    pub requests_per_minute: u32,
    pub requests_per_hour: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfig {
    pub features: FeatureFlags,
    pub limits: ServiceLimits,
    pub cache: CacheTtls,
    pub rate_limit: RateLimits,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseCounts {
    pub total_channels: u64,
    pub total_videos: u64,
    pub total_users: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentChannel {
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentActivity {
    pub recent_channels: Vec<RecentChannel>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub uptime: String,
    pub memory_usage: String,
    pub disk_usage: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStats {
    pub database: DatabaseCounts,
    pub recent_activity: RecentActivity,
    pub system_info: SystemInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaUsage {
    pub quota_used: u64,
    pub quota_limit: u64,
    pub quota_remaining: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaStatus {
    pub quota_used: u64,
    pub quota_limit: u64,
    pub quota_remaining: u64,
    pub reset_time: Option<String>,
    pub services: BTreeMap<String, QuotaUsage>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub has_valid_token: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub code: Option<String>,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// `{success, data?, error?}` wrapper used by every channel and system route.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, ErrorBody> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (true, None, _) => Err(ErrorBody::with_message("Response contained no data")),
            (false, _, Some(error)) => Err(error),
            (false, _, None) => Err(ErrorBody::with_message("Request was not successful")),
        }
    }
}

/// The auth routes put their fields next to `success` instead of under `data`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub authorization_url: Option<String>,
    pub state: Option<String>,
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
    pub error: Option<ErrorBody>,
}

impl AuthResponse {
    pub fn into_result(self) -> Result<Self, ErrorBody> {
        if self.success {
            Ok(self)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| ErrorBody::with_message("Request was not successful")))
        }
    }
}
