use thiserror::Error;

/// Failures surfaced by the backend API client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response: network, DNS or a
    /// malformed JSON body on a successful status.
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// Non-2xx status. Carries the backend's own message when it sent one.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// 2xx response whose envelope reports `success: false`.
    #[error("{message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },

    /// The payload parsed as JSON but not into the expected shape.
    #[error("Unexpected response format: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures that abort a channel search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("No matching channel found")]
    NotFound,

    #[error("{0}")]
    ChannelInfo(String),
}

pub const CHANNEL_INFO_FALLBACK_MESSAGE: &str = "Unable to load channel information";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_display_the_backend_message() {
        let err = ApiError::Backend {
            status: 404,
            message: "channel not found".to_string(),
        };
        assert_eq!(err.to_string(), "channel not found");
    }

    #[test]
    fn search_errors_are_user_facing() {
        assert_eq!(SearchError::NotFound.to_string(), "No matching channel found");
        assert_eq!(
            SearchError::ChannelInfo("quota exceeded".into()).to_string(),
            "quota exceeded"
        );
    }
}
