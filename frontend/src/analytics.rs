use crate::models::{ChannelSummary, VideoSummary};

/// Figures derived from an already loaded channel and its top videos.
/// Cheap enough to recompute on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelAnalytics {
    pub average_views_per_video: u64,
    /// Subscribers per hundred views.
    pub subscriber_conversion_rate: f64,
    pub content_output: u64,
    pub average_engagement_rate: f64,
}

impl ChannelAnalytics {
    pub fn derive(channel: &ChannelSummary, videos: &[VideoSummary]) -> Self {
        let stats = &channel.statistics;
        Self {
            average_views_per_video: average_views_per_video(stats.view_count, stats.video_count),
            subscriber_conversion_rate: subscriber_conversion_rate(
                stats.subscriber_count,
                stats.view_count,
            ),
            content_output: stats.video_count,
            average_engagement_rate: average_engagement_rate(videos),
        }
    }

    pub fn subscriber_conversion_display(&self) -> String {
        format_percent(self.subscriber_conversion_rate)
    }

    pub fn engagement_display(&self) -> String {
        format_percent(self.average_engagement_rate)
    }
}

pub fn average_views_per_video(view_count: u64, video_count: u64) -> u64 {
    (view_count as f64 / video_count.max(1) as f64).round() as u64
}

pub fn subscriber_conversion_rate(subscriber_count: u64, view_count: u64) -> f64 {
    subscriber_count as f64 / view_count.max(1) as f64 * 100.0
}

/// Mean of the backend-supplied engagement rates, 0 for no videos.
pub fn average_engagement_rate(videos: &[VideoSummary]) -> f64 {
    if videos.is_empty() {
        return 0.0;
    }
    videos.iter().map(|v| v.engagement_rate).sum::<f64>() / videos.len() as f64
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelStatistics, VideoStatistics};

    fn video(rate: f64) -> VideoSummary {
        VideoSummary {
            video_id: format!("v{rate}"),
            title: String::new(),
            published_at: None,
            duration: None,
            thumbnails: Default::default(),
            statistics: VideoStatistics::default(),
            engagement_rate: rate,
        }
    }

    fn channel(subscribers: u64, views: u64, videos: u64) -> ChannelSummary {
        ChannelSummary {
            channel_id: "UC_x5XG1OV2P6uZZ5FSM9Ttw".into(),
            title: "Google Developers".into(),
            description: None,
            custom_url: None,
            thumbnails: Default::default(),
            country: None,
            published_at: None,
            last_updated: None,
            statistics: ChannelStatistics {
                view_count: views,
                subscriber_count: subscribers,
                video_count: videos,
            },
        }
    }

    #[test]
    fn engagement_mean() {
        assert_eq!(average_engagement_rate(&[]), 0.0);
        assert_eq!(format_percent(average_engagement_rate(&[])), "0.00%");
        assert_eq!(average_engagement_rate(&[video(10.0), video(20.0)]), 15.0);
    }

    #[test]
    fn google_developers_figures() {
        let analytics = ChannelAnalytics::derive(&channel(1_000_000, 50_000_000, 500), &[]);
        assert_eq!(analytics.average_views_per_video, 100_000);
        assert_eq!(analytics.subscriber_conversion_display(), "2.00%");
        assert_eq!(analytics.content_output, 500);
        assert_eq!(analytics.engagement_display(), "0.00%");
    }

    #[test]
    fn zero_counts_do_not_divide_by_zero() {
        let analytics = ChannelAnalytics::derive(&channel(250, 0, 0), &[]);
        assert_eq!(analytics.average_views_per_video, 0);
        assert_eq!(analytics.subscriber_conversion_rate, 25_000.0);
    }

    #[test]
    fn average_views_rounds_to_nearest() {
        assert_eq!(average_views_per_video(10, 4), 3);
        assert_eq!(average_views_per_video(10, 3), 3);
        assert_eq!(average_views_per_video(11, 2), 6);
    }
}
