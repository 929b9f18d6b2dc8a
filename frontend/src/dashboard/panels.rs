use crate::analytics::{format_percent, ChannelAnalytics};
use crate::dashboard::components::StatCard;
use crate::models::{ChannelSummary, DemographicsProfile, VideoSummary};
use crate::utils::{
    format_display_date, format_grouped, format_iso8601_duration, format_number, thumbnail_url,
    VIDEO_THUMBNAIL_PLACEHOLDER,
};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Videos,
    Demographics,
    Analytics,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Videos,
        DashboardTab::Demographics,
        DashboardTab::Analytics,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardTab::Videos => "Top Videos",
            DashboardTab::Demographics => "Demographics",
            DashboardTab::Analytics => "Analytics",
        }
    }
}

/// Inline style for a percentage bar. Out of range input is clamped.
pub fn bar_width(percentage: f64) -> String {
    let width = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    format!("width: {width:.1}%")
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: DashboardTab,
    pub on_select: Callback<DashboardTab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="flex border-b border-gray-200 mb-4">
            { for DashboardTab::ALL.iter().map(|tab| {
                let tab = *tab;
                let classes = if tab == props.active {
                    "px-4 py-2 -mb-px border-b-2 border-red-600 text-red-600 font-semibold"
                } else {
                    "px-4 py-2 text-gray-600 hover:text-gray-800"
                };
                let on_select = props.on_select.clone();
                html! {
                    <button class={classes} onclick={move |_| on_select.emit(tab)}>
                        { tab.display_name() }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideosPanelProps {
    pub videos: Vec<VideoSummary>,
}

#[function_component(VideosPanel)]
pub fn videos_panel(props: &VideosPanelProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <p class="text-center text-gray-500">{"No videos found for this channel."}</p>
        };
    }

    html! {
        <div class="space-y-4">
            { for props.videos.iter().map(|video| html! { <VideoRow video={video.clone()} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoRowProps {
    video: VideoSummary,
}

#[function_component(VideoRow)]
fn video_row(props: &VideoRowProps) -> Html {
    let video = &props.video;
    let stats = &video.statistics;
    let thumbnail = thumbnail_url(
        &video.thumbnails,
        &["medium", "high", "default"],
        VIDEO_THUMBNAIL_PLACEHOLDER,
    );

    html! {
        <div class="flex gap-4 bg-gray-100 rounded-lg overflow-hidden">
            <img src={thumbnail} alt={video.title.clone()} class="w-40 object-cover" />
            <div class="p-3 flex-grow">
                <h3 class="font-semibold text-gray-800 mb-1">
                    <a href={format!("https://www.youtube.com/watch?v={}", video.video_id)}
                       target="_blank"
                       class="text-blue-600 hover:underline">
                        { &video.title }
                    </a>
                </h3>
                <div class="text-sm text-gray-600 flex flex-wrap gap-4">
                    { for video.published_at.iter().map(|date| html! {
                        <span>{ format!("📅 {}", format_display_date(date)) }</span>
                    })}
                    { for video.duration.as_deref().and_then(format_iso8601_duration).map(|duration| html! {
                        <span>{ format!("⏱️ {duration}") }</span>
                    })}
                    <span title={format_grouped(stats.view_count)}>{ format!("👁️ {}", format_number(stats.view_count)) }</span>
                    <span title={format_grouped(stats.like_count)}>{ format!("👍 {}", format_number(stats.like_count)) }</span>
                    <span title={format_grouped(stats.comment_count)}>{ format!("💬 {}", format_number(stats.comment_count)) }</span>
                    <span>{ format!("📈 {}", format_percent(video.engagement_rate)) }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ShareBarProps {
    label: AttrValue,
    views: f64,
    watch_time: f64,
}

#[function_component(ShareBar)]
fn share_bar(props: &ShareBarProps) -> Html {
    html! {
        <div class="mb-2">
            <div class="flex justify-between text-sm text-gray-700">
                <span>{ props.label.clone() }</span>
                <span title={format!("Watch time: {:.1}%", props.watch_time)}>
                    { format!("{:.1}%", props.views) }
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded h-2">
                <div class="bg-red-500 h-2 rounded" style={bar_width(props.views)}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemographicsPanelProps {
    pub profile: Option<DemographicsProfile>,
}

#[function_component(DemographicsPanel)]
pub fn demographics_panel(props: &DemographicsPanelProps) -> Html {
    let Some(profile) = &props.profile else {
        return html! {
            <p class="text-center text-gray-500">{"Audience data is not available."}</p>
        };
    };
    let gender = &profile.gender;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div>
                <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Age Groups"}</h3>
                { for profile.age_groups.iter().map(|group| html! {
                    <ShareBar
                        label={group.age_group.clone()}
                        views={group.views_percentage}
                        watch_time={group.watch_time_percentage}
                    />
                })}
            </div>
            <div>
                <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Gender"}</h3>
                <ShareBar
                    label="Male"
                    views={gender.male.views_percentage}
                    watch_time={gender.male.watch_time_percentage}
                />
                <ShareBar
                    label="Female"
                    views={gender.female.views_percentage}
                    watch_time={gender.female.watch_time_percentage}
                />
            </div>
            <div>
                <h3 class="text-lg font-semibold text-gray-800 mb-2">{"Top Countries"}</h3>
                { for profile.top_countries.iter().map(|country| html! {
                    <ShareBar
                        label={format!("{} ({})", country.country_name, country.country_code)}
                        views={country.views_percentage}
                        watch_time={country.watch_time_percentage}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsPanelProps {
    pub channel: ChannelSummary,
    pub videos: Vec<VideoSummary>,
}

#[function_component(AnalyticsPanel)]
pub fn analytics_panel(props: &AnalyticsPanelProps) -> Html {
    let analytics = ChannelAnalytics::derive(&props.channel, &props.videos);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <StatCard
                label="Average Views per Video"
                value={format_number(analytics.average_views_per_video)}
                hover={format_grouped(analytics.average_views_per_video)}
                color="blue"
            />
            <StatCard
                label="Subscriber Conversion"
                value={analytics.subscriber_conversion_display()}
                color="red"
            />
            <StatCard
                label="Content Output"
                value={format!("{} videos", format_grouped(analytics.content_output))}
                color="green"
            />
            <StatCard
                label="Average Engagement"
                value={analytics.engagement_display()}
                color="purple"
            />
        </div>
    }
}

#[function_component(FeatureOverview)]
pub fn feature_overview() -> Html {
    let features = [
        ("📊", "Channel Statistics", "Subscribers, total views and video count at a glance."),
        ("🎬", "Top Videos", "The most watched uploads with views, likes and comments."),
        ("🌍", "Audience Insights", "Age, gender and country breakdown of the audience."),
    ];

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-6">
            { for features.iter().map(|(icon, title, text)| html! {
                <div class="bg-gray-100 p-4 rounded-lg text-center">
                    <div class="text-3xl mb-2">{ *icon }</div>
                    <h3 class="font-semibold text-gray-800">{ *title }</h3>
                    <p class="text-sm text-gray-600">{ *text }</p>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(35.2), "width: 35.2%");
        assert_eq!(bar_width(140.0), "width: 100.0%");
        assert_eq!(bar_width(-3.0), "width: 0.0%");
        assert_eq!(bar_width(f64::NAN), "width: 0.0%");
    }

    #[test]
    fn tabs_start_on_videos() {
        assert_eq!(DashboardTab::default(), DashboardTab::Videos);
        assert_eq!(DashboardTab::ALL.len(), 3);
        assert_eq!(DashboardTab::Analytics.display_name(), "Analytics");
    }
}
