use crate::models::{ChannelSummary, SystemHealth};
use crate::utils::{
    display_handle, format_display_date, format_grouped, format_number, thumbnail_url,
    CHANNEL_THUMBNAIL_PLACEHOLDER,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                placeholder="Enter a channel name, e.g. Google Developers"
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                class="bg-red-600 text-white p-3 rounded-r-lg hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 disabled:opacity-50"
                disabled={props.loading || current_input.trim().is_empty()}
            >
                { if props.loading { "Searching..." } else { "Analyze" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct HealthBadgeProps {
    pub health: Option<SystemHealth>,
}

#[function_component(HealthBadge)]
pub fn health_badge(props: &HealthBadgeProps) -> Html {
    match &props.health {
        None => html! {
            <span class="px-3 py-1 rounded-full text-xs bg-gray-200 text-gray-600">
                {"Checking backend..."}
            </span>
        },
        Some(health) if health.is_healthy() => html! {
            <span class="px-3 py-1 rounded-full text-xs bg-green-100 text-green-800">
                {"Backend online"}
            </span>
        },
        Some(health) => html! {
            <span
                class="px-3 py-1 rounded-full text-xs bg-red-100 text-red-800"
                title={health.error.clone().unwrap_or_default()}
            >
                {"Backend unavailable"}
            </span>
        },
    }
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div class="flex items-center justify-center py-10">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-red-600"></div>
            <p class="ml-4 text-gray-600">{"Loading channel data..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hover: Option<AttrValue>,
    #[prop_or(AttrValue::Static("blue"))]
    pub color: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let color = &props.color;
    html! {
        <div class={format!("bg-{color}-100 p-4 rounded-lg")} title={props.hover.clone()}>
            <h3 class={format!("text-sm font-semibold text-{color}-800")}>{ props.label.clone() }</h3>
            <p class={format!("text-2xl font-bold text-{color}-600")}>{ props.value.clone() }</p>
        </div>
    }
}

/// Header details under the channel title, in display order.
pub fn channel_meta(channel: &ChannelSummary) -> Vec<String> {
    let mut meta = Vec::new();
    if let Some(handle) = channel.custom_url.as_deref().and_then(display_handle) {
        meta.push(handle);
    }
    if let Some(country) = &channel.country {
        meta.push(format!("🌍 {country}"));
    }
    if let Some(date) = &channel.published_at {
        meta.push(format!("📅 Since {}", format_display_date(date)));
    }
    if let Some(date) = &channel.last_updated {
        meta.push(format!("🔄 Updated {}", format_display_date(date)));
    }
    meta
}

#[derive(Properties, PartialEq)]
pub struct ChannelOverviewProps {
    pub channel: ChannelSummary,
}

#[function_component(ChannelOverview)]
pub fn channel_overview(props: &ChannelOverviewProps) -> Html {
    let channel = &props.channel;
    let stats = &channel.statistics;
    let thumbnail = thumbnail_url(
        &channel.thumbnails,
        &["high", "medium", "default"],
        CHANNEL_THUMBNAIL_PLACEHOLDER,
    );

    html! {
        <div class="mb-6">
            <div class="flex items-center gap-4 mb-4">
                <img src={thumbnail} alt={channel.title.clone()} class="w-20 h-20 rounded-full" />
                <div>
                    <h2 class="text-2xl font-bold text-gray-800">
                        <a href={format!("https://www.youtube.com/channel/{}", channel.channel_id)}
                           target="_blank"
                           class="hover:underline">
                            { &channel.title }
                        </a>
                    </h2>
                    <p class="text-sm text-gray-500 flex flex-wrap gap-3">
                        { for channel_meta(channel).into_iter().map(|item| html! {
                            <span>{ item }</span>
                        })}
                    </p>
                </div>
            </div>
            { for channel.description.iter().filter(|d| !d.is_empty()).map(|description| html! {
                <p class="text-gray-700 text-sm mb-4 line-clamp-3">{ description }</p>
            })}
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    label="Subscribers"
                    value={format_number(stats.subscriber_count)}
                    hover={format_grouped(stats.subscriber_count)}
                    color="red"
                />
                <StatCard
                    label="Total Views"
                    value={format_number(stats.view_count)}
                    hover={format_grouped(stats.view_count)}
                    color="blue"
                />
                <StatCard
                    label="Videos"
                    value={format_number(stats.video_count)}
                    hover={format_grouped(stats.video_count)}
                    color="green"
                />
            </div>
        </div>
    }
}
