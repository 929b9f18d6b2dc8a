pub mod components;
pub mod panels;

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::search::state::SearchViewState;
use crate::search::SearchOrchestrator;
use components::{ChannelOverview, ErrorMessage, HealthBadge, LoadingIndicator, SearchBar};
use panels::{AnalyticsPanel, DashboardTab, DemographicsPanel, FeatureOverview, TabBar, VideosPanel};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let state = use_reducer(SearchViewState::default);
    let active_tab = use_state(DashboardTab::default);

    let orchestrator = {
        let config = config.clone();
        use_memo((), move |_| SearchOrchestrator::new(ApiClient::from_config(&config)))
    };

    // Health check on mount; anything still running when the page goes away
    // must not touch the reducer.
    {
        let orchestrator = orchestrator.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let checker = orchestrator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                checker
                    .check_system_health(move |action| dispatcher.dispatch(action))
                    .await;
            });
            move || orchestrator.detach()
        });
    }

    let on_search = {
        let orchestrator = orchestrator.clone();
        let dispatcher = state.dispatcher();
        let active_tab = active_tab.clone();
        Callback::from(move |query: String| {
            if !orchestrator.accepts(&query) {
                log::debug!("search for {:?} not started", query);
                return;
            }
            let orchestrator = orchestrator.clone();
            let dispatcher = dispatcher.clone();
            active_tab.set(DashboardTab::Videos);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = orchestrator
                    .perform_search(&query, move |action| dispatcher.dispatch(action))
                    .await;
                log::debug!("search for {:?} ended with {:?}", query, outcome);
            });
        })
    };

    let on_tab_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: DashboardTab| active_tab.set(tab))
    };

    let results = match &state.channel {
        Some(channel) => {
            let panel = match *active_tab {
                DashboardTab::Videos => html! { <VideosPanel videos={state.videos.clone()} /> },
                DashboardTab::Demographics => html! {
                    <DemographicsPanel profile={state.demographics.clone()} />
                },
                DashboardTab::Analytics => html! {
                    <AnalyticsPanel channel={channel.clone()} videos={state.videos.clone()} />
                },
            };
            html! {
                <>
                    <ChannelOverview channel={channel.clone()} />
                    <TabBar active={*active_tab} on_select={on_tab_select} />
                    { panel }
                </>
            }
        }
        None if state.is_loading() => html! { <LoadingIndicator /> },
        None => html! { <FeatureOverview /> },
    };

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-5xl">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-3xl font-bold text-gray-800">{ &config.app_name }</h1>
                    <HealthBadge health={state.system_health.clone()} />
                </div>

                <SearchBar
                    query={state.query.clone()}
                    loading={state.is_loading()}
                    on_search={on_search}
                />

                <ErrorMessage error_message={state.error.clone()} />

                { results }
            </div>
        </div>
    }
}
