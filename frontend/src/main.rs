use channel_dashboard::config::DashboardConfig;
use channel_dashboard::{logging, App, AppProps};

fn main() {
    let config = DashboardConfig::from_window();
    logging::init(config.debug);

    log::info!(
        "NAME: \"{}\", API: \"{}\" TIMEOUT: {} ms DEBUG: \"{}\"",
        config.app_name,
        config.api_base_url,
        config.request_timeout_ms,
        config.debug
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
