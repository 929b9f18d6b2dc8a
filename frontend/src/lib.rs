pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboard;
mod env_variable_utils;
pub mod error;
pub mod logging;
pub mod models;
pub mod router;
pub mod search;
pub mod utils;

#[cfg(test)]
mod testing;

use crate::config::DashboardConfig;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: DashboardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<DashboardConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<DashboardConfig>>
    }
}
