use yew::prelude::*;
use log::info;
use shared::Route;

mod components;
mod hooks;
mod services;

use components::{BillsPage, Header, NewBillPage};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::ConsoleLogger;

/// View to show for the current location hash
fn initial_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .and_then(|hash| Route::from_path(&hash))
        .unwrap_or(Route::Bills)
}

fn write_location(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let hash = route.path().trim_start_matches('#');
    let hash = if route == Route::Login { "" } else { hash };
    if window.location().set_hash(hash).is_err() {
        log::warn!("Could not update location for {:?}", route);
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    api_client: ApiClient,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let route = use_state(initial_route);

    let on_navigate = {
        let route = route.clone();
        use_callback((), move |next: Route, _| {
            info!("Navigating to {}", next.path());
            write_location(next);
            route.set(next);
        })
    };

    let page = match *route {
        Route::Bills => html! {
            <BillsPage api_client={props.api_client.clone()} on_navigate={on_navigate.clone()} />
        },
        Route::NewBill => html! {
            <NewBillPage api_client={props.api_client.clone()} on_navigate={on_navigate.clone()} />
        },
        Route::Login | Route::Dashboard => html! {
            <div class="content">
                <div class="content-title">{"Cette page n'est pas disponible ici."}</div>
            </div>
        },
    };

    html! {
        <div class="layout">
            <Header active_route={*route} on_navigate={on_navigate} />
            <main class="page">
                {page}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    ConsoleLogger::init(config.log_level);
    info!("Using backend {}", config.api_base_url);

    let api_client = ApiClient::from_config(&config);
    yew::Renderer::<App>::with_props(AppProps { api_client }).render();
}
