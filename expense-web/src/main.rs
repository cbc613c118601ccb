mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;

#[cfg(test)]
mod routes_test;

use api::ApiContext;
use app::App;
use components::error_alert::ErrorAlert;
use config::FrontendConfig;
use yew::Renderer;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    let api = use_memo((), |_| ApiContext::from_config(&FrontendConfig::new()));

    match &*api {
        Ok(api) => html! {
            <YewduxRoot>
                <ContextProvider<ApiContext> context={api.clone()}>
                    <App />
                </ContextProvider<ApiContext>>
            </YewduxRoot>
        },
        Err(error) => html! {
            <div class="p-6">
                <ErrorAlert message={format!("Client misconfigured: {error}")} />
            </div>
        },
    }
}

fn main() {
    // Print full panic payloads; the default hook truncates them in the console
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting Expense Tracker".into());

    Renderer::<Root>::with_root(
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .body()
            .unwrap()
            .into(),
    )
    .render();
}
