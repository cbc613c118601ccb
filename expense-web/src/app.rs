use crate::api::use_api;
use crate::components::{loading::Loading, toast::ToastHost};
use crate::models::app_state::{AppState, session_dispatcher};
use crate::routes::{MainRoute, switch};
use shared::session;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Application shell.
///
/// Probes the session once on mount; route guards are only evaluated after
/// that probe settled so a reload never bounces a signed-in user to `/login`.
#[function_component(App)]
pub fn app() -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let resolved = use_selector(|state: &AppState| state.session.identity_resolved());

    use_effect_with((), move |_| {
        spawn_local(async move {
            let user = session::fetch_user(api.as_ref(), session_dispatcher(&dispatch)).await;
            match user {
                Some(user) => log(&format!("Session restored for {}", user.username)),
                None => log("No active session"),
            }
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <ToastHost />
            if *resolved {
                <Switch<MainRoute> render={switch} />
            } else {
                <Loading />
            }
        </BrowserRouter>
    }
}
