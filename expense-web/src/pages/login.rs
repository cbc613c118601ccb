use crate::api::use_api;
use crate::components::{error_alert::ErrorAlert, field_value};
use crate::models::app_state::{AppState, session_dispatcher};
use crate::routes::MainRoute;
use shared::models::LoginRequest;
use shared::session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let status = use_selector(|state: &AppState| {
        (
            state.session.loading(),
            state.session.error().map(str::to_string),
        )
    });
    let username = use_state(String::new);
    let password = use_state(String::new);

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || session::clear_error(session_dispatcher(&dispatch))
        });
    }

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = LoginRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            let api = api.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                // On success the route guard redirects to the dashboard.
                let _ =
                    session::login(api.as_ref(), &credentials, session_dispatcher(&dispatch)).await;
            });
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| username.set(field_value(&event)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| password.set(field_value(&event)))
    };

    let (is_busy, error) = (*status).clone();
    let disable_submit = username.is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <ErrorAlert message={error} />
                    <label class="form-control">
                        <span class="label-text">{"Username"}</span>
                        <input
                            class="input input-bordered"
                            type="text"
                            autocomplete="username"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Password"}</span>
                        <input
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </label>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"No account yet? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"Register"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
