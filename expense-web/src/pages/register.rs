use crate::api::use_api;
use crate::components::{error_alert::ErrorAlert, field_value};
use crate::models::app_state::{AppState, session_dispatcher, show_toast};
use crate::routes::MainRoute;
use shared::models::RegisterRequest;
use shared::session;
use shared::toast::ToastRequest;
use shared::validation::{ValidationErrors, validate_registration};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

const REGISTERED: &str = "Registration successful";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    fn assign(self, request: &mut RegisterRequest, value: String) {
        match self {
            Self::Username => request.username = value,
            Self::Email => request.email = value,
            Self::Password => request.password = value,
            Self::ConfirmPassword => request.confirm_password = value,
        }
    }

    fn value(self, request: &RegisterRequest) -> String {
        match self {
            Self::Username => request.username.clone(),
            Self::Email => request.email.clone(),
            Self::Password => request.password.clone(),
            Self::ConfirmPassword => request.confirm_password.clone(),
        }
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let status = use_selector(|state: &AppState| {
        (
            state.session.loading(),
            state.session.error().map(str::to_string),
        )
    });
    let request = use_state(RegisterRequest::default);
    let errors = use_state(|| None::<ValidationErrors>);
    let navigator = use_navigator();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || session::clear_error(session_dispatcher(&dispatch))
        });
    }

    let onsubmit = {
        let request = request.clone();
        let errors = errors.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut body = (*request).clone();
            body.username = body.username.trim().to_string();
            body.email = body.email.trim().to_string();
            if let Err(invalid) = validate_registration(&body) {
                errors.set(Some(invalid));
                return;
            }
            errors.set(None);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let outcome =
                    session::register(api.as_ref(), &body, session_dispatcher(&dispatch)).await;
                if outcome.is_ok() {
                    show_toast(&dispatch, ToastRequest::success(REGISTERED));
                    if let Some(navigator) = navigator {
                        navigator.push(&MainRoute::Login);
                    }
                }
            });
        })
    };

    let input = |field: Field, label: &'static str, kind: &'static str| -> Html {
        let oninput = {
            let request = request.clone();
            Callback::from(move |event: InputEvent| {
                let mut next = (*request).clone();
                field.assign(&mut next, field_value(&event));
                request.set(next);
            })
        };
        let message = errors
            .as_ref()
            .and_then(|errors| errors.first(field.name()))
            .map(str::to_string);
        html! {
            <label class="form-control">
                <span class="label-text">{label}</span>
                <input
                    class="input input-bordered"
                    type={kind}
                    required=true
                    value={field.value(&request)}
                    {oninput}
                />
                if let Some(message) = message {
                    <span class="text-error text-sm">{message}</span>
                }
            </label>
        }
    };

    let (is_busy, error) = (*status).clone();

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    <ErrorAlert message={error} />
                    { input(Field::Username, "Username", "text") }
                    { input(Field::Email, "Email", "email") }
                    { input(Field::Password, "Password", "password") }
                    { input(Field::ConfirmPassword, "Confirm Password", "password") }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
