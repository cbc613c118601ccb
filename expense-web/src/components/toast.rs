use crate::models::app_state::{AppState, dismiss_toast};
use shared::toast::ToastKind;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

fn alert_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
        ToastKind::Info => "alert-info",
        ToastKind::Warning => "alert-warning",
    }
}

/// Renders the singleton toast while it is visible.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toast = use_selector(|state: &AppState| state.toast.clone());
    let dispatch = use_dispatch::<AppState>();

    if !toast.is_visible {
        return html! {};
    }

    let on_dismiss = Callback::from(move |_: MouseEvent| dismiss_toast(&dispatch));

    html! {
        <div class="toast toast-top toast-end z-50">
            <div role="status" class={classes!("alert", alert_class(toast.kind))}>
                <span>{ toast.message.clone() }</span>
                <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_dismiss}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
