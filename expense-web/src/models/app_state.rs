use gloo_timers::callback::Timeout;
use shared::session::{SessionAction, SessionState};
use shared::toast::{ToastRequest, ToastState};
use yewdux::{Dispatch, Store};

use crate::config::FrontendConfig;

/// Process-wide client state: who is signed in and the current toast.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: SessionState,
    pub toast: ToastState,
}

/// Dispatch callback for the session actions.
pub fn session_dispatcher(dispatch: &Dispatch<AppState>) -> impl Fn(SessionAction) + Clone {
    let dispatch = dispatch.clone();
    move |action| dispatch.reduce_mut(|state| state.session.apply(action))
}

/// Show a toast and arm the timer that hides it.
pub fn show_toast(dispatch: &Dispatch<AppState>, request: ToastRequest) {
    let request = match request.duration_ms {
        Some(_) => request,
        None => request.with_duration(FrontendConfig::toast_duration_ms()),
    };
    let duration = request.duration_ms.unwrap_or_default();
    let generation = dispatch.reduce_mut(|state| state.toast.show(request));
    let dispatch = dispatch.clone();
    Timeout::new(duration, move || {
        dispatch.reduce_mut(|state| {
            state.toast.expire(generation);
        });
    })
    .forget();
}

pub fn dismiss_toast(dispatch: &Dispatch<AppState>) {
    dispatch.reduce_mut(|state| state.toast.dismiss());
}
