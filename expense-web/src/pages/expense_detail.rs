use crate::api::use_api;
use crate::components::{
    confirm, error_alert::ErrorAlert, expense_form::ExpenseFormView, loading::Spinner,
};
use crate::models::app_state::{AppState, show_toast};
use crate::pages::DELETE_PROMPT;
use crate::routes::MainRoute;
use shared::models::Expense;
use shared::toast::ToastRequest;
use shared::validation::{ExpenseForm, ValidationErrors};
use shared::{ApiError, ExpenseApi};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_dispatch;

const NOT_FOUND_FALLBACK: &str = "Expense not found.";
const FETCH_FALLBACK: &str = "Failed to fetch expense";
const UPDATE_FALLBACK: &str = "Failed to update expense";
const DELETE_FALLBACK: &str = "Failed to delete expense";

fn load_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound { .. } => error.message_or(NOT_FOUND_FALLBACK),
        _ => error.message_or(FETCH_FALLBACK),
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseDetailPageProps {
    pub id: i64,
}

/// Edit or delete a single expense.
#[function_component(ExpenseDetailPage)]
pub fn expense_detail_page(props: &ExpenseDetailPageProps) -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();

    let expense = use_state(|| None::<Expense>);
    let form = use_state(ExpenseForm::new);
    let form_errors = use_state(|| None::<ValidationErrors>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    {
        let api = api.clone();
        let expense = expense.clone();
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            spawn_local(async move {
                match api.get_expense(id).await {
                    Ok(found) => {
                        form.set(ExpenseForm::from_expense(&found));
                        expense.set(Some(found));
                        error.set(None);
                    }
                    Err(err) => {
                        expense.set(None);
                        error.set(Some(load_message(&err)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: ExpenseForm| form.set(next))
    };

    let on_update = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let form_errors = form_errors.clone();
        let error = error.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |()| {
            let input = match form.validate() {
                Ok(input) => input,
                Err(invalid) => {
                    form_errors.set(Some(invalid));
                    return;
                }
            };
            form_errors.set(None);
            saving.set(true);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.update_expense(id, &input).await {
                    Ok(_) => {
                        show_toast(&dispatch, ToastRequest::success("Expense updated."));
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Root);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.payload_message(UPDATE_FALLBACK)));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let on_delete = {
        let error = error.clone();
        let saving = saving.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            saving.set(true);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.delete_expense(id).await {
                    Ok(()) => {
                        show_toast(
                            &dispatch,
                            ToastRequest::success("Expense deleted successfully."),
                        );
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Root);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.message_or(DELETE_FALLBACK)));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let body = if *loading {
        html! { <Spinner /> }
    } else if let Some(found) = (*expense).as_ref() {
        html! {
            <>
                <p class="text-sm text-base-content/60 mb-2">
                    { found.username.as_ref().map(|owner| format!("Recorded by {owner}")).unwrap_or_default() }
                </p>
                <ExpenseFormView
                    form={(*form).clone()}
                    errors={(*form_errors).clone()}
                    on_change={on_form_change}
                    on_submit={on_update}
                    busy={*saving}
                    submit_label="Update Expense"
                    busy_label="Saving..."
                />
                <button class="btn btn-error btn-outline w-full mt-4" onclick={on_delete} disabled={*saving}>
                    {"Delete Expense"}
                </button>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="max-w-xl mx-auto">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{"Expense Details"}</h1>
                    <ErrorAlert message={(*error).clone()} />
                    {body}
                </div>
            </div>
        </div>
    }
}
