use crate::api::use_api;
use crate::components::{
    category_chart::CategoryChart, confirm, error_alert::ErrorAlert, expense_form::ExpenseFormView,
    expense_table::ExpenseTable, filter_bar::FilterBar, loading::Spinner,
};
use crate::models::app_state::{AppState, show_toast};
use crate::pages::DELETE_PROMPT;
use shared::ExpenseApi;
use shared::models::{CategoryTotal, Expense, ExpenseFilters};
use shared::sequence::RequestSequence;
use shared::toast::ToastRequest;
use shared::validation::{ExpenseForm, ValidationErrors};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

const FETCH_EXPENSES_FALLBACK: &str = "Failed to fetch expenses";
const FETCH_SUMMARY_FALLBACK: &str = "Failed to fetch summary";
const CREATE_FALLBACK: &str = "Failed to create expense";
const DELETE_FALLBACK: &str = "Failed to delete expense";

/// Personal expenses: create form, category totals, filtered listing.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let user = use_selector(|state: &AppState| state.session.user().cloned());

    let filters = use_state(ExpenseFilters::default);
    let expenses = use_state(Vec::<Expense>::new);
    let totals = use_state(Vec::<CategoryTotal>::new);
    let form = use_state(ExpenseForm::new);
    let form_errors = use_state(|| None::<ValidationErrors>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let reload = use_state(|| 0_u32);
    let sequence = use_memo((), |_| RequestSequence::new());

    {
        let api = api.clone();
        let expenses = expenses.clone();
        let totals = totals.clone();
        let error = error.clone();
        let loading = loading.clone();
        let sequence = sequence.clone();
        use_effect_with(((*filters).clone(), *reload), move |(filters, _)| {
            let filters = filters.clone();
            let ticket = sequence.begin();
            loading.set(true);
            spawn_local(async move {
                let (listing, summary) = futures::join!(
                    api.list_expenses(&filters, None),
                    api.summary(&filters)
                );
                sequence.settle(ticket, || {
                    let mut message = None;
                    match listing {
                        Ok(page) => expenses.set(page.results),
                        Err(err) => message = Some(err.message_or(FETCH_EXPENSES_FALLBACK)),
                    }
                    match summary {
                        Ok(rows) => totals.set(rows),
                        Err(err) => {
                            message = message.or_else(|| Some(err.message_or(FETCH_SUMMARY_FALLBACK)));
                        }
                    }
                    error.set(message);
                    loading.set(false);
                });
            });
            || ()
        });
    }

    let on_filters = {
        let filters = filters.clone();
        Callback::from(move |next: ExpenseFilters| filters.set(next))
    };

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: ExpenseForm| form.set(next))
    };

    let on_create = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        let form = form.clone();
        let form_errors = form_errors.clone();
        let error = error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
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
            let form = form.clone();
            let error = error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.create_expense(&input).await {
                    Ok(_) => {
                        form.set(ExpenseForm::new());
                        reload.set(reload.wrapping_add(1));
                        show_toast(&dispatch, ToastRequest::success("Expense created."));
                    }
                    Err(err) => error.set(Some(err.payload_message(CREATE_FALLBACK))),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        let error = error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |id: i64| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            saving.set(true);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let error = error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_expense(id).await {
                    Ok(()) => {
                        reload.set(reload.wrapping_add(1));
                        show_toast(&dispatch, ToastRequest::success("Expense deleted successfully."));
                    }
                    Err(err) => error.set(Some(err.message_or(DELETE_FALLBACK))),
                }
                saving.set(false);
            });
        })
    };

    let is_staff = (*user).as_ref().is_some_and(|user| user.is_staff);

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{"Expense Dashboard"}</h1>
                if let Some(user) = (*user).as_ref() {
                    <p class="text-base-content/70">{ format!("Welcome, {}", user.username) }</p>
                }
            </div>
            <ErrorAlert message={(*error).clone()} />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Add Expense"}</h2>
                        <ExpenseFormView
                            form={(*form).clone()}
                            errors={(*form_errors).clone()}
                            on_change={on_form_change}
                            on_submit={on_create}
                            busy={*saving}
                            submit_label="Add Expense"
                            busy_label="Adding..."
                        />
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Spending by Category"}</h2>
                        <CategoryChart totals={(*totals).clone()} />
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Expenses"}</h2>
                    <FilterBar filters={(*filters).clone()} on_change={on_filters} />
                    if *loading {
                        <Spinner />
                    } else {
                        <ExpenseTable
                            expenses={(*expenses).clone()}
                            show_owner={is_staff}
                            {on_delete}
                            busy={*saving}
                        />
                    }
                </div>
            </div>
        </div>
    }
}
