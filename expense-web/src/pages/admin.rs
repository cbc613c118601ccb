use crate::api::use_api;
use crate::components::{
    confirm, error_alert::ErrorAlert, expense_table::ExpenseTable, filter_bar::FilterBar,
    loading::Spinner, pagination_bar::PaginationBar,
};
use crate::models::app_state::{AppState, show_toast};
use crate::pages::DELETE_PROMPT;
use shared::ExpenseApi;
use shared::models::{Expense, ExpenseFilters, UserSummary};
use shared::pagination::Pagination;
use shared::sequence::RequestSequence;
use shared::toast::ToastRequest;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const FETCH_EXPENSES_FALLBACK: &str = "Failed to fetch expenses";
const FETCH_USERS_FALLBACK: &str = "Failed to fetch users";
const DELETE_FALLBACK: &str = "Failed to delete expense";

/// Every user's expenses, paginated on the server.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let api = use_api();
    let dispatch = use_dispatch::<AppState>();
    let is_staff = use_selector(|state: &AppState| state.session.is_staff());

    let filters = use_state(ExpenseFilters::default);
    let pagination = use_state(Pagination::default);
    let expenses = use_state(Vec::<Expense>::new);
    let users = use_state(Vec::<UserSummary>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let busy = use_state(|| false);
    let reload = use_state(|| 0_u32);
    let sequence = use_memo((), |_| RequestSequence::new());

    {
        let api = api.clone();
        let users = users.clone();
        let error = error.clone();
        use_effect_with(*is_staff, move |is_staff| {
            if *is_staff {
                spawn_local(async move {
                    match api.list_users().await {
                        Ok(list) => users.set(list),
                        Err(err) => error.set(Some(err.message_or(FETCH_USERS_FALLBACK))),
                    }
                });
            }
            || ()
        });
    }

    {
        let api = api.clone();
        let pagination = pagination.clone();
        let expenses = expenses.clone();
        let error = error.clone();
        let loading = loading.clone();
        let sequence = sequence.clone();
        let deps = (
            (*filters).clone(),
            pagination.current_page(),
            *reload,
            *is_staff,
        );
        use_effect_with(deps, move |(filters, page, _, is_staff)| {
            if *is_staff {
                let filters = filters.clone();
                let page = *page;
                let ticket = sequence.begin();
                loading.set(true);
                spawn_local(async move {
                    let outcome = api.list_expenses(&filters, Some(page)).await;
                    sequence.settle(ticket, || {
                        match outcome {
                            Ok(listing) => {
                                let mut next = *pagination;
                                if next.record_count(listing.count) {
                                    log(&format!(
                                        "Page {page} is out of range, moving to {}",
                                        next.current_page()
                                    ));
                                }
                                pagination.set(next);
                                expenses.set(listing.results);
                                error.set(None);
                            }
                            Err(err) => error.set(Some(err.message_or(FETCH_EXPENSES_FALLBACK))),
                        }
                        loading.set(false);
                    });
                });
            }
            || ()
        });
    }

    let on_filters = {
        let filters = filters.clone();
        let pagination = pagination.clone();
        Callback::from(move |next: ExpenseFilters| {
            let mut first = *pagination;
            first.reset();
            pagination.set(first);
            filters.set(next);
        })
    };

    let on_page = {
        let pagination = pagination.clone();
        Callback::from(move |requested: u32| {
            let mut next = *pagination;
            if next.go_to(requested) {
                pagination.set(next);
            }
        })
    };

    let on_delete = {
        let error = error.clone();
        let busy = busy.clone();
        let reload = reload.clone();
        Callback::from(move |id: i64| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let error = error.clone();
            let busy = busy.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api.delete_expense(id).await {
                    Ok(()) => {
                        reload.set(reload.wrapping_add(1));
                        show_toast(
                            &dispatch,
                            ToastRequest::success("Expense deleted successfully."),
                        );
                    }
                    Err(err) => error.set(Some(err.message_or(DELETE_FALLBACK))),
                }
                busy.set(false);
            });
        })
    };

    if !*is_staff {
        return html! { <div class="text-center p-4">{"Access denied. Admins only."}</div> };
    }

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Admin Panel"}</h1>
            <ErrorAlert message={(*error).clone()} />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"All Expenses"}</h2>
                    <FilterBar
                        filters={(*filters).clone()}
                        on_change={on_filters}
                        users={Some((*users).clone())}
                    />
                    if *loading {
                        <Spinner />
                    } else {
                        <ExpenseTable
                            expenses={(*expenses).clone()}
                            show_owner=true
                            {on_delete}
                            busy={*busy}
                        />
                    }
                    <PaginationBar
                        pagination={*pagination}
                        {on_page}
                        disabled={*loading}
                    />
                </div>
            </div>
        </div>
    }
}
