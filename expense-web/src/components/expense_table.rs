use crate::routes::MainRoute;
use shared::models::Expense;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub expenses: Vec<Expense>,
    pub on_delete: Callback<i64>,
    /// Adds the owner column.
    #[prop_or_default]
    pub show_owner: bool,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    if props.expenses.is_empty() {
        return html! { <p class="text-base-content/60 p-3">{"No expenses found."}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>{"Title"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Category"}</th>
                        <th>{"Date"}</th>
                        if props.show_owner {
                            <th>{"Username"}</th>
                        }
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.expenses.iter().map(|expense| {
                        let id = expense.id;
                        let on_delete = props.on_delete.reform(move |_: MouseEvent| id);
                        html! {
                            <tr key={id}>
                                <td>{ expense.title.clone() }</td>
                                <td>{ format!("₹{}", expense.amount) }</td>
                                <td>{ expense.category.label() }</td>
                                <td>{ expense.date.format("%Y-%m-%d").to_string() }</td>
                                if props.show_owner {
                                    <td>{ expense.username.clone().unwrap_or_default() }</td>
                                }
                                <td class="flex gap-2">
                                    <Link<MainRoute> to={MainRoute::ExpenseDetail { id }} classes="btn btn-ghost btn-xs">
                                        {"Edit"}
                                    </Link<MainRoute>>
                                    <button class="btn btn-ghost btn-xs text-error" onclick={on_delete} disabled={props.busy}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
