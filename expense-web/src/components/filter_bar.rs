use crate::components::field_value;
use shared::models::{Category, ExpenseFilters, FilterField, UserSummary};
use strum::IntoEnumIterator;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: ExpenseFilters,
    pub on_change: Callback<ExpenseFilters>,
    /// Adds an owner filter when present.
    #[prop_or_default]
    pub users: Option<Vec<UserSummary>>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_field = |field: FilterField| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            on_change.emit(filters.clone().with(field, &field_value(&event)));
        })
    };
    let value = |field: FilterField| props.filters.value(field);
    let columns = if props.users.is_some() { "sm:grid-cols-4" } else { "sm:grid-cols-3" };

    html! {
        <div class={classes!("grid", "grid-cols-1", columns, "gap-4", "mb-4")}>
            <label class="form-control">
                <span class="label-text">{"Start Date"}</span>
                <input
                    type="date"
                    class="input input-bordered"
                    value={value(FilterField::StartDate)}
                    onchange={on_field(FilterField::StartDate)}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"End Date"}</span>
                <input
                    type="date"
                    class="input input-bordered"
                    value={value(FilterField::EndDate)}
                    onchange={on_field(FilterField::EndDate)}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"Category"}</span>
                <select class="select select-bordered" onchange={on_field(FilterField::Category)}>
                    <option value="" selected={props.filters.category.is_none()}>{"All"}</option>
                    { for Category::iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={props.filters.category == Some(category)}
                        >
                            { category.label() }
                        </option>
                    }) }
                </select>
            </label>
            if let Some(users) = &props.users {
                <label class="form-control">
                    <span class="label-text">{"User"}</span>
                    <select class="select select-bordered" onchange={on_field(FilterField::User)}>
                        <option value="" selected={props.filters.user.is_none()}>{"All"}</option>
                        { for users.iter().map(|user| html! {
                            <option
                                value={user.id.to_string()}
                                selected={props.filters.user == Some(user.id)}
                            >
                                { user.username.clone() }
                            </option>
                        }) }
                    </select>
                </label>
            }
        </div>
    }
}
