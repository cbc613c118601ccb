use crate::components::field_value;
use shared::models::Category;
use shared::validation::{ExpenseForm, TITLE_MAX_CHARS, ValidationErrors};
use strum::IntoEnumIterator;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Amount,
    Category,
    Date,
    Notes,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
            Self::Notes => "notes",
        }
    }

    fn assign(self, form: &mut ExpenseForm, value: String) {
        match self {
            Self::Title => form.title = value,
            Self::Amount => form.amount = value,
            Self::Category => form.category = value,
            Self::Date => form.date = value,
            Self::Notes => form.notes = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormViewProps {
    pub form: ExpenseForm,
    pub on_change: Callback<ExpenseForm>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub errors: Option<ValidationErrors>,
    #[prop_or_default]
    pub busy: bool,
    pub submit_label: AttrValue,
    pub busy_label: AttrValue,
}

/// Controlled create/edit form for one expense.
#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormViewProps) -> Html {
    let on_field = |field: Field| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let mut next = form.clone();
            field.assign(&mut next, field_value(&event));
            on_change.emit(next);
        })
    };
    let on_text = |field: Field| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = form.clone();
            field.assign(&mut next, field_value(&event));
            on_change.emit(next);
        })
    };
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };
    let error_for = |field: Field| -> Html {
        props
            .errors
            .as_ref()
            .and_then(|errors| errors.first(field.name()))
            .map_or_else(
                || html! {},
                |message| html! { <span class="text-error text-sm">{ message.to_string() }</span> },
            )
    };

    html! {
        <form class="space-y-4" {onsubmit}>
            <label class="form-control w-full">
                <span class="label-text">{"Title"}</span>
                <input
                    type="text"
                    class="input input-bordered w-full"
                    maxlength={TITLE_MAX_CHARS.to_string()}
                    value={props.form.title.clone()}
                    oninput={on_text(Field::Title)}
                />
                { error_for(Field::Title) }
            </label>
            <label class="form-control w-full">
                <span class="label-text">{"Amount"}</span>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    class="input input-bordered w-full"
                    value={props.form.amount.clone()}
                    oninput={on_text(Field::Amount)}
                />
                { error_for(Field::Amount) }
            </label>
            <label class="form-control w-full">
                <span class="label-text">{"Category"}</span>
                <select class="select select-bordered w-full" onchange={on_field(Field::Category)}>
                    { for Category::iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={props.form.category == category.as_str()}
                        >
                            { category.label() }
                        </option>
                    }) }
                </select>
                { error_for(Field::Category) }
            </label>
            <label class="form-control w-full">
                <span class="label-text">{"Date"}</span>
                <input
                    type="date"
                    class="input input-bordered w-full"
                    value={props.form.date.clone()}
                    onchange={on_field(Field::Date)}
                />
                { error_for(Field::Date) }
            </label>
            <label class="form-control w-full">
                <span class="label-text">{"Notes"}</span>
                <textarea
                    class="textarea textarea-bordered w-full"
                    value={props.form.notes.clone()}
                    oninput={on_text(Field::Notes)}
                />
            </label>
            <button type="submit" class="btn btn-primary w-full" disabled={props.busy}>
                { if props.busy { props.busy_label.to_string() } else { props.submit_label.to_string() } }
            </button>
        </form>
    }
}
