use shared::pagination::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_page: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let pagination = props.pagination;
    let current = pagination.current_page();

    let on_previous = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(current.saturating_sub(1)))
    };
    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(current.saturating_add(1)))
    };

    html! {
        <div class="flex items-center justify-between mt-4">
            <button
                class="btn btn-sm"
                onclick={on_previous}
                disabled={props.disabled || !pagination.has_previous()}
            >
                {"Previous"}
            </button>
            <span class="text-sm text-base-content/70">
                { format!("Page {} of {} · {} expenses", current, pagination.total_pages().max(1), pagination.total_count()) }
            </span>
            <button
                class="btn btn-sm"
                onclick={on_next}
                disabled={props.disabled || !pagination.has_next()}
            >
                {"Next"}
            </button>
        </div>
    }
}
