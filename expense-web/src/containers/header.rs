use crate::components::header_nav_item::HeaderNavItem;
use crate::models::app_state::{AppState, session_dispatcher};
use crate::routes::MainRoute;
use shared::access::{self, Page};
use shared::session;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        session::logout(session_dispatcher(&dispatch));
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Root);
        }
    });

    let links = access::nav_links(&session);

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Root} classes="btn btn-ghost text-lg">
                {"Expense Tracker"}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal gap-1">
                { for links.into_iter().map(|page| html! {
                    <HeaderNavItem {page} current={props.current} />
                }) }
            </ul>
            {
                session.user().map_or_else(
                    || html! {},
                    |user| html! {
                        <div class="flex items-center gap-2">
                            <span class="text-sm text-base-content/80">{ &user.username }</span>
                            <button class="btn btn-outline btn-sm" onclick={on_logout}>
                                {"Logout"}
                            </button>
                        </div>
                    },
                )
            }
        </nav>
    }
}
