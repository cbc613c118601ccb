use crate::routes::{MainRoute, title};
use shared::access::Page;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub page: Page,
    pub current: Page,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.page == props.current {
        "btn-active"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={MainRoute::from(props.page)} classes={classes!("btn", "btn-ghost", "btn-sm", active_route_class)}>
              {title(props.page)}
          </Link<MainRoute>>
      </li>
    }
}
