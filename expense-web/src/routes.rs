use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::pages::{AdminPage, DashboardPage, ExpenseDetailPage, LoginPage, RegisterPage};
use shared::access::{self, Access, Page};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/expense/:id")]
    ExpenseDetail { id: i64 },
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// The page this route shows, for the access policy.
    pub fn page(&self) -> Page {
        match self {
            Self::Root => Page::Root,
            Self::Login => Page::Login,
            Self::Register => Page::Register,
            Self::Dashboard => Page::Dashboard,
            Self::ExpenseDetail { id } => Page::ExpenseDetail(*id),
            Self::Admin => Page::Admin,
            Self::NotFound => Page::NotFound,
        }
    }
}

impl From<Page> for MainRoute {
    fn from(page: Page) -> Self {
        match page {
            Page::Root => Self::Root,
            Page::Login => Self::Login,
            Page::Register => Self::Register,
            Page::Dashboard => Self::Dashboard,
            Page::ExpenseDetail(id) => Self::ExpenseDetail { id },
            Page::Admin => Self::Admin,
            Page::NotFound => Self::NotFound,
        }
    }
}

/// Navigation label of a page.
pub fn title(page: Page) -> &'static str {
    match page {
        Page::Root | Page::Dashboard => "Dashboard",
        Page::Login => "Login",
        Page::Register => "Register",
        Page::ExpenseDetail(_) => "Expense",
        Page::Admin => "Admin",
        Page::NotFound => "Not found",
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: MainRoute,
}

#[function_component(GuardedRoute)]
fn guarded_route(props: &GuardedRouteProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let page = props.route.page();

    match access::decide(page, &session) {
        Access::Redirect(target) => {
            log(&format!("Redirecting {} to {}", page.path(), target.path()));
            html! { <Redirect<MainRoute> to={MainRoute::from(target)} /> }
        }
        Access::Render => {
            let content = match page {
                Page::Login => html! { <LoginPage /> },
                Page::Register => html! { <RegisterPage /> },
                Page::Dashboard => html! { <DashboardPage /> },
                Page::ExpenseDetail(id) => html! { <ExpenseDetailPage {id} /> },
                Page::Admin => html! { <AdminPage /> },
                Page::Root | Page::NotFound => html! {},
            };
            html! {
                <Layout current={page}>
                    {content}
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(&format!("Switching to main route: {route:?}"));
    html! { <GuardedRoute {route} /> }
}
