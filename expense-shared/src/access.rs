//! Route access policy.
//!
//! Pure decision of whether a page may render for the current session, or
//! where navigation should be redirected instead. The Yew router maps its
//! routes onto [`Page`] and obeys the returned [`Access`].

use crate::session::SessionState;

/// Navigable pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Root,
    Login,
    Register,
    Dashboard,
    ExpenseDetail(i64),
    Admin,
    NotFound,
}

impl Page {
    /// Canonical path of the page.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::ExpenseDetail(id) => format!("/expense/{id}"),
            Self::Admin => "/admin".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(Page),
}

/// Decide whether `page` renders for `session`.
///
/// | page | renders when | otherwise |
/// |---|---|---|
/// | login, register | anonymous | dashboard |
/// | dashboard, expense detail | authenticated | login |
/// | admin | authenticated staff | dashboard |
/// | root, unknown | never | dashboard or login |
#[must_use]
pub fn decide(page: Page, session: &SessionState) -> Access {
    let authenticated = session.is_authenticated();
    match page {
        Page::Login | Page::Register if authenticated => Access::Redirect(Page::Dashboard),
        Page::Login | Page::Register => Access::Render,
        Page::Dashboard | Page::ExpenseDetail(_) if authenticated => Access::Render,
        Page::Dashboard | Page::ExpenseDetail(_) => Access::Redirect(Page::Login),
        Page::Admin if session.is_staff() => Access::Render,
        Page::Admin => Access::Redirect(Page::Dashboard),
        Page::Root | Page::NotFound => Access::Redirect(landing(session)),
    }
}

/// Where `/` leads for this session.
#[must_use]
pub fn landing(session: &SessionState) -> Page {
    if session.is_authenticated() {
        Page::Dashboard
    } else {
        Page::Login
    }
}

/// Links offered by the navigation bar, in display order.
#[must_use]
pub fn nav_links(session: &SessionState) -> Vec<Page> {
    if !session.is_authenticated() {
        return vec![Page::Login, Page::Register];
    }
    let mut links = vec![Page::Dashboard];
    if session.is_staff() {
        links.push(Page::Admin);
    }
    links
}
