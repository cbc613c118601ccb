//! Tests for the routing table
//!
//! Checks the mapping between router paths and the pages the access policy
//! reasons about.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, title};
    use shared::access::Page;
    use yew_router::Routable;

    const PAGES: [Page; 7] = [
        Page::Root,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::ExpenseDetail(42),
        Page::Admin,
        Page::NotFound,
    ];

    /// Every page converts to a route and back unchanged
    #[test]
    fn test_page_route_round_trip() {
        for page in PAGES {
            assert_eq!(MainRoute::from(page).page(), page);
        }
    }

    /// Route paths agree with the canonical page paths
    #[test]
    fn test_route_paths_match_pages() {
        for page in PAGES {
            assert_eq!(MainRoute::from(page).to_path(), page.path());
        }
    }

    /// Expense ids are parsed from the path
    #[test]
    fn test_expense_detail_recognized() {
        assert_eq!(
            MainRoute::recognize("/expense/7"),
            Some(MainRoute::ExpenseDetail { id: 7 })
        );
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::Admin));
    }

    /// Unknown paths fall back to the not-found route
    #[test]
    fn test_not_found_route() {
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }

    /// Navigation labels
    #[test]
    fn test_titles() {
        assert_eq!(title(Page::Dashboard), "Dashboard");
        assert_eq!(title(Page::Admin), "Admin");
        assert_eq!(title(Page::Login), "Login");
    }
}
