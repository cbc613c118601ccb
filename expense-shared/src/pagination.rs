//! Server-side pagination bookkeeping for the admin listing.

/// Page size used by the expense service.
pub const PAGE_SIZE: u32 = 10;

/// Current page plus the totals reported by the last response.
///
/// Pages are 1-based. Requests are clamped into `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    total_count: u64,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// `ceil(count / PAGE_SIZE)`.
    #[must_use]
    pub fn total_pages_for(count: u64) -> u32 {
        u32::try_from(count.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Clamp a requested page into the valid range.
    ///
    /// Page 0 becomes 1; pages past the end become the last page, or 1 when
    /// there are no results.
    #[must_use]
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages.max(1))
    }

    /// Move to `requested` (clamped). Returns whether the page changed.
    pub fn go_to(&mut self, requested: u32) -> bool {
        let page = self.clamp(requested);
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Record the count from a response.
    ///
    /// Returns `true` when the current page fell out of range and was clamped,
    /// meaning the caller should query again.
    pub fn record_count(&mut self, count: u64) -> bool {
        self.total_count = count;
        self.total_pages = Self::total_pages_for(count);
        let page = self.clamp(self.current_page);
        let clamped = page != self.current_page;
        self.current_page = page;
        clamped
    }

    /// Back to page 1, e.g. after a filter change.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case(1, 1)]
    #[test_case(10, 1)]
    #[test_case(11, 2)]
    #[test_case(25, 3)]
    #[test_case(30, 3)]
    fn total_pages_rounds_up(count: u64, pages: u32) {
        assert_eq!(Pagination::total_pages_for(count), pages);
    }

    #[test]
    fn page_two_of_twenty_five() {
        let mut pagination = Pagination::default();
        pagination.record_count(25);
        assert!(pagination.go_to(2));
        assert_eq!(pagination.current_page(), 2);
        assert_eq!(pagination.total_pages(), 3);
        assert!(pagination.has_previous());
        assert!(pagination.has_next());
    }

    #[test_case(0, 1 ; "zero clamps to first")]
    #[test_case(3, 3 ; "last page is kept")]
    #[test_case(7, 3 ; "past the end clamps to last")]
    fn requests_are_clamped(requested: u32, expected: u32) {
        let mut pagination = Pagination::default();
        pagination.record_count(25);
        pagination.go_to(requested);
        assert_eq!(pagination.current_page(), expected);
    }

    #[test]
    fn empty_results_stay_on_page_one() {
        let mut pagination = Pagination::default();
        pagination.record_count(0);
        assert!(!pagination.go_to(4));
        assert_eq!(pagination.current_page(), 1);
        assert!(!pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[test]
    fn shrinking_count_clamps_current_page() {
        let mut pagination = Pagination::default();
        pagination.record_count(21);
        pagination.go_to(3);
        assert!(pagination.record_count(20));
        assert_eq!(pagination.current_page(), 2);
        assert!(!pagination.record_count(20));
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pagination = Pagination::default();
        pagination.record_count(40);
        pagination.go_to(4);
        pagination.reset();
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), 4);
    }
}
