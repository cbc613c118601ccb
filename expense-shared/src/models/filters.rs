use chrono::NaiveDate;
use std::str::FromStr;

use super::expense::Category;

/// Form field names used by the filter bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StartDate,
    EndDate,
    Category,
    User,
}

/// Query filters shared by the expense listing and the summary endpoint.
///
/// Empty or unparsable form values clear the corresponding filter rather than
/// being forwarded to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<Category>,
    /// Owner id, honoured by the service for staff only.
    pub user: Option<i64>,
}

impl ExpenseFilters {
    /// Update one field from its raw form value.
    pub fn set(&mut self, field: FilterField, raw: &str) {
        let value = raw.trim();
        match field {
            FilterField::StartDate => self.start_date = parse_date(value),
            FilterField::EndDate => self.end_date = parse_date(value),
            FilterField::Category => self.category = Category::from_str(value).ok(),
            FilterField::User => self.user = value.parse().ok(),
        }
    }

    /// Builder-style variant of [`ExpenseFilters::set`].
    #[must_use]
    pub fn with(mut self, field: FilterField, raw: &str) -> Self {
        self.set(field, raw);
        self
    }

    /// Current form value of a field; empty when unset.
    #[must_use]
    pub fn value(&self, field: FilterField) -> String {
        match field {
            FilterField::StartDate => self.start_date.map(format_date).unwrap_or_default(),
            FilterField::EndDate => self.end_date.map(format_date).unwrap_or_default(),
            FilterField::Category => self
                .category
                .map(|category| category.as_str().to_string())
                .unwrap_or_default(),
            FilterField::User => self.user.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    /// Query-string pairs for the set filters, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(date) = self.start_date {
            pairs.push(("start_date", format_date(date)));
        }
        if let Some(date) = self.end_date {
            pairs.push(("end_date", format_date(date)));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(user) = self.user {
            pairs.push(("user", user.to_string()));
        }
        pairs
    }

    /// Whether no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_query() {
        let filters = ExpenseFilters::default();
        assert!(filters.is_empty());
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn set_fields_are_forwarded_in_order() {
        let filters = ExpenseFilters::default()
            .with(FilterField::Category, "travel")
            .with(FilterField::EndDate, "2024-03-31")
            .with(FilterField::StartDate, "2024-03-01")
            .with(FilterField::User, "12");
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("start_date", "2024-03-01".to_string()),
                ("end_date", "2024-03-31".to_string()),
                ("category", "travel".to_string()),
                ("user", "12".to_string()),
            ]
        );
    }

    #[test]
    fn blank_or_invalid_values_clear_the_filter() {
        let mut filters = ExpenseFilters::default().with(FilterField::Category, "food");
        filters.set(FilterField::Category, "");
        assert!(filters.category.is_none());

        filters.set(FilterField::StartDate, "03/01/2024");
        assert!(filters.start_date.is_none());

        filters.set(FilterField::User, "everyone");
        assert!(filters.user.is_none());
    }

    #[test]
    fn value_round_trips_form_input() {
        let filters = ExpenseFilters::default().with(FilterField::StartDate, " 2024-01-05 ");
        assert_eq!(filters.value(FilterField::StartDate), "2024-01-05");
        assert_eq!(filters.value(FilterField::Category), "");
    }
}
