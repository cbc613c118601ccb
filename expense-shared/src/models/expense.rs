use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Spending category accepted by the expense service.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Travel,
    Utilities,
    Misc,
}

impl Category {
    /// Wire value, also used as form option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Utilities => "utilities",
            Self::Misc => "misc",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::Misc => "Miscellaneous",
        }
    }
}

/// An expense record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    /// Owner name; present on listings visible to staff.
    #[serde(default)]
    pub username: Option<String>,
    /// Owner id.
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Copy the writable fields into a request body, e.g. to prefill an edit form.
    #[must_use]
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            title: self.title.clone(),
            amount: self.amount,
            category: self.category,
            date: self.date,
            notes: self.notes.clone(),
        }
    }
}

/// Body for `POST /api/expenses/` and `PUT /api/expenses/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// One row of `GET /api/summary/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_amount: Decimal,
}

impl CategoryTotal {
    /// Percentage of the grand total held by each row, in input order.
    ///
    /// Returns all zeros when the grand total is zero.
    #[must_use]
    pub fn shares(rows: &[Self]) -> Vec<f64> {
        let total: Decimal = rows.iter().map(|row| row.total_amount).sum();
        if total.is_zero() {
            return vec![0.0; rows.len()];
        }
        rows.iter()
            .map(|row| {
                (row.total_amount / total * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            })
            .collect()
    }
}

/// A page of results, normalized from either list response shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap a bare, unpaginated list.
    #[must_use]
    pub fn from_vec(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }
}

/// Paginated endpoints answer `{count, results}`, the rest a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListBody<T> {
    Page(Paginated<T>),
    Bare(Vec<T>),
}

impl<T> From<ListBody<T>> for Paginated<T> {
    fn from(body: ListBody<T>) -> Self {
        match body {
            ListBody::Page(page) => page,
            ListBody::Bare(items) => Paginated::from_vec(items),
        }
    }
}
