//! Client-side form validation.
//!
//! Mirrors the rules the expense service enforces so obvious mistakes are
//! reported before a round trip. The service remains authoritative.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::errors::{FieldErrors, flatten_fields};
use crate::models::{Category, Expense, ExpenseInput, RegisterRequest};

pub const TITLE_MAX_CHARS: usize = 50;
const AMOUNT_MAX_DIGITS: u32 = 10;
const AMOUNT_MAX_SCALE: u32 = 2;

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_]+$").expect("username pattern is valid")
});

/// Field errors found before submitting a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: FieldErrors,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &FieldErrors {
        &self.fields
    }

    /// First message for `field`, for inline display.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&flatten_fields(&self.fields))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw values of the create/edit expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub notes: String,
}

impl ExpenseForm {
    /// Blank form with the default category preselected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            category: Category::default().as_str().to_string(),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing record.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.as_str().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            notes: expense.notes.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert into a request body.
    ///
    /// # Errors
    /// Returns every field that failed, keyed by form field name.
    pub fn validate(&self) -> Result<ExpenseInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "This field is required.");
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.add(
                "title",
                format!("Ensure this field has no more than {TITLE_MAX_CHARS} characters."),
            );
        }

        let amount = match Decimal::from_str(self.amount.trim()) {
            Ok(amount) if amount <= Decimal::ZERO => {
                errors.add("amount", "Amount must be greater than zero.");
                None
            }
            Ok(amount) if amount.normalize().scale() > AMOUNT_MAX_SCALE => {
                errors.add(
                    "amount",
                    format!("Ensure that there are no more than {AMOUNT_MAX_SCALE} decimal places."),
                );
                None
            }
            Ok(amount) if amount.trunc().to_string().trim_start_matches('-').len()
                > (AMOUNT_MAX_DIGITS - AMOUNT_MAX_SCALE) as usize =>
            {
                errors.add(
                    "amount",
                    format!("Ensure that there are no more than {AMOUNT_MAX_DIGITS} digits in total."),
                );
                None
            }
            Ok(amount) => Some(amount.normalize()),
            Err(_) => {
                errors.add("amount", "A valid number is required.");
                None
            }
        };

        let category = Category::from_str(self.category.trim()).ok();
        if category.is_none() {
            errors.add(
                "category",
                format!("\"{}\" is not a valid choice.", self.category.trim()),
            );
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.add("date", "Date has wrong format. Use YYYY-MM-DD.");
        }

        let notes = self.notes.trim();
        match (amount, category, date) {
            (Some(amount), Some(category), Some(date)) if errors.is_empty() => Ok(ExpenseInput {
                title: title.to_string(),
                amount,
                category,
                date,
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            }),
            _ => Err(errors),
        }
    }
}

/// Validate a registration request before sending it.
///
/// # Errors
/// Returns every field that failed.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if request.username.trim().is_empty() {
        errors.add("username", "This field is required.");
    } else if !USERNAME_PATTERN.is_match(request.username.trim()) {
        errors.add(
            "username",
            "Username should only contain alphanumeric with underscore",
        );
    }

    if !is_plausible_email(request.email.trim()) {
        errors.add("email", "Enter a valid email address.");
    }

    if request.password.is_empty() {
        errors.add("password", "This field is required.");
    }

    if request.password != request.confirm_password {
        errors.add("confirm_password", "Passwords do not match.");
    }

    errors.into_result()
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
