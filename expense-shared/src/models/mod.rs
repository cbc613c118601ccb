pub mod expense;
pub mod filters;
pub mod user;

pub use expense::{Category, CategoryTotal, Expense, ExpenseInput, Paginated};
pub use filters::{ExpenseFilters, FilterField};
pub use user::{LoginRequest, RegisterRequest, RegisterResponse, User, UserSummary};
