mod admin;
mod dashboard;
mod expense_detail;
mod login;
mod register;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use expense_detail::ExpenseDetailPage;
pub use login::LoginPage;
pub use register::RegisterPage;

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this expense?";
