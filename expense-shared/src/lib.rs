#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]
//! Shared core of the expense tracker client.
//!
//! Everything that does not need a browser lives here: the REST models, the
//! credentialed API client, error normalization, the session and toast
//! reducers, route access policy, pagination, request sequencing and form
//! validation. The Yew application in `expense-web` wires these together.

pub mod access;
pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod sequence;
pub mod session;
pub mod toast;
pub mod validation;

pub use api::{ExpenseApi, ExpenseClient};
pub use config::ApiConfig;
pub use errors::{ApiError, ApiResult};
